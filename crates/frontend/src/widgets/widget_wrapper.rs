//! Visibility gate around every dashboard widget. Swaps content for a
//! locked placeholder; it never changes what data was computed, only
//! what is shown.

use crate::shared::icons::icon;
use contracts::views::{UserView, WidgetKind, WidgetRequirements};
use engine::widget_access;
use leptos::prelude::*;

#[component]
pub fn WidgetWrapper(
    widget: WidgetKind,
    view: UserView,
    #[prop(optional)] requirements: WidgetRequirements,
    children: ChildrenFn,
) -> impl IntoView {
    let access = widget_access(widget, view, requirements);

    if access.is_granted() {
        view! { <div class="widget">{children()}</div> }.into_any()
    } else {
        view! {
            <div class="widget widget--restricted">
                <div class="widget__restricted-header">
                    {icon("lock")}
                    <span>{widget.display_name()}</span>
                </div>
                <p class="widget__restricted-message">{access.restricted_message()}</p>
            </div>
        }
        .into_any()
    }
}
