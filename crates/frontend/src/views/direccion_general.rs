//! Executive view: every widget, full financial visibility.

use crate::shared::filter_panel::FilterPanel;
use crate::widgets::dashboard::DashboardWidgets;
use crate::widgets::layout_customizer::LayoutCustomizer;
use contracts::views::{view_config, UserView};
use leptos::prelude::*;

#[component]
pub fn DireccionGeneralPage() -> impl IntoView {
    let cfg = view_config(UserView::DireccionGeneral);

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>{cfg.name}</h1>
                    <p class="page__description">{cfg.description}</p>
                </div>
                <LayoutCustomizer view=UserView::DireccionGeneral />
            </header>
            <FilterPanel />
            <DashboardWidgets view=UserView::DireccionGeneral />
        </section>
    }
}
