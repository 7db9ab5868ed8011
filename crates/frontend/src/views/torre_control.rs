//! Operations view: all orders and the delivery map, monetary data
//! hidden.

use crate::shared::filter_panel::FilterPanel;
use crate::widgets::dashboard::DashboardWidgets;
use crate::widgets::layout_customizer::LayoutCustomizer;
use contracts::views::{view_config, UserView};
use leptos::prelude::*;

#[component]
pub fn TorreControlPage() -> impl IntoView {
    let cfg = view_config(UserView::TorreControl);

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>{cfg.name}</h1>
                    <p class="page__description">{cfg.description}</p>
                </div>
                <LayoutCustomizer view=UserView::TorreControl />
            </header>
            <FilterPanel />
            <DashboardWidgets view=UserView::TorreControl />
        </section>
    }
}
