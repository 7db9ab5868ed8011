//! Customer portal view. An identity selector simulates the logged-in
//! customer; the data filter scopes every widget to that email.

use crate::shared::filter_panel::FilterPanel;
use crate::state::use_app_state;
use crate::widgets::dashboard::DashboardWidgets;
use contracts::views::{view_config, UserView};
use engine::store;
use leptos::prelude::*;

#[component]
pub fn VistaClientePage() -> impl IntoView {
    let state = use_app_state();
    let cfg = view_config(UserView::VistaCliente);

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>{cfg.name}</h1>
                    <p class="page__description">{cfg.description}</p>
                </div>
                <label class="identity-picker">
                    "Cliente simulado"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.user_email.set((!value.is_empty()).then_some(value));
                    }>
                        {store::customers().iter().map(|c| {
                            let selected = state
                                .user_email
                                .get_untracked()
                                .is_some_and(|e| e == c.email);
                            view! {
                                <option value=c.email.clone() selected=selected>
                                    {format!("{} ({})", c.name, c.email)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
            </header>
            <FilterPanel />
            <DashboardWidgets view=UserView::VistaCliente />
        </section>
    }
}
