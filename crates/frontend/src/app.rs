use crate::routes::routes::AppRoutes;
use crate::state::AppState;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the session state to the whole app via context.
    provide_context(AppState::new());

    view! {
        <AppRoutes />
    }
}
