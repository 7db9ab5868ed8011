pub mod sidebar;

use leptos::prelude::*;
use sidebar::Sidebar;

/// Two-column application shell: navigation on the left, the active
/// dashboard in the center.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <aside class="shell__left">
                <Sidebar />
            </aside>
            <main class="shell__center">
                {children()}
            </main>
        </div>
    }
}
