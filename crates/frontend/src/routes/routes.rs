use crate::layout::Shell;
use crate::state::use_app_state;
use crate::views::direccion_general::DireccionGeneralPage;
use crate::views::gestion_promociones::GestionPromocionesPage;
use crate::views::stock_productos::StockProductosPage;
use crate::views::torre_control::TorreControlPage;
use crate::views::vista_cliente::VistaClientePage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let state = use_app_state();

    view! {
        <Router>
            <Shell>
                {move || state.notice.get().map(|msg| view! {
                    <div class="toast" on:click=move |_| state.notice.set(None)>
                        {msg}
                    </div>
                })}
                <Routes fallback=|| view! { <p class="page__empty">"Página no encontrada"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/direccion-general" /> } />
                    <Route path=path!("/direccion-general") view=DireccionGeneralPage />
                    <Route path=path!("/torre-control") view=TorreControlPage />
                    <Route path=path!("/vista-cliente") view=VistaClientePage />
                    <Route path=path!("/stock-productos") view=StockProductosPage />
                    <Route path=path!("/gestion-promociones") view=GestionPromocionesPage />
                </Routes>
            </Shell>
        </Router>
    }
}
