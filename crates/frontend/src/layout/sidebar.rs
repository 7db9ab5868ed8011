use crate::shared::icons::icon;
use contracts::views::{view_config, UserView};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

fn view_icon(view: UserView) -> &'static str {
    match view {
        UserView::DireccionGeneral => "dashboard",
        UserView::TorreControl => "tower",
        UserView::VistaCliente => "customers",
        UserView::StockProductos => "products",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    let link_class = move |path: &'static str| {
        if location.pathname.get() == path {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"OnTrack CRM"</div>
            <div class="sidebar__section">"Vistas"</div>
            {UserView::all().into_iter().map(|v| {
                let path = v.route_path();
                view! {
                    <a href=path class=move || link_class(path)>
                        {icon(view_icon(v))}
                        <span>{view_config(v).name}</span>
                    </a>
                }
            }).collect_view()}
            <div class="sidebar__section">"Gestión"</div>
            <a
                href="/gestion-promociones"
                class=move || link_class("/gestion-promociones")
            >
                {icon("promotions")}
                <span>"Promociones"</span>
            </a>
        </nav>
    }
}
