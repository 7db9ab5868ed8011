//! Warehouse view: catalogue table with rotation, the simulated data
//! upload and a reduced dashboard without monetary figures.

use crate::shared::filter_panel::FilterPanel;
use crate::shared::format::format_thousands;
use crate::state::use_app_state;
use crate::widgets::dashboard::DashboardWidgets;
use crate::widgets::layout_customizer::LayoutCustomizer;
use contracts::views::{view_config, UserView};
use engine::store;
use engine::upload::{classify_upload, UploadKind};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[component]
pub fn StockProductosPage() -> impl IntoView {
    let state = use_app_state();
    let cfg = view_config(UserView::StockProductos);

    let on_upload = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        match classify_upload(&file.name()) {
            Ok(UploadKind::Csv) => {
                state.notify(format!("Archivo CSV \"{}\" recibido (simulado)", file.name()));
            }
            Ok(UploadKind::Excel) => {
                state.notify(format!(
                    "Archivo Excel \"{}\" recibido (simulado)",
                    file.name()
                ));
            }
            Err(e) => state.notify(e.to_string()),
        }
        input.set_value("");
    };

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>{cfg.name}</h1>
                    <p class="page__description">{cfg.description}</p>
                </div>
                <div class="page__actions">
                    <label class="btn upload-label">
                        "Subir datos (.csv, .xlsx)"
                        <input type="file" accept=".csv,.xlsx,.xls" hidden on:change=on_upload />
                    </label>
                    <LayoutCustomizer view=UserView::StockProductos />
                </div>
            </header>

            <div class="catalogue">
                <h3>"Catálogo"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Producto"</th>
                            <th>"Categoría"</th>
                            <th class="data-table__num">"Pedidos"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {store::products().iter().map(|product| {
                            let rotation = store::orders()
                                .iter()
                                .filter(|o| o.product_ids.contains(&product.id))
                                .count() as i64;
                            view! {
                                <tr>
                                    <td>{product.name.clone()}</td>
                                    <td>{product.category.display_name()}</td>
                                    <td class="data-table__num">{format_thousands(rotation)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <FilterPanel />
            <DashboardWidgets view=UserView::StockProductos />
        </section>
    }
}
