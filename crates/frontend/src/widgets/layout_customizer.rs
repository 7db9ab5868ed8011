//! Layout customization panel: widget toggles, theme controls and the
//! JSON export/import of the current layout. Import is all-or-nothing;
//! a rejected document leaves the current layout untouched.

use crate::shared::export::download_json;
use crate::state::use_app_state;
use contracts::layout::{ColorScheme, Density};
use contracts::views::{view_config, UserView};
use engine::layout_io::{export_layout, import_layout};
use leptos::prelude::*;

#[component]
pub fn LayoutCustomizer(view: UserView) -> impl IntoView {
    let state = use_app_state();
    let open = RwSignal::new(false);
    let import_text = RwSignal::new(String::new());
    let layout = Memo::new(move |_| state.layout_for(view));

    let on_export = move |_| {
        let current = state.layout_for(view);
        match export_layout(&current) {
            Ok(json) => {
                let filename = format!("layout-{}.json", view.as_str());
                if let Err(e) = download_json(&json, &filename) {
                    log::error!("layout export failed: {e}");
                    state.notify("No se pudo descargar el diseño");
                } else {
                    state.notify("Diseño exportado");
                }
            }
            Err(e) => {
                log::error!("layout export failed: {e}");
                state.notify("No se pudo exportar el diseño");
            }
        }
    };

    let on_import = move |_| {
        let json = import_text.get();
        match import_layout(&json) {
            Ok(imported) => {
                state.set_layout(view, imported);
                import_text.set(String::new());
                state.notify("Diseño importado");
            }
            Err(e) => {
                state.notify(format!("Diseño rechazado: {e}"));
            }
        }
    };

    view! {
        <div class="customizer">
            <button class="btn btn--ghost" on:click=move |_| open.update(|o| *o = !*o)>
                {move || if open.get() { "Cerrar personalización" } else { "Personalizar" }}
            </button>
            <Show when=move || open.get()>
                <div class="customizer__panel">
                    <fieldset class="customizer__group">
                        <legend>"Widgets"</legend>
                        {view_config(view).allowed_widgets.iter().map(|w| {
                            let widget = *w;
                            view! {
                                <label class="customizer__toggle">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || layout.with(|l| l.is_widget_visible(widget))
                                        on:change=move |_| {
                                            let mut current = state.layout_for(view);
                                            current.toggle_widget(widget);
                                            state.set_layout(view, current);
                                        }
                                    />
                                    {widget.display_name()}
                                </label>
                            }
                        }).collect_view()}
                    </fieldset>

                    <fieldset class="customizer__group">
                        <legend>"Tema"</legend>
                        <label>
                            "Esquema de color"
                            <select on:change=move |ev| {
                                let mut current = state.layout_for(view);
                                current.theme.color_scheme = match event_target_value(&ev).as_str() {
                                    "dark" => ColorScheme::Dark,
                                    "corporate" => ColorScheme::Corporate,
                                    _ => ColorScheme::Light,
                                };
                                state.set_layout(view, current);
                            }>
                                <option value="light">"Claro"</option>
                                <option value="dark">"Oscuro"</option>
                                <option value="corporate">"Corporativo"</option>
                            </select>
                        </label>
                        <label>
                            "Densidad"
                            <select on:change=move |ev| {
                                let mut current = state.layout_for(view);
                                current.theme.density = if event_target_value(&ev) == "compact" {
                                    Density::Compact
                                } else {
                                    Density::Comfortable
                                };
                                state.set_layout(view, current);
                            }>
                                <option value="comfortable">"Cómoda"</option>
                                <option value="compact">"Compacta"</option>
                            </select>
                        </label>
                    </fieldset>

                    <fieldset class="customizer__group">
                        <legend>"Importar / exportar"</legend>
                        <button class="btn" on:click=on_export>"Exportar JSON"</button>
                        <textarea
                            class="customizer__import"
                            placeholder="Pega aquí un diseño exportado"
                            prop:value=move || import_text.get()
                            on:input=move |ev| import_text.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn" on:click=on_import>"Importar"</button>
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| {
                                state.reset_layout(view);
                                state.notify("Diseño restablecido");
                            }
                        >
                            "Restablecer"
                        </button>
                    </fieldset>
                </div>
            </Show>
        </div>
    }
}
