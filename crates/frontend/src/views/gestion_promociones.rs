//! Promotion management: a creation form feeding the in-memory store
//! and a list with effective statuses and measured sales uplift.

use crate::shared::format::{format_date, format_decimal};
use crate::state::{today, use_app_state};
use chrono::NaiveDate;
use contracts::domain::{PromotionConstraints, PromotionDto};
use contracts::enums::{PromotionKind, PromotionStatus};
use leptos::prelude::*;

fn status_badge(status: PromotionStatus) -> &'static str {
    match status {
        PromotionStatus::Active => "badge badge--success",
        PromotionStatus::Scheduled => "badge badge--info",
        PromotionStatus::Expired => "badge badge--muted",
        PromotionStatus::Inactive => "badge badge--warning",
    }
}

fn kind_from_code(code: &str) -> PromotionKind {
    match code {
        "fixed" => PromotionKind::Fixed,
        "bogo" => PromotionKind::Bogo,
        "bundle" => PromotionKind::Bundle,
        _ => PromotionKind::Percentage,
    }
}

#[component]
pub fn GestionPromocionesPage() -> impl IntoView {
    let state = use_app_state();

    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(PromotionKind::Percentage);
    let value = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let active = RwSignal::new(true);
    let min_order = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let parse_date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
        let (Some(start_date), Some(end_date)) =
            (parse_date(&start.get()), parse_date(&end.get()))
        else {
            state.notify("Indica las fechas de inicio y fin");
            return;
        };
        let Ok(parsed_value) = value.get().trim().parse::<f64>() else {
            state.notify("El valor debe ser numérico");
            return;
        };
        let min_order_value = min_order.get().trim().parse::<f64>().ok();

        let dto = PromotionDto {
            name: name.get(),
            kind: kind.get(),
            value: parsed_value,
            start_date,
            end_date,
            status: if active.get() {
                PromotionStatus::Active
            } else {
                PromotionStatus::Inactive
            },
            target_products: Vec::new(),
            target_customer_segments: Vec::new(),
            constraints: PromotionConstraints {
                min_order_value,
                ..Default::default()
            },
        };

        let mut outcome = None;
        state
            .promotions
            .update(|store| outcome = Some(store.create(dto, "admin", today())));
        match outcome {
            Some(Ok(created)) => {
                state.notify(format!("Promoción \"{}\" creada", created.name));
                name.set(String::new());
                value.set(String::new());
                start.set(String::new());
                end.set(String::new());
                min_order.set(String::new());
            }
            Some(Err(e)) => state.notify(e.to_string()),
            None => {}
        }
    };

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>"Gestión de Promociones"</h1>
                    <p class="page__description">
                        "Alta y seguimiento de campañas comerciales"
                    </p>
                </div>
            </header>

            <form class="promo-form" on:submit=on_submit>
                <label>
                    "Nombre"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Tipo"
                    <select on:change=move |ev| kind.set(kind_from_code(&event_target_value(&ev)))>
                        {PromotionKind::all().into_iter().map(|k| {
                            let code = match k {
                                PromotionKind::Percentage => "percentage",
                                PromotionKind::Fixed => "fixed",
                                PromotionKind::Bogo => "bogo",
                                PromotionKind::Bundle => "bundle",
                            };
                            view! { <option value=code>{k.display_name()}</option> }
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Valor"
                    <input
                        type="number"
                        step="0.01"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Inicio"
                    <input
                        type="date"
                        prop:value=move || start.get()
                        on:input=move |ev| start.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Fin"
                    <input
                        type="date"
                        prop:value=move || end.get()
                        on:input=move |ev| end.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Pedido mínimo (opcional)"
                    <input
                        type="number"
                        step="0.01"
                        prop:value=move || min_order.get()
                        on:input=move |ev| min_order.set(event_target_value(&ev))
                    />
                </label>
                <label class="promo-form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || active.get()
                        on:change=move |_| active.update(|a| *a = !*a)
                    />
                    "Activa"
                </label>
                <button type="submit" class="btn btn--primary">"Crear promoción"</button>
            </form>

            <div class="promo-list">
                <h3>{move || format!("Promociones ({})", state.promotions.with(|s| s.len()))}</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Tipo"</th>
                            <th class="data-table__num">"Valor"</th>
                            <th>"Vigencia"</th>
                            <th>"Estado"</th>
                            <th class="data-table__num">"Usos"</th>
                            <th class="data-table__num">"Impacto"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.promotions.with(|store| {
                            store.all().iter().map(|promo| {
                                let effective = promo.effective_status(today());
                                let value_text = match promo.kind {
                                    PromotionKind::Percentage => {
                                        format!("{}%", format_decimal(promo.value, 0))
                                    }
                                    _ => format!("{} €", format_decimal(promo.value, 2)),
                                };
                                let boost = promo
                                    .sales_boost_percentage()
                                    .map(|b| {
                                        let sign = if b >= 0.0 { "+" } else { "" };
                                        format!("{}{}%", sign, format_decimal(b, 1))
                                    })
                                    .unwrap_or_else(|| "—".to_string());
                                view! {
                                    <tr>
                                        <td>{promo.name.clone()}</td>
                                        <td>{promo.kind.display_name()}</td>
                                        <td class="data-table__num">{value_text}</td>
                                        <td>
                                            {format!(
                                                "{} - {}",
                                                format_date(promo.start_date),
                                                format_date(promo.end_date)
                                            )}
                                        </td>
                                        <td>
                                            <span class=status_badge(effective)>
                                                {effective.display_name()}
                                            </span>
                                        </td>
                                        <td class="data-table__num">{promo.usage_count}</td>
                                        <td class="data-table__num">{boost}</td>
                                    </tr>
                                }
                            }).collect_view()
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
