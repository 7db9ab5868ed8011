//! Order table. Columns adapt to the view's permission profile: the
//! amount column disappears without financial visibility, customer
//! details collapse to the id without customer-data access, and the
//! edit action only renders where the view can edit orders.

use crate::shared::format::{format_date, format_decimal};
use crate::state::use_app_state;
use contracts::domain::Order;
use contracts::views::{view_config, UserView};
use leptos::prelude::*;

#[component]
pub fn OrdersTable(#[prop(into)] orders: Signal<Vec<Order>>, view: UserView) -> impl IntoView {
    let state = use_app_state();
    let perms = view_config(view).permissions;

    view! {
        <div class="orders-table">
            <div class="orders-table__header">
                <h3>"Pedidos"</h3>
                <span class="orders-table__count">
                    {move || format!("{} pedidos", orders.get().len())}
                </span>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Pedido"</th>
                        <th>"Cliente"</th>
                        <th>"Fecha"</th>
                        <th>"Ciudad"</th>
                        <th>"Estado"</th>
                        {perms.can_view_financials.then(|| view! { <th class="data-table__num">"Importe"</th> })}
                        {perms.can_edit_orders.then(|| view! { <th></th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = orders.get();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="7" class="data-table__empty">
                                        "No hay pedidos que coincidan con los filtros"
                                    </td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|order| {
                                let customer = if perms.can_view_customer_data {
                                    order.customer.clone()
                                } else {
                                    order.customer_id.clone()
                                };
                                let order_id = order.id.clone();
                                view! {
                                    <tr>
                                        <td class="data-table__id">{order.id.clone()}</td>
                                        <td>{customer}</td>
                                        <td>{format_date(order.date)}</td>
                                        <td>{order.location.city.clone()}</td>
                                        <td>
                                            <span class=order.status.badge_class()>
                                                {order.status.display_name()}
                                            </span>
                                        </td>
                                        {perms.can_view_financials.then(|| view! {
                                            <td class="data-table__num">
                                                {format!("{} €", format_decimal(order.amount, 2))}
                                            </td>
                                        })}
                                        {perms.can_edit_orders.then(|| {
                                            let id = order_id.clone();
                                            view! {
                                                <td>
                                                    <button
                                                        class="btn btn--ghost"
                                                        on:click=move |_| {
                                                            state.notify(format!(
                                                                "Edición de {} no disponible en la demo",
                                                                id
                                                            ));
                                                        }
                                                    >
                                                        "Editar"
                                                    </button>
                                                </td>
                                            }
                                        })}
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
