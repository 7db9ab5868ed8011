//! Compact list of the five most recent orders of the current selection.

use crate::shared::format::{format_date, format_decimal, HIDDEN_VALUE};
use contracts::domain::Order;
use leptos::prelude::*;

#[component]
pub fn RecentOrders(
    #[prop(into)] orders: Signal<Vec<Order>>,
    hide_financials: bool,
) -> impl IntoView {
    let recent = Memo::new(move |_| {
        let mut items = orders.get();
        items.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        items.truncate(5);
        items
    });

    view! {
        <div class="recent-orders">
            <h3>"Pedidos recientes"</h3>
            <ul class="recent-orders__list">
                {move || recent
                    .get()
                    .into_iter()
                    .map(|order| {
                        let amount = if hide_financials {
                            HIDDEN_VALUE.to_string()
                        } else {
                            format!("{} €", format_decimal(order.amount, 2))
                        };
                        view! {
                            <li class="recent-orders__item">
                                <div class="recent-orders__main">
                                    <span class="recent-orders__id">{order.id}</span>
                                    <span class="recent-orders__customer">{order.customer}</span>
                                </div>
                                <div class="recent-orders__side">
                                    <span class="recent-orders__amount">{amount}</span>
                                    <span class="recent-orders__date">{format_date(order.date)}</span>
                                    <span class=order.status.badge_class()>
                                        {order.status.display_name()}
                                    </span>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
