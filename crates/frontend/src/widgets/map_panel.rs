//! Delivery map panel, rendered as a coordinate list. Amounts arrive
//! already stripped for views without financial visibility.

use crate::shared::format::format_decimal;
use contracts::metrics::MapPoint;
use leptos::prelude::*;

#[component]
pub fn MapPanel(#[prop(into)] points: Signal<Vec<MapPoint>>) -> impl IntoView {
    view! {
        <div class="map-panel">
            <h3>"Mapa de entregas"</h3>
            <ul class="map-panel__list">
                {move || points
                    .get()
                    .into_iter()
                    .map(|point| {
                        let coords = format!("{:.4}, {:.4}", point.lat, point.lng);
                        let amount = point
                            .amount
                            .map(|a| format!("{} €", format_decimal(a, 2)));
                        view! {
                            <li class="map-panel__pin">
                                <span class="map-panel__city">{point.city}</span>
                                <span class="map-panel__coords">{coords}</span>
                                <span class="map-panel__order">{point.order_id}</span>
                                <span class=point.status.badge_class()>
                                    {point.status.display_name()}
                                </span>
                                {amount.map(|a| view! { <span class="map-panel__amount">{a}</span> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
