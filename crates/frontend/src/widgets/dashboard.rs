//! The pipeline shared by every view page: filter state is applied to
//! the full order set, the result is scoped to the view, and widgets
//! render in layout order behind the visibility gate.

use crate::state::use_app_state;
use crate::widgets::charts::ChartGrid;
use crate::widgets::map_panel::MapPanel;
use crate::widgets::metric_cards::MetricCards;
use crate::widgets::orders_table::OrdersTable;
use crate::widgets::recent_orders::RecentOrders;
use crate::widgets::widget_wrapper::WidgetWrapper;
use contracts::views::{UserView, WidgetKind, WidgetRequirements};
use engine::{apply_filters, filter_data_by_view, hide_financial_data, metrics, store};
use leptos::prelude::*;

/// Fixed seed of the synthetic hourly-traffic series, so the panel does
/// not flicker between renders.
const TRAFFIC_SEED: u64 = 2024;

#[component]
pub fn DashboardWidgets(view: UserView) -> impl IntoView {
    let state = use_app_state();
    let hide = hide_financial_data(view);

    let filtered = Memo::new(move |_| {
        state
            .filters
            .with(|f| apply_filters(store::orders(), f, store::products()))
    });
    let visible_orders = Memo::new(move |_| {
        let email = state.user_email.get();
        filtered.with(|orders| filter_data_by_view(orders, view, email.as_deref()))
    });
    let layout = Memo::new(move |_| state.layout_for(view));

    let metric_values = Memo::new(move |_| {
        let range = state.filters.with(|f| f.date_range);
        visible_orders.with(|orders| metrics::compute_metrics(orders, store::orders(), range, hide))
    });
    let chart_values = Memo::new(move |_| {
        let range = state.filters.with(|f| f.date_range);
        let charts = layout.with(|l| l.visible_charts.clone());
        visible_orders.with(|orders| {
            charts
                .into_iter()
                .filter(|kind| !(hide && kind.is_financial()))
                .map(|kind| metrics::chart_series(kind, orders, range, TRAFFIC_SEED))
                .collect::<Vec<_>>()
        })
    });
    let map_values =
        Memo::new(move |_| visible_orders.with(|orders| metrics::map_points(orders, hide)));

    view! {
        <div class="dashboard">
            {move || {
                let mut placements = layout.with(|l| l.widgets.clone());
                placements.sort_by_key(|p| p.position);
                placements
                    .into_iter()
                    .filter(|p| p.visible)
                    .map(|placement| {
                        match placement.widget {
                            WidgetKind::Metrics => view! {
                                <WidgetWrapper widget=WidgetKind::Metrics view=view>
                                    <MetricCards
                                        metrics=metric_values
                                        visible=Signal::derive(move || {
                                            layout.with(|l| l.visible_metrics.clone())
                                        })
                                    />
                                </WidgetWrapper>
                            }
                            .into_any(),
                            WidgetKind::Charts => view! {
                                <WidgetWrapper
                                    widget=WidgetKind::Charts
                                    view=view
                                    requirements=WidgetRequirements::analytics()
                                >
                                    <ChartGrid series=chart_values />
                                </WidgetWrapper>
                            }
                            .into_any(),
                            WidgetKind::RecentOrders => view! {
                                <WidgetWrapper widget=WidgetKind::RecentOrders view=view>
                                    <RecentOrders orders=visible_orders hide_financials=hide />
                                </WidgetWrapper>
                            }
                            .into_any(),
                            WidgetKind::Orders => view! {
                                <WidgetWrapper widget=WidgetKind::Orders view=view>
                                    <OrdersTable orders=visible_orders view=view />
                                </WidgetWrapper>
                            }
                            .into_any(),
                            WidgetKind::Map => view! {
                                <WidgetWrapper widget=WidgetKind::Map view=view>
                                    <MapPanel points=map_values />
                                </WidgetWrapper>
                            }
                            .into_any(),
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
