//! Aggregation and chart-series generators. All series derive from the
//! filtered order set; the single synthetic series (hourly traffic) is
//! seeded so output stays reproducible.

use chrono::Duration;
use contracts::domain::Order;
use contracts::enums::{OrderStatus, SalesChannel};
use contracts::filters::DateRange;
use contracts::metrics::{
    ChartKind, ChartSeries, MapPoint, MetricKind, MetricStatus, MetricValue, SeriesPoint,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Compute every metric card for the current selection. `all_orders`
/// and `range` feed the previous-period comparison; `hide_financials`
/// blanks monetary values for restricted views.
pub fn compute_metrics(
    filtered: &[Order],
    all_orders: &[Order],
    range: DateRange,
    hide_financials: bool,
) -> Vec<MetricValue> {
    let previous = previous_window(all_orders, range);
    MetricKind::all()
        .into_iter()
        .map(|kind| {
            if hide_financials && kind.is_financial() {
                return MetricValue {
                    kind,
                    value: None,
                    change_percent: None,
                    status: MetricStatus::Neutral,
                };
            }
            let value = metric_value(kind, filtered);
            let prev = metric_value(kind, &previous);
            let change_percent = if prev > 0.0 {
                Some((value - prev) / prev * 100.0)
            } else {
                None
            };
            MetricValue {
                kind,
                value: Some(value),
                change_percent,
                status: status_for(change_percent),
            }
        })
        .collect()
}

/// Orders from the window of equal length immediately before `range`.
fn previous_window(all_orders: &[Order], range: DateRange) -> Vec<Order> {
    let len_days = (range.to - range.from).num_days();
    let prev_to = range.from - Duration::days(1);
    let prev_from = prev_to - Duration::days(len_days);
    all_orders
        .iter()
        .filter(|o| o.date >= prev_from && o.date <= prev_to)
        .cloned()
        .collect()
}

fn metric_value(kind: MetricKind, orders: &[Order]) -> f64 {
    let count = orders.len();
    match kind {
        MetricKind::TotalRevenue => orders.iter().map(|o| o.amount).sum(),
        MetricKind::OrderCount => count as f64,
        MetricKind::AvgOrderValue => {
            if count > 0 {
                orders.iter().map(|o| o.amount).sum::<f64>() / count as f64
            } else {
                0.0
            }
        }
        MetricKind::AvgMargin => {
            if count > 0 {
                orders.iter().map(|o| o.margin).sum::<f64>() / count as f64
            } else {
                0.0
            }
        }
        MetricKind::CompletedRatio => {
            if count > 0 {
                let completed = orders
                    .iter()
                    .filter(|o| o.status == OrderStatus::Completado)
                    .count();
                completed as f64 / count as f64 * 100.0
            } else {
                0.0
            }
        }
        MetricKind::PendingCount => orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pendiente)
            .count() as f64,
        MetricKind::ActiveCustomers => {
            let mut ids: Vec<&str> = orders.iter().map(|o| o.customer_id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            ids.len() as f64
        }
    }
}

fn status_for(change_percent: Option<f64>) -> MetricStatus {
    match change_percent {
        Some(pct) if pct > 0.5 => MetricStatus::Good,
        Some(pct) if pct < -0.5 => MetricStatus::Bad,
        _ => MetricStatus::Neutral,
    }
}

/// Dispatch a chart series by kind. `traffic_seed` only feeds the
/// synthetic hourly series.
pub fn chart_series(
    kind: ChartKind,
    orders: &[Order],
    range: DateRange,
    traffic_seed: u64,
) -> ChartSeries {
    let points = match kind {
        ChartKind::RevenueByDay => revenue_by_day(orders, range),
        ChartKind::OrdersByStatus => orders_by_status(orders),
        ChartKind::RevenueByCity => revenue_by_city(orders, 5),
        ChartKind::RevenueByCategory => revenue_by_category(orders),
        ChartKind::ChannelShare => channel_share(orders),
        ChartKind::HourlyTraffic => hourly_traffic(traffic_seed),
    };
    ChartSeries { kind, points }
}

fn revenue_by_day(orders: &[Order], range: DateRange) -> Vec<SeriesPoint> {
    let mut by_day: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
    let mut day = range.from;
    while day <= range.to {
        by_day.insert(day, 0.0);
        day += Duration::days(1);
    }
    for order in orders {
        if let Some(total) = by_day.get_mut(&order.date) {
            *total += order.amount;
        }
    }
    by_day
        .into_iter()
        .map(|(day, value)| SeriesPoint {
            label: day.format("%d/%m").to_string(),
            value,
        })
        .collect()
}

fn orders_by_status(orders: &[Order]) -> Vec<SeriesPoint> {
    OrderStatus::all()
        .into_iter()
        .map(|status| SeriesPoint {
            label: status.display_name().to_string(),
            value: orders.iter().filter(|o| o.status == status).count() as f64,
        })
        .collect()
}

fn revenue_by_city(orders: &[Order], top_n: usize) -> Vec<SeriesPoint> {
    let mut by_city: BTreeMap<&str, f64> = BTreeMap::new();
    for order in orders {
        *by_city.entry(order.location.city.as_str()).or_insert(0.0) += order.amount;
    }
    let mut points: Vec<SeriesPoint> = by_city
        .into_iter()
        .map(|(city, value)| SeriesPoint {
            label: city.to_string(),
            value,
        })
        .collect();
    points.sort_by(|a, b| b.value.total_cmp(&a.value).then(a.label.cmp(&b.label)));
    points.truncate(top_n);
    points
}

fn revenue_by_category(orders: &[Order]) -> Vec<SeriesPoint> {
    contracts::enums::ProductCategory::all()
        .into_iter()
        .map(|cat| SeriesPoint {
            label: cat.display_name().to_string(),
            value: orders
                .iter()
                .filter(|o| o.category == cat)
                .map(|o| o.amount)
                .sum(),
        })
        .collect()
}

fn channel_share(orders: &[Order]) -> Vec<SeriesPoint> {
    SalesChannel::all()
        .into_iter()
        .map(|channel| SeriesPoint {
            label: channel.display_name().to_string(),
            value: orders.iter().filter(|o| o.channel == channel).count() as f64,
        })
        .collect()
}

/// The control-tower traffic panel has no backing data; a seeded
/// generator keeps it stable across renders and tests.
fn hourly_traffic(seed: u64) -> Vec<SeriesPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..24)
        .map(|hour| SeriesPoint {
            label: format!("{:02}h", hour),
            value: rng.gen_range(10..100) as f64,
        })
        .collect()
}

/// Pins for the delivery map. Monetary amounts are omitted when the
/// view hides financial data.
pub fn map_points(orders: &[Order], hide_financials: bool) -> Vec<MapPoint> {
    orders
        .iter()
        .map(|o| MapPoint {
            lat: o.location.lat,
            lng: o.location.lng,
            city: o.location.city.clone(),
            order_id: o.id.clone(),
            amount: if hide_financials { None } else { Some(o.amount) },
            status: o.status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use chrono::NaiveDate;

    fn full_range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
    }

    #[test]
    fn metrics_cover_the_catalogue() {
        let metrics = compute_metrics(store::orders(), store::orders(), full_range(), false);
        assert_eq!(metrics.len(), MetricKind::all().len());
        let revenue = metrics
            .iter()
            .find(|m| m.kind == MetricKind::TotalRevenue)
            .unwrap();
        let expected: f64 = store::orders().iter().map(|o| o.amount).sum();
        assert_eq!(revenue.value, Some(expected));
        let pending = metrics
            .iter()
            .find(|m| m.kind == MetricKind::PendingCount)
            .unwrap();
        assert_eq!(pending.value, Some(2.0));
    }

    #[test]
    fn empty_selection_yields_zeroes_not_errors() {
        let metrics = compute_metrics(&[], store::orders(), full_range(), false);
        for m in metrics {
            assert_eq!(m.value, Some(0.0), "{:?}", m.kind);
        }
    }

    #[test]
    fn hidden_financials_blank_monetary_metrics() {
        let metrics = compute_metrics(store::orders(), store::orders(), full_range(), true);
        for m in metrics {
            if m.kind.is_financial() {
                assert_eq!(m.value, None);
                assert_eq!(m.change_percent, None);
            } else {
                assert!(m.value.is_some());
            }
        }
    }

    #[test]
    fn revenue_by_day_covers_the_whole_range() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        );
        let series = chart_series(ChartKind::RevenueByDay, store::orders(), range, 0);
        assert_eq!(series.points.len(), 15);
        let day_two: f64 = series.points[1].value;
        assert_eq!(day_two, 1248.0); // ORD-2024-006 on 02/03
    }

    #[test]
    fn status_series_counts_every_state() {
        let series = chart_series(ChartKind::OrdersByStatus, store::orders(), full_range(), 0);
        let total: f64 = series.points.iter().map(|p| p.value).sum();
        assert_eq!(total, store::orders().len() as f64);
    }

    #[test]
    fn city_series_is_sorted_by_revenue() {
        let series = chart_series(ChartKind::RevenueByCity, store::orders(), full_range(), 0);
        for pair in series.points.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
        assert_eq!(series.points[0].label, "Madrid");
    }

    #[test]
    fn hourly_traffic_is_deterministic_per_seed() {
        let a = chart_series(ChartKind::HourlyTraffic, &[], full_range(), 42);
        let b = chart_series(ChartKind::HourlyTraffic, &[], full_range(), 42);
        assert_eq!(a.points, b.points);
        let c = chart_series(ChartKind::HourlyTraffic, &[], full_range(), 43);
        assert_ne!(a.points, c.points);
    }

    #[test]
    fn map_points_respect_the_financial_gate() {
        let visible = map_points(store::orders(), false);
        assert!(visible.iter().all(|p| p.amount.is_some()));
        let hidden = map_points(store::orders(), true);
        assert!(hidden.iter().all(|p| p.amount.is_none()));
        assert_eq!(hidden.len(), store::orders().len());
    }
}
