//! Chart panels rendered as horizontal bar lists. Financial series are
//! skipped entirely when the view hides monetary data.

use crate::shared::format::format_decimal;
use contracts::metrics::ChartSeries;
use leptos::prelude::*;

#[component]
pub fn BarChart(series: ChartSeries) -> impl IntoView {
    let max = series
        .points
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);

    view! {
        <div class="chart">
            <h3 class="chart__title">{series.kind.label()}</h3>
            <div class="chart__bars">
                {series.points.into_iter().map(|point| {
                    let width = if max > 0.0 { point.value / max * 100.0 } else { 0.0 };
                    let formatted = format_decimal(point.value, 0);
                    view! {
                        <div class="chart__row">
                            <span class="chart__label">{point.label}</span>
                            <div class="chart__track">
                                <div
                                    class="chart__bar"
                                    style=format!("width: {:.1}%", width)
                                ></div>
                            </div>
                            <span class="chart__value">{formatted}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ChartGrid(#[prop(into)] series: Signal<Vec<ChartSeries>>) -> impl IntoView {
    view! {
        <div class="chart-grid">
            {move || series.get().into_iter().map(|s| view! { <BarChart series=s /> }).collect_view()}
        </div>
    }
}
