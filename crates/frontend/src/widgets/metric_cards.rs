//! Metric card grid. Hidden monetary values render as a dash, never as
//! a misleading zero.

use crate::shared::format::{format_value, HIDDEN_VALUE};
use crate::shared::icons::icon;
use contracts::metrics::{MetricKind, MetricStatus, MetricValue};
use leptos::prelude::*;

fn status_class(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Good => "stat-card stat-card--success",
        MetricStatus::Bad => "stat-card stat-card--error",
        MetricStatus::Warning => "stat-card stat-card--warning",
        MetricStatus::Neutral => "stat-card",
    }
}

#[component]
pub fn MetricCards(
    #[prop(into)] metrics: Signal<Vec<MetricValue>>,
    #[prop(into)] visible: Signal<Vec<MetricKind>>,
) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {move || {
                let shown = visible.get();
                metrics
                    .get()
                    .into_iter()
                    .filter(|m| shown.contains(&m.kind))
                    .map(|m| {
                        let formatted = match m.value {
                            Some(v) => format_value(v, &m.kind.format()),
                            None => HIDDEN_VALUE.to_string(),
                        };
                        let change = m.change_percent.map(|pct| {
                            let (arrow, cls) = if pct > 0.5 {
                                ("\u{2191}", "stat-card__change stat-card__change--up")
                            } else if pct < -0.5 {
                                ("\u{2193}", "stat-card__change stat-card__change--down")
                            } else {
                                ("", "stat-card__change stat-card__change--flat")
                            };
                            let text = format!("{}{:.1}%", arrow, pct.abs());
                            view! { <span class=cls>{text}</span> }
                        });
                        view! {
                            <div class=status_class(m.status)>
                                <div class="stat-card__icon">{icon(m.kind.icon())}</div>
                                <div class="stat-card__content">
                                    <div class="stat-card__label">{m.kind.label()}</div>
                                    <div class="stat-card__value">
                                        {formatted}
                                        {change}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
