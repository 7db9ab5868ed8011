use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

/// How to format a numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of a metric card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// The display metrics derivable from the filtered order set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    TotalRevenue,
    OrderCount,
    AvgOrderValue,
    AvgMargin,
    CompletedRatio,
    PendingCount,
    ActiveCustomers,
}

impl MetricKind {
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::TotalRevenue => "Ingresos totales",
            MetricKind::OrderCount => "Pedidos",
            MetricKind::AvgOrderValue => "Ticket medio",
            MetricKind::AvgMargin => "Margen medio",
            MetricKind::CompletedRatio => "Pedidos completados",
            MetricKind::PendingCount => "Pedidos pendientes",
            MetricKind::ActiveCustomers => "Clientes activos",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MetricKind::TotalRevenue => "revenue",
            MetricKind::OrderCount => "orders",
            MetricKind::AvgOrderValue => "ticket",
            MetricKind::AvgMargin => "margin",
            MetricKind::CompletedRatio => "check",
            MetricKind::PendingCount => "clock",
            MetricKind::ActiveCustomers => "customers",
        }
    }

    pub fn format(&self) -> ValueFormat {
        match self {
            MetricKind::TotalRevenue | MetricKind::AvgOrderValue => ValueFormat::Money {
                currency: "€".to_string(),
            },
            MetricKind::AvgMargin | MetricKind::CompletedRatio => {
                ValueFormat::Percent { decimals: 1 }
            }
            MetricKind::OrderCount | MetricKind::PendingCount | MetricKind::ActiveCustomers => {
                ValueFormat::Integer
            }
        }
    }

    /// Monetary metrics are zeroed out for views without financial
    /// visibility.
    pub fn is_financial(&self) -> bool {
        matches!(
            self,
            MetricKind::TotalRevenue | MetricKind::AvgOrderValue | MetricKind::AvgMargin
        )
    }

    pub fn all() -> Vec<MetricKind> {
        vec![
            MetricKind::TotalRevenue,
            MetricKind::OrderCount,
            MetricKind::AvgOrderValue,
            MetricKind::AvgMargin,
            MetricKind::CompletedRatio,
            MetricKind::PendingCount,
            MetricKind::ActiveCustomers,
        ]
    }
}

/// One computed metric card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub kind: MetricKind,
    /// `None` when the value is hidden for the current view.
    pub value: Option<f64>,
    /// Change relative to the previous comparable period, in percent.
    #[serde(rename = "changePercent")]
    pub change_percent: Option<f64>,
    pub status: MetricStatus,
}

/// Chart panels derivable from the filtered order set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    RevenueByDay,
    OrdersByStatus,
    RevenueByCity,
    RevenueByCategory,
    ChannelShare,
    HourlyTraffic,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::RevenueByDay => "Ingresos por día",
            ChartKind::OrdersByStatus => "Pedidos por estado",
            ChartKind::RevenueByCity => "Ingresos por ciudad",
            ChartKind::RevenueByCategory => "Ingresos por categoría",
            ChartKind::ChannelShare => "Distribución por canal",
            ChartKind::HourlyTraffic => "Actividad por hora",
        }
    }

    /// Whether the series exposes monetary values.
    pub fn is_financial(&self) -> bool {
        matches!(
            self,
            ChartKind::RevenueByDay | ChartKind::RevenueByCity | ChartKind::RevenueByCategory
        )
    }

    pub fn all() -> Vec<ChartKind> {
        vec![
            ChartKind::RevenueByDay,
            ChartKind::OrdersByStatus,
            ChartKind::RevenueByCity,
            ChartKind::RevenueByCategory,
            ChartKind::ChannelShare,
            ChartKind::HourlyTraffic,
        ]
    }
}

/// A single labelled point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// A computed chart series ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub points: Vec<SeriesPoint>,
}

/// One pin of the delivery map. `amount` is omitted when financial data
/// is hidden for the current view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    pub status: OrderStatus,
}
