use serde::{Deserialize, Serialize};

/// A self-contained dashboard panel, independently toggleable and
/// visibility-gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    Metrics,
    Charts,
    RecentOrders,
    Orders,
    Map,
}

impl WidgetKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            WidgetKind::Metrics => "Métricas",
            WidgetKind::Charts => "Gráficos",
            WidgetKind::RecentOrders => "Pedidos recientes",
            WidgetKind::Orders => "Pedidos",
            WidgetKind::Map => "Mapa de entregas",
        }
    }

    pub fn all() -> Vec<WidgetKind> {
        vec![
            WidgetKind::Metrics,
            WidgetKind::Charts,
            WidgetKind::RecentOrders,
            WidgetKind::Orders,
            WidgetKind::Map,
        ]
    }
}

/// Capability flags a widget instance declares about its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetRequirements {
    #[serde(rename = "requiresFinancials", default)]
    pub requires_financials: bool,
    #[serde(rename = "requiresAnalytics", default)]
    pub requires_analytics: bool,
    #[serde(rename = "requiresAllOrders", default)]
    pub requires_all_orders: bool,
}

impl WidgetRequirements {
    pub const NONE: WidgetRequirements = WidgetRequirements {
        requires_financials: false,
        requires_analytics: false,
        requires_all_orders: false,
    };

    pub fn financials() -> Self {
        Self {
            requires_financials: true,
            ..Self::NONE
        }
    }

    pub fn analytics() -> Self {
        Self {
            requires_analytics: true,
            ..Self::NONE
        }
    }
}

/// Outcome of the widget visibility gate. This is a presentation-layer
/// decision only: callers still hold the full dataset and must not treat
/// it as data-access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetAccess {
    /// Render the wrapped content unchanged.
    Granted,
    /// The widget is not part of this view's configuration.
    NotInView,
    /// The widget exists in the view but the content needs a capability
    /// the view's permission profile lacks.
    MissingPermission,
}

impl WidgetAccess {
    pub fn is_granted(&self) -> bool {
        matches!(self, WidgetAccess::Granted)
    }

    /// Message shown inside the locked placeholder.
    pub fn restricted_message(&self) -> &'static str {
        match self {
            WidgetAccess::Granted => "",
            WidgetAccess::NotInView => "Este widget no está disponible en la vista actual",
            WidgetAccess::MissingPermission => "No tienes permisos para ver este contenido",
        }
    }
}
