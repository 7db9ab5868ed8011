use super::widget::WidgetKind;
use serde::{Deserialize, Serialize};

/// One of the four named dashboard presentations. Adding a view means
/// extending this enum and `VIEW_CONFIGS` together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserView {
    DireccionGeneral,
    TorreControl,
    VistaCliente,
    StockProductos,
}

impl UserView {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserView::DireccionGeneral => "direccion-general",
            UserView::TorreControl => "torre-control",
            UserView::VistaCliente => "vista-cliente",
            UserView::StockProductos => "stock-productos",
        }
    }

    pub fn route_path(&self) -> &'static str {
        match self {
            UserView::DireccionGeneral => "/direccion-general",
            UserView::TorreControl => "/torre-control",
            UserView::VistaCliente => "/vista-cliente",
            UserView::StockProductos => "/stock-productos",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "direccion-general" => Some(UserView::DireccionGeneral),
            "torre-control" => Some(UserView::TorreControl),
            "vista-cliente" => Some(UserView::VistaCliente),
            "stock-productos" => Some(UserView::StockProductos),
            _ => None,
        }
    }

    pub fn all() -> Vec<UserView> {
        vec![
            UserView::DireccionGeneral,
            UserView::TorreControl,
            UserView::VistaCliente,
            UserView::StockProductos,
        ]
    }
}

/// Five-permission profile of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPermissions {
    #[serde(rename = "canViewFinancials")]
    pub can_view_financials: bool,
    #[serde(rename = "canViewAllOrders")]
    pub can_view_all_orders: bool,
    #[serde(rename = "canViewAnalytics")]
    pub can_view_analytics: bool,
    #[serde(rename = "canEditOrders")]
    pub can_edit_orders: bool,
    #[serde(rename = "canViewCustomerData")]
    pub can_view_customer_data: bool,
}

/// Static configuration of one view: allowed widgets, default layout
/// preset and the permission profile.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub id: UserView,
    pub name: &'static str,
    pub description: &'static str,
    pub allowed_widgets: &'static [WidgetKind],
    pub default_layout: &'static str,
    pub permissions: ViewPermissions,
}

/// Single source of truth consulted by the data filter, the financial
/// gate and the widget gate. No dynamic registration.
pub static VIEW_CONFIGS: [ViewConfig; 4] = [
    ViewConfig {
        id: UserView::DireccionGeneral,
        name: "Dirección General",
        description: "Visión ejecutiva completa del negocio",
        allowed_widgets: &[
            WidgetKind::Metrics,
            WidgetKind::Charts,
            WidgetKind::RecentOrders,
            WidgetKind::Orders,
            WidgetKind::Map,
        ],
        default_layout: "ejecutivo",
        permissions: ViewPermissions {
            can_view_financials: true,
            can_view_all_orders: true,
            can_view_analytics: true,
            can_edit_orders: true,
            can_view_customer_data: true,
        },
    },
    ViewConfig {
        id: UserView::TorreControl,
        name: "Torre de Control",
        description: "Seguimiento operativo de pedidos y entregas",
        allowed_widgets: &[
            WidgetKind::Metrics,
            WidgetKind::Charts,
            WidgetKind::Orders,
            WidgetKind::Map,
        ],
        default_layout: "operaciones",
        permissions: ViewPermissions {
            can_view_financials: false,
            can_view_all_orders: true,
            can_view_analytics: true,
            can_edit_orders: true,
            can_view_customer_data: true,
        },
    },
    ViewConfig {
        id: UserView::VistaCliente,
        name: "Vista Cliente",
        description: "Portal del cliente: solo sus propios pedidos",
        allowed_widgets: &[
            WidgetKind::Metrics,
            WidgetKind::RecentOrders,
            WidgetKind::Orders,
        ],
        default_layout: "cliente",
        permissions: ViewPermissions {
            can_view_financials: true,
            can_view_all_orders: false,
            can_view_analytics: false,
            can_edit_orders: false,
            can_view_customer_data: false,
        },
    },
    ViewConfig {
        id: UserView::StockProductos,
        name: "Stock de Productos",
        description: "Inventario y rotación de catálogo",
        allowed_widgets: &[
            WidgetKind::Metrics,
            WidgetKind::Charts,
            WidgetKind::Orders,
        ],
        default_layout: "almacen",
        permissions: ViewPermissions {
            can_view_financials: false,
            can_view_all_orders: false,
            can_view_analytics: true,
            can_edit_orders: false,
            can_view_customer_data: false,
        },
    },
];

pub fn view_config(view: UserView) -> &'static ViewConfig {
    VIEW_CONFIGS
        .iter()
        .find(|c| c.id == view)
        .expect("every UserView has an entry in VIEW_CONFIGS")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_is_registered() {
        for view in UserView::all() {
            let cfg = view_config(view);
            assert_eq!(cfg.id, view);
            assert!(!cfg.allowed_widgets.is_empty());
        }
    }

    #[test]
    fn view_codes_round_trip() {
        for view in UserView::all() {
            assert_eq!(UserView::from_str(view.as_str()), Some(view));
        }
        assert_eq!(UserView::from_str("gestion-promociones"), None);
    }
}
