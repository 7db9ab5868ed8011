use crate::metrics::{ChartKind, MetricKind};
use crate::views::{view_config, UserView, WidgetKind};
use serde::{Deserialize, Serialize};

/// Grid footprint of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
    Full,
}

/// Per-widget customization inside a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetPlacement {
    pub widget: WidgetKind,
    pub visible: bool,
    pub position: u8,
    pub size: WidgetSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    Corporate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    Comfortable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(rename = "colorScheme")]
    pub color_scheme: ColorScheme,
    pub density: Density,
    #[serde(rename = "borderRadius")]
    pub border_radius: u8,
    #[serde(rename = "showBorders")]
    pub show_borders: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Light,
            density: Density::Comfortable,
            border_radius: 8,
            show_borders: true,
        }
    }
}

/// A dashboard layout: session-scoped, user-customizable, exportable as
/// JSON. Not persisted beyond the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub widgets: Vec<WidgetPlacement>,
    pub theme: ThemeConfig,
    #[serde(rename = "visibleMetrics")]
    pub visible_metrics: Vec<MetricKind>,
    #[serde(rename = "visibleCharts")]
    pub visible_charts: Vec<ChartKind>,
}

impl DashboardLayout {
    /// Default layout preset for a view, derived from its allowed
    /// widgets. `default_layout` of the view config names the preset.
    pub fn preset_for(view: UserView) -> Self {
        let cfg = view_config(view);
        let widgets = cfg
            .allowed_widgets
            .iter()
            .enumerate()
            .map(|(i, w)| WidgetPlacement {
                widget: *w,
                visible: true,
                position: i as u8,
                size: match w {
                    WidgetKind::Metrics => WidgetSize::Full,
                    WidgetKind::Orders => WidgetSize::Large,
                    WidgetKind::Map => WidgetSize::Large,
                    _ => WidgetSize::Medium,
                },
            })
            .collect();

        let visible_metrics = if cfg.permissions.can_view_financials {
            MetricKind::all()
        } else {
            MetricKind::all()
                .into_iter()
                .filter(|m| !m.is_financial())
                .collect()
        };

        let visible_charts = match view {
            UserView::TorreControl => vec![
                ChartKind::OrdersByStatus,
                ChartKind::ChannelShare,
                ChartKind::HourlyTraffic,
            ],
            UserView::StockProductos => {
                vec![ChartKind::OrdersByStatus, ChartKind::ChannelShare]
            }
            _ => vec![
                ChartKind::RevenueByDay,
                ChartKind::OrdersByStatus,
                ChartKind::RevenueByCity,
                ChartKind::RevenueByCategory,
                ChartKind::ChannelShare,
            ],
        };

        Self {
            id: cfg.default_layout.to_string(),
            name: format!("Diseño {}", cfg.name),
            description: Some(cfg.description.to_string()),
            widgets,
            theme: ThemeConfig::default(),
            visible_metrics,
            visible_charts,
        }
    }

    pub fn is_widget_visible(&self, widget: WidgetKind) -> bool {
        self.widgets
            .iter()
            .find(|p| p.widget == widget)
            .map(|p| p.visible)
            .unwrap_or(false)
    }

    pub fn toggle_widget(&mut self, widget: WidgetKind) {
        if let Some(p) = self.widgets.iter_mut().find(|p| p.widget == widget) {
            p.visible = !p.visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_only_place_allowed_widgets() {
        for view in UserView::all() {
            let layout = DashboardLayout::preset_for(view);
            let allowed = view_config(view).allowed_widgets;
            for placement in &layout.widgets {
                assert!(allowed.contains(&placement.widget));
                assert!(placement.visible);
            }
        }
    }

    #[test]
    fn non_financial_presets_hide_money_metrics() {
        let layout = DashboardLayout::preset_for(UserView::TorreControl);
        assert!(layout.visible_metrics.iter().all(|m| !m.is_financial()));

        let layout = DashboardLayout::preset_for(UserView::DireccionGeneral);
        assert!(layout
            .visible_metrics
            .contains(&MetricKind::TotalRevenue));
    }

    #[test]
    fn toggle_widget_flips_visibility() {
        let mut layout = DashboardLayout::preset_for(UserView::DireccionGeneral);
        assert!(layout.is_widget_visible(WidgetKind::Map));
        layout.toggle_widget(WidgetKind::Map);
        assert!(!layout.is_widget_visible(WidgetKind::Map));
        // Unknown placements stay invisible and toggling is a no-op.
        let layout = DashboardLayout::preset_for(UserView::VistaCliente);
        assert!(!layout.is_widget_visible(WidgetKind::Map));
    }
}
