pub mod charts;
pub mod dashboard;
pub mod layout_customizer;
pub mod map_panel;
pub mod metric_cards;
pub mod orders_table;
pub mod recent_orders;
pub mod widget_wrapper;
