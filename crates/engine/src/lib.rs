//! Client-side core of the OnTrack dashboard: compiled-in records,
//! the filter pipeline, view-based visibility and metric generation.
//! Everything here is synchronous and free of I/O; the frontend calls
//! these functions directly inside its render cycle.

pub mod filter_engine;
pub mod layout_io;
pub mod metrics;
pub mod promotions;
pub mod store;
pub mod upload;
pub mod view_filter;
pub mod widget_gate;

pub use filter_engine::apply_filters;
pub use view_filter::{filter_data_by_view, hide_financial_data, CustomerScoped};
pub use widget_gate::widget_access;
