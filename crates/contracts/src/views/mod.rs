pub mod registry;
pub mod widget;

pub use registry::{view_config, UserView, ViewConfig, ViewPermissions, VIEW_CONFIGS};
pub use widget::{WidgetAccess, WidgetKind, WidgetRequirements};
