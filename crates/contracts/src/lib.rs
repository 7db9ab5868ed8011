pub mod domain;
pub mod enums;
pub mod filters;
pub mod layout;
pub mod metrics;
pub mod shared;
pub mod views;
