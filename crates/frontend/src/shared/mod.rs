pub mod export;
pub mod filter_panel;
pub mod format;
pub mod icons;
