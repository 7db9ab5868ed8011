pub mod period;
pub mod state;

pub use period::{DateRange, Period};
pub use state::{AmountRange, CustomDateRange, FilterState};
