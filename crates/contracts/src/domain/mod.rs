pub mod customer;
pub mod order;
pub mod product;
pub mod promotion;

pub use customer::Customer;
pub use order::{GeoLocation, Order};
pub use product::Product;
pub use promotion::{Promotion, PromotionConstraints, PromotionDto};
