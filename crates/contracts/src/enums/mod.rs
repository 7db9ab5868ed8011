pub mod customer;
pub mod order;
pub mod product;
pub mod promotion;

pub use customer::{CustomerSegment, CustomerStatus};
pub use order::{OrderPriority, OrderStatus, PaymentMethod, SalesChannel};
pub use product::ProductCategory;
pub use promotion::{PromotionKind, PromotionStatus};
