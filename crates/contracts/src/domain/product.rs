use crate::enums::ProductCategory;
use serde::{Deserialize, Serialize};

/// Catalogue product. Read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub price: f64,
    pub cost: f64,
    /// Margin in percent.
    pub margin: f64,
}
