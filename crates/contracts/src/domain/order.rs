use crate::enums::{
    CustomerSegment, OrderPriority, OrderStatus, PaymentMethod, ProductCategory, SalesChannel,
};
use crate::shared::serde_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Geographic point of delivery, used by the map widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    pub city: String,
    pub state: String,
    pub country: String,
}

/// A sales order. The dataset is read-only at runtime: orders are built
/// once by the record store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "customerId")]
    pub customer_id: String,
    pub customer: String,
    #[serde(rename = "customerEmail")]
    pub customer_email: String,
    #[serde(rename = "productIds")]
    pub product_ids: Vec<String>,
    /// Product names, denormalized for display and free-text search.
    pub products: Vec<String>,
    pub amount: f64,
    pub cost: f64,
    /// Margin in percent.
    pub margin: f64,
    pub status: OrderStatus,
    #[serde(with = "serde_date")]
    pub date: NaiveDate,
    pub location: GeoLocation,
    pub address: String,
    #[serde(rename = "salesRep")]
    pub sales_rep: String,
    pub channel: SalesChannel,
    pub priority: OrderPriority,
    pub category: ProductCategory,
    #[serde(rename = "customerSegment")]
    pub customer_segment: CustomerSegment,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "deliveryDate", with = "serde_date::opt", default)]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    pub discount: f64,
    pub tax: f64,
    /// Derived from amount, discount and tax at creation time; never
    /// recomputed afterwards.
    #[serde(rename = "netAmount")]
    pub net_amount: f64,
}

impl Order {
    /// Net amount as computed at order creation.
    pub fn net_amount_of(amount: f64, discount: f64, tax: f64) -> f64 {
        amount - discount + tax
    }
}
