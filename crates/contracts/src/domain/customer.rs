use crate::enums::{CustomerSegment, CustomerStatus};
use crate::shared::serde_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// CRM customer record. Read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub segment: CustomerSegment,
    pub status: CustomerStatus,
    #[serde(rename = "acquisitionDate", with = "serde_date")]
    pub acquisition_date: NaiveDate,
    #[serde(rename = "lifetimeValue")]
    pub lifetime_value: f64,
    #[serde(rename = "lastOrderDate", with = "serde_date::opt", default)]
    pub last_order_date: Option<NaiveDate>,
}
