use crate::enums::{CustomerSegment, PromotionKind, PromotionStatus};
use crate::shared::serde_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional commercial constraints attached to a promotion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionConstraints {
    #[serde(rename = "minOrderValue", default)]
    pub min_order_value: Option<f64>,
    #[serde(rename = "maxDiscount", default)]
    pub max_discount: Option<f64>,
    #[serde(rename = "usageLimit", default)]
    pub usage_limit: Option<u32>,
}

/// A commercial promotion. Created through the management form and
/// appended to the in-memory store; there is no update or deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub name: String,
    pub kind: PromotionKind,
    /// Percent for `Percentage`, currency amount otherwise.
    pub value: f64,
    #[serde(rename = "startDate", with = "serde_date")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate", with = "serde_date")]
    pub end_date: NaiveDate,
    pub status: PromotionStatus,
    #[serde(rename = "targetProducts")]
    pub target_products: Vec<String>,
    #[serde(rename = "targetCustomerSegments")]
    pub target_customer_segments: Vec<CustomerSegment>,
    #[serde(default)]
    pub constraints: PromotionConstraints,
    #[serde(rename = "usageCount")]
    pub usage_count: u32,
    #[serde(rename = "salesBefore")]
    pub sales_before: f64,
    #[serde(rename = "salesAfter")]
    pub sales_after: f64,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    #[serde(rename = "createdDate", with = "serde_date")]
    pub created_date: NaiveDate,
    #[serde(rename = "lastModified", with = "serde_date")]
    pub last_modified: NaiveDate,
}

impl Promotion {
    pub fn new_for_insert(dto: PromotionDto, created_by: String, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: dto.name,
            kind: dto.kind,
            value: dto.value,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: dto.status,
            target_products: dto.target_products,
            target_customer_segments: dto.target_customer_segments,
            constraints: dto.constraints,
            usage_count: 0,
            sales_before: 0.0,
            sales_after: 0.0,
            created_by,
            created_date: today,
            last_modified: today,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre no puede estar vacío".into());
        }
        if self.value <= 0.0 {
            return Err("El valor debe ser mayor que cero".into());
        }
        if self.kind == PromotionKind::Percentage && self.value > 100.0 {
            return Err("Un descuento porcentual no puede superar el 100%".into());
        }
        if self.start_date > self.end_date {
            return Err("La fecha de inicio es posterior a la de fin".into());
        }
        if let Some(min) = self.constraints.min_order_value {
            if min < 0.0 {
                return Err("El pedido mínimo no puede ser negativo".into());
            }
        }
        if let Some(max) = self.constraints.max_discount {
            if max < 0.0 {
                return Err("El descuento máximo no puede ser negativo".into());
            }
        }
        Ok(())
    }

    /// Status shown in lists: a manual `Inactive` wins, otherwise the
    /// date range decides between scheduled, active and expired.
    pub fn effective_status(&self, today: NaiveDate) -> PromotionStatus {
        if self.status == PromotionStatus::Inactive {
            return PromotionStatus::Inactive;
        }
        if today < self.start_date {
            PromotionStatus::Scheduled
        } else if today > self.end_date {
            PromotionStatus::Expired
        } else {
            PromotionStatus::Active
        }
    }

    /// Sales uplift attributed to the promotion, in percent.
    pub fn sales_boost_percentage(&self) -> Option<f64> {
        if self.sales_before > 0.0 {
            Some((self.sales_after - self.sales_before) / self.sales_before * 100.0)
        } else {
            None
        }
    }
}

/// Form payload for creating a promotion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionDto {
    pub name: String,
    pub kind: PromotionKind,
    pub value: f64,
    #[serde(rename = "startDate", with = "serde_date")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate", with = "serde_date")]
    pub end_date: NaiveDate,
    pub status: PromotionStatus,
    #[serde(rename = "targetProducts", default)]
    pub target_products: Vec<String>,
    #[serde(rename = "targetCustomerSegments", default)]
    pub target_customer_segments: Vec<CustomerSegment>,
    #[serde(default)]
    pub constraints: PromotionConstraints,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> PromotionDto {
        PromotionDto {
            name: "Rebajas enero".into(),
            kind: PromotionKind::Percentage,
            value: 15.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            status: PromotionStatus::Active,
            target_products: vec!["PROD-001".into()],
            target_customer_segments: vec![CustomerSegment::Premium],
            constraints: PromotionConstraints::default(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn new_for_insert_initializes_audit_fields() {
        let p = Promotion::new_for_insert(dto(), "admin".into(), today());
        assert_eq!(p.usage_count, 0);
        assert_eq!(p.created_by, "admin");
        assert_eq!(p.created_date, today());
        assert_eq!(p.last_modified, today());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut p = Promotion::new_for_insert(dto(), "admin".into(), today());
        p.value = 0.0;
        assert!(p.validate().is_err());

        let mut p = Promotion::new_for_insert(dto(), "admin".into(), today());
        p.value = 120.0;
        assert!(p.validate().is_err());

        let mut p = Promotion::new_for_insert(dto(), "admin".into(), today());
        p.start_date = p.end_date.succ_opt().unwrap();
        assert!(p.validate().is_err());
    }

    #[test]
    fn effective_status_follows_date_range() {
        let p = Promotion::new_for_insert(dto(), "admin".into(), today());
        let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(p.effective_status(d(2024, 1, 5)), PromotionStatus::Scheduled);
        assert_eq!(p.effective_status(d(2024, 1, 20)), PromotionStatus::Active);
        assert_eq!(p.effective_status(d(2024, 2, 1)), PromotionStatus::Expired);

        let mut inactive = p.clone();
        inactive.status = PromotionStatus::Inactive;
        assert_eq!(
            inactive.effective_status(d(2024, 1, 20)),
            PromotionStatus::Inactive
        );
    }

    #[test]
    fn sales_boost_requires_baseline() {
        let mut p = Promotion::new_for_insert(dto(), "admin".into(), today());
        assert_eq!(p.sales_boost_percentage(), None);
        p.sales_before = 1000.0;
        p.sales_after = 1250.0;
        assert_eq!(p.sales_boost_percentage(), Some(25.0));
    }
}
