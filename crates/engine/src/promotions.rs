//! In-memory promotion store. Append-only: promotions are created
//! through the management form and never updated or deleted.

use chrono::NaiveDate;
use contracts::domain::{Promotion, PromotionDto};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromotionError {
    #[error("promoción inválida: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct PromotionStore {
    items: Vec<Promotion>,
}

impl PromotionStore {
    /// Store pre-loaded with the seeded promotions.
    pub fn with_seed() -> Self {
        Self {
            items: crate::store::seed_promotions(),
        }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn all(&self) -> &[Promotion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate and append a new promotion built from the form payload.
    /// Returns the stored promotion; the store is untouched on error.
    pub fn create(
        &mut self,
        dto: PromotionDto,
        created_by: &str,
        today: NaiveDate,
    ) -> Result<Promotion, PromotionError> {
        let promotion = Promotion::new_for_insert(dto, created_by.to_string(), today);
        promotion.validate().map_err(PromotionError::Invalid)?;
        self.items.push(promotion.clone());
        log::info!("promotion created: {}", promotion.name);
        Ok(promotion)
    }

    /// Promotions whose effective status on `date` is active.
    pub fn active_on(&self, date: NaiveDate) -> Vec<&Promotion> {
        use contracts::enums::PromotionStatus;
        self.items
            .iter()
            .filter(|p| p.effective_status(date) == PromotionStatus::Active)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{PromotionKind, PromotionStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn dto(name: &str, value: f64) -> PromotionDto {
        PromotionDto {
            name: name.into(),
            kind: PromotionKind::Percentage,
            value,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            status: PromotionStatus::Active,
            target_products: vec![],
            target_customer_segments: vec![],
            constraints: Default::default(),
        }
    }

    #[test]
    fn create_appends_valid_promotions() {
        let mut store = PromotionStore::empty();
        let created = store.create(dto("Semana fantástica", 10.0), "admin", today()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].id, created.id);
        assert_eq!(created.usage_count, 0);
    }

    #[test]
    fn invalid_dto_leaves_store_untouched() {
        let mut store = PromotionStore::with_seed();
        let before = store.len();
        let err = store.create(dto("", 10.0), "admin", today());
        assert!(matches!(err, Err(PromotionError::Invalid(_))));
        assert_eq!(store.len(), before);
    }

    #[test]
    fn active_on_uses_effective_status() {
        let store = PromotionStore::with_seed();
        // Seed: PROMO-001 expired in January, PROMO-002 runs Feb-Apr,
        // PROMO-003 starts in April.
        let active: Vec<&str> = store
            .active_on(today())
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(active, vec!["PROMO-002"]);
    }
}
