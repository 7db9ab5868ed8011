use super::period::{range_for_period, DateRange, Period};
use crate::enums::{OrderStatus, ProductCategory, SalesChannel};
use crate::shared::serde_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default upper bound of the amount slider. A range narrower than
/// `[0, AMOUNT_MAX]` counts as an active filter.
pub const AMOUNT_MAX: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl Default for AmountRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: AMOUNT_MAX,
        }
    }
}

impl AmountRange {
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }

    pub fn is_narrowed(&self) -> bool {
        self.min > 0.0 || self.max < AMOUNT_MAX
    }
}

/// Custom bounds, only consulted while `period == Custom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDateRange {
    #[serde(with = "serde_date::opt", default)]
    pub from: Option<NaiveDate>,
    #[serde(with = "serde_date::opt", default)]
    pub to: Option<NaiveDate>,
}

/// The structured query driving the dashboard: period plus multi-select
/// sets, amount range and free-text search.
///
/// Invariant: `date_range` is always recomputed from `period`, except in
/// custom mode where it mirrors `custom_date_range`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub period: Period,
    #[serde(rename = "dateRange")]
    pub date_range: DateRange,
    #[serde(rename = "customDateRange", default)]
    pub custom_date_range: CustomDateRange,
    #[serde(default)]
    pub statuses: Vec<OrderStatus>,
    #[serde(default)]
    pub cities: Vec<String>,
    /// Customer ids.
    #[serde(default)]
    pub customers: Vec<String>,
    #[serde(default)]
    pub categories: Vec<ProductCategory>,
    #[serde(default)]
    pub channels: Vec<SalesChannel>,
    #[serde(rename = "amountRange", default)]
    pub amount_range: AmountRange,
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

impl FilterState {
    /// Default state: last-month window, nothing selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            period: Period::Month,
            date_range: range_for_period(Period::Month, today, None, None),
            custom_date_range: CustomDateRange::default(),
            statuses: Vec::new(),
            cities: Vec::new(),
            customers: Vec::new(),
            categories: Vec::new(),
            channels: Vec::new(),
            amount_range: AmountRange::default(),
            search_term: String::new(),
        }
    }

    /// Period transition. A non-custom period always overwrites the date
    /// range; custom preserves previously chosen custom bounds.
    pub fn set_period(&mut self, period: Period, today: NaiveDate) {
        self.period = period;
        self.date_range = range_for_period(
            period,
            today,
            self.custom_date_range.from,
            self.custom_date_range.to,
        );
    }

    /// Explicit custom bounds. Switches the state into custom mode.
    pub fn set_custom_range(&mut self, from: NaiveDate, to: NaiveDate) {
        self.period = Period::Custom;
        self.custom_date_range = CustomDateRange {
            from: Some(from),
            to: Some(to),
        };
        self.date_range = DateRange::new(from, to);
    }

    /// True when any filter deviates from the defaults. The filter
    /// engine short-circuits to the full dataset when this is false, so
    /// the default date window never hides rows.
    pub fn has_active_filters(&self) -> bool {
        !self.statuses.is_empty()
            || !self.cities.is_empty()
            || !self.customers.is_empty()
            || !self.categories.is_empty()
            || !self.channels.is_empty()
            || !self.search_term.trim().is_empty()
            || self.period == Period::Custom
            || self.amount_range.is_narrowed()
    }

    /// Number of active filter groups, shown as a badge on the panel.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.statuses.is_empty(),
            !self.cities.is_empty(),
            !self.customers.is_empty(),
            !self.categories.is_empty(),
            !self.channels.is_empty(),
            !self.search_term.trim().is_empty(),
            self.period == Period::Custom,
            self.amount_range.is_narrowed(),
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = FilterState::new(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn defaults_have_no_active_filters() {
        let f = FilterState::new(today());
        assert!(!f.has_active_filters());
        assert_eq!(f.active_filter_count(), 0);
    }

    #[test]
    fn each_group_activates_the_state() {
        let mut f = FilterState::new(today());
        f.statuses.push(OrderStatus::Pendiente);
        assert!(f.has_active_filters());

        let mut f = FilterState::new(today());
        f.search_term = "  ".into();
        assert!(!f.has_active_filters(), "blank search is not a filter");
        f.search_term = "acme".into();
        assert!(f.has_active_filters());

        let mut f = FilterState::new(today());
        f.amount_range.max = 5_000.0;
        assert!(f.has_active_filters());
    }

    #[test]
    fn non_custom_period_overwrites_range() {
        let mut f = FilterState::new(today());
        f.set_custom_range(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        assert_eq!(f.period, Period::Custom);
        assert!(f.has_active_filters());

        f.set_period(Period::Day, today());
        assert_eq!(f.date_range, DateRange::new(today(), today()));

        // Going back to custom restores the previously chosen bounds.
        f.set_period(Period::Custom, today());
        assert_eq!(
            f.date_range,
            DateRange::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
            )
        );
    }
}
