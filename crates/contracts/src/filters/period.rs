use crate::shared::serde_date;
use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Active time-window selector. Drives both date-range filtering and
/// chart granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Custom,
}

impl Period {
    pub fn display_name(&self) -> &'static str {
        match self {
            Period::Day => "Hoy",
            Period::Week => "Última semana",
            Period::Month => "Último mes",
            Period::Quarter => "Último trimestre",
            Period::Year => "Último año",
            Period::Custom => "Personalizado",
        }
    }

    pub fn all() -> Vec<Period> {
        vec![
            Period::Day,
            Period::Week,
            Period::Month,
            Period::Quarter,
            Period::Year,
            Period::Custom,
        ]
    }
}

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(with = "serde_date")]
    pub from: NaiveDate,
    #[serde(with = "serde_date")]
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Range computed for a period selection. Custom bounds fall back to the
/// month-ago defaults when unset.
pub fn range_for_period(
    period: Period,
    today: NaiveDate,
    custom_from: Option<NaiveDate>,
    custom_to: Option<NaiveDate>,
) -> DateRange {
    let month_ago = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    match period {
        Period::Day => DateRange::new(today, today),
        Period::Week => DateRange::new(today - Duration::days(7), today),
        Period::Month => DateRange::new(month_ago, today),
        Period::Quarter => DateRange::new(
            today.checked_sub_months(Months::new(3)).unwrap_or(today),
            today,
        ),
        Period::Year => DateRange::new(
            today.checked_sub_months(Months::new(12)).unwrap_or(today),
            today,
        ),
        Period::Custom => DateRange::new(
            custom_from.unwrap_or(month_ago),
            custom_to.unwrap_or(today),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn day_range_covers_single_date() {
        let r = range_for_period(Period::Day, today(), None, None);
        assert_eq!(r.from, today());
        assert_eq!(r.to, today());
        assert!(r.contains(today()));
    }

    #[test]
    fn relative_ranges_end_today() {
        let week = range_for_period(Period::Week, today(), None, None);
        assert_eq!(week.from, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert_eq!(week.to, today());

        let month = range_for_period(Period::Month, today(), None, None);
        assert_eq!(month.from, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());

        let quarter = range_for_period(Period::Quarter, today(), None, None);
        assert_eq!(quarter.from, NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());

        let year = range_for_period(Period::Year, today(), None, None);
        assert_eq!(year.from, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    }

    #[test]
    fn custom_falls_back_to_month_defaults() {
        let r = range_for_period(Period::Custom, today(), None, None);
        assert_eq!(r.from, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        assert_eq!(r.to, today());

        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let r = range_for_period(Period::Custom, today(), Some(from), None);
        assert_eq!(r.from, from);
        assert_eq!(r.to, today());
    }
}
