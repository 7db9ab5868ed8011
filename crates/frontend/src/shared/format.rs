//! Display formatting: Spanish conventions, thousands separated with
//! dots, decimals with a comma.

use chrono::NaiveDate;
use contracts::metrics::ValueFormat;

/// Format a value according to its metric format.
pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => format!("{} {}", format_decimal(val, 2), currency),
        ValueFormat::Number { decimals } => format_decimal(val, *decimals),
        ValueFormat::Percent { decimals } => format!("{}%", format_decimal(val, *decimals)),
        ValueFormat::Integer => format_thousands(val.round() as i64),
    }
}

/// `1234567.5` -> `"1.234.567,50"` (two decimals).
pub fn format_decimal(val: f64, decimals: u8) -> String {
    let formatted = format!("{:.prec$}", val.abs(), prec = decimals as usize);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };
    let int_value: i64 = int_part.parse().unwrap_or(0);
    let mut result = format_thousands(int_value);
    if val < 0.0 && int_value >= 0 {
        result.insert(0, '-');
    }
    if let Some(frac) = frac_part {
        result.push(',');
        result.push_str(&frac);
    }
    result
}

/// `1234567` -> `"1.234.567"`.
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// `2024-03-15` -> `"15/03/2024"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Placeholder shown instead of a hidden monetary value.
pub const HIDDEN_VALUE: &str = "—";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(42), "42");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(1234567), "1.234.567");
        assert_eq!(format_thousands(-1234), "-1.234");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1234.5, 2), "1.234,50");
        assert_eq!(format_decimal(0.0, 2), "0,00");
        assert_eq!(format_decimal(99.95, 1), "100,0");
        assert_eq!(format_decimal(-20.25, 2), "-20,25");
    }

    #[test]
    fn test_format_value() {
        let money = ValueFormat::Money { currency: "€".into() };
        assert_eq!(format_value(3509.0, &money), "3.509,00 €");
        assert_eq!(format_value(62.5, &ValueFormat::Percent { decimals: 1 }), "62,5%");
        assert_eq!(format_value(8.4, &ValueFormat::Integer), "8");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        assert_eq!(format_date(d), "08/03/2024");
    }
}
