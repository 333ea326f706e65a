use quailcalc_core::{FieldUnit, round_half_up};

/// Insert thousands separators into an integer digit string (optionally signed).
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();
    format!("{sign}{grouped}")
}

/// Round for display and group thousands (e.g. 1731.99 -> "1,732").
pub fn format_count(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let rounded = round_half_up(value) + 0.0;
    group_thousands(&format!("{rounded:.0}"))
}

/// Format a money amount with the configured currency prefix, without cents.
pub fn format_money(currency: &str, value: f64) -> String {
    if currency.is_empty() {
        format_count(value)
    } else {
        format!("{} {}", currency, format_count(value))
    }
}

/// Format a value in compact form for chart axes (e.g. 2.1M, 450K, 50)
pub fn format_compact(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}{:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}{:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}{:.0}", sign, abs_value)
    }
}

/// Show a form value as entered, with a suffix for its unit.
pub fn format_input(value: f64, unit: FieldUnit, currency: &str) -> String {
    match unit {
        FieldUnit::Percent => format!("{value}%"),
        FieldUnit::Currency if !currency.is_empty() => format!("{currency} {value}"),
        FieldUnit::Grams => format!("{value} g"),
        FieldUnit::Weeks => format!("{value} wk"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.4), "999");
        assert_eq!(format_count(1731.9999999), "1,732");
        assert_eq!(format_count(3_141_372.75), "3,141,373");
        assert_eq!(format_count(-55_427.25), "-55,427");
        assert_eq!(format_count(-0.2), "0");
        assert_eq!(format_count(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("MK", 173_200.0), "MK 173,200");
        assert_eq!(format_money("MK", -1_500.5), "MK -1,500");
        assert_eq!(format_money("", 42.0), "42");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(3_141_373.0), "3.1M");
        assert_eq!(format_compact(197_373.0), "197K");
        assert_eq!(format_compact(-37_373.0), "-37K");
        assert_eq!(format_compact(50.0), "50");
    }

    #[test]
    fn test_format_input() {
        assert_eq!(format_input(80.0, FieldUnit::Percent, "MK"), "80%");
        assert_eq!(format_input(1500.0, FieldUnit::Currency, "MK"), "MK 1500");
        assert_eq!(format_input(12.5, FieldUnit::Grams, "MK"), "12.5 g");
        assert_eq!(format_input(100.0, FieldUnit::Count, "MK"), "100");
    }
}
