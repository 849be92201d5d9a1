//! Number formatting for tables and cards

pub const CURRENCY_SYMBOL: &str = "$";

/// Formats a number with a thousands separator (`,`) and fixed decimals
///
/// # Examples
///
/// ```
/// use shop_admin::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    // "-0.00" reads as noise in a table
    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with two decimals and the currency symbol
pub fn format_money(value: f64) -> String {
    let body = format_number_with_decimals(value, 2);
    match body.strip_prefix('-') {
        Some(abs) => format!("-{}{}", CURRENCY_SYMBOL, abs),
        None => format!("{}{}", CURRENCY_SYMBOL, body),
    }
}

pub fn format_int(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}

pub fn format_percent(value: f64) -> String {
    let body = format_number_with_decimals(value, 1);
    format!("{}%", body.strip_suffix(".0").unwrap_or(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "$1,234.56");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-1234.5), "-$1,234.50");
        assert_eq!(format_money(-0.001), "$0.00");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(999), "999");
        assert_eq!(format_int(1000), "1,000");
        assert_eq!(format_int(-1234567), "-1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(15.0), "15%");
        assert_eq!(format_percent(12.5), "12.5%");
    }
}
