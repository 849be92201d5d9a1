//! Parsing of typed form values before they are posted.

/// Trimmed text, `None` when blank.
pub fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn required_text(value: &str, field: &str) -> Result<String, String> {
    optional_text(value).ok_or_else(|| format!("{} is required", field))
}

/// Non-negative decimal; accepts `,` as the decimal separator.
pub fn parse_amount(value: &str, field: &str) -> Result<f64, String> {
    let normalized = value.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(format!("{} is required", field));
    }
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(format!("{} must be a non-negative number", field)),
    }
}

pub fn parse_count(value: &str, field: &str) -> Result<i64, String> {
    match value.trim().parse::<i64>() {
        Ok(v) if v >= 0 => Ok(v),
        _ => Err(format!("{} must be a whole non-negative number", field)),
    }
}

/// Id picked in a `<select>`; the empty option means nothing chosen.
pub fn parse_selected_id(value: &str, field: &str) -> Result<i64, String> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("Select a {}", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("  a "), Some("a".to_string()));
        assert_eq!(optional_text("   "), None);
        assert!(required_text("", "Name").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5", "Price"), Ok(12.5));
        assert_eq!(parse_amount(" 12,5 ", "Price"), Ok(12.5));
        assert_eq!(parse_amount("", "Price"), Err("Price is required".to_string()));
        assert!(parse_amount("-1", "Price").is_err());
        assert!(parse_amount("abc", "Price").is_err());
        assert!(parse_amount("inf", "Price").is_err());
    }

    #[test]
    fn test_parse_count_and_selected_id() {
        assert_eq!(parse_count("7", "Stock"), Ok(7));
        assert!(parse_count("1.5", "Stock").is_err());
        assert!(parse_count("-3", "Stock").is_err());
        assert_eq!(parse_selected_id("4", "brand"), Ok(4));
        assert_eq!(parse_selected_id("", "brand"), Err("Select a brand".to_string()));
    }
}
