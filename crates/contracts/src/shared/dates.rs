//! Lenient date fields: the backend may send either `2024-03-01` or a full
//! timestamp such as `2024-03-01T00:00:00`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

pub fn parse_date_prefix(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub fn lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_prefix(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_prefix() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert_eq!(parse_date_prefix("2024-03-01"), expected);
        assert_eq!(parse_date_prefix("2024-03-01T00:00:00"), expected);
        assert_eq!(parse_date_prefix("2024-03-01T00:00:00.000Z"), expected);
        assert_eq!(parse_date_prefix("01.03.2024"), None);
        assert_eq!(parse_date_prefix("2024"), None);
    }
}
