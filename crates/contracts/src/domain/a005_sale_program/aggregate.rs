use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::dates::lenient_date;

pub const SALE_PROGRAMS_PATH: &str = "/sale-programs";

/// Time-boxed discount campaign. Pricing is applied server-side; the admin
/// only edits the campaign itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleProgram {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub discount_percent: f64,
    #[serde(deserialize_with = "lenient_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "lenient_date")]
    pub end_date: NaiveDate,
    pub is_active: bool,
    #[serde(default)]
    pub banner_url: Option<String>,
}

impl SaleProgram {
    /// Active flag set and `today` inside the inclusive date range.
    pub fn is_running(&self, today: NaiveDate) -> bool {
        self.is_active && self.start_date <= today && today <= self.end_date
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleProgramDto {
    pub name: String,
    pub description: Option<String>,
    pub discount_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
}

impl From<&SaleProgram> for SaleProgramDto {
    fn from(s: &SaleProgram) -> Self {
        Self {
            name: s.name.clone(),
            description: s.description.clone(),
            discount_percent: s.discount_percent,
            start_date: s.start_date,
            end_date: s.end_date,
            is_active: s.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_is_running_inclusive_bounds() {
        let program = SaleProgram {
            id: 1,
            name: "Spring".into(),
            description: None,
            discount_percent: 15.0,
            start_date: date("2024-03-01"),
            end_date: date("2024-03-31"),
            is_active: true,
            banner_url: None,
        };
        assert!(program.is_running(date("2024-03-01")));
        assert!(program.is_running(date("2024-03-31")));
        assert!(!program.is_running(date("2024-04-01")));

        let paused = SaleProgram { is_active: false, ..program };
        assert!(!paused.is_running(date("2024-03-10")));
    }

    #[test]
    fn test_dates_use_iso_wire_format() {
        let raw = r#"{"id":2,"name":"BF","discountPercent":30,"startDate":"2024-11-29","endDate":"2024-12-02","isActive":true}"#;
        let program: SaleProgram = serde_json::from_str(raw).unwrap();
        assert_eq!(program.start_date, date("2024-11-29"));
        assert_eq!(program.discount_percent, 30.0);

        let raw = r#"{"id":3,"name":"CM","discountPercent":10,"startDate":"2024-12-02T00:00:00","endDate":"2024-12-03T00:00:00","isActive":false}"#;
        let program: SaleProgram = serde_json::from_str(raw).unwrap();
        assert_eq!(program.end_date, date("2024-12-03"));
    }
}
