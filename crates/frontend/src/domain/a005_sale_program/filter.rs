//! Status filter of the sale program list.

use chrono::NaiveDate;
use contracts::domain::a005_sale_program::SaleProgram;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFilter {
    All,
    Active,
    Inactive,
    /// Active and inside its date range today
    Running,
}

impl ActiveFilter {
    pub const ALL: [ActiveFilter; 4] = [
        ActiveFilter::All,
        ActiveFilter::Active,
        ActiveFilter::Inactive,
        ActiveFilter::Running,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveFilter::All => "all",
            ActiveFilter::Active => "active",
            ActiveFilter::Inactive => "inactive",
            ActiveFilter::Running => "running",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveFilter::All => "All programs",
            ActiveFilter::Active => "Active",
            ActiveFilter::Inactive => "Inactive",
            ActiveFilter::Running => "Running today",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == value)
            .unwrap_or(ActiveFilter::All)
    }

    /// Value of the `isActive` query parameter sent to the backend.
    pub fn query_flag(&self) -> Option<bool> {
        match self {
            ActiveFilter::All => None,
            ActiveFilter::Active | ActiveFilter::Running => Some(true),
            ActiveFilter::Inactive => Some(false),
        }
    }

    pub fn matches(&self, program: &SaleProgram, today: NaiveDate) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Active => program.is_active,
            ActiveFilter::Inactive => !program.is_active,
            ActiveFilter::Running => program.is_running(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn program(is_active: bool) -> SaleProgram {
        SaleProgram {
            id: 1,
            name: "Summer".into(),
            description: None,
            discount_percent: 20.0,
            start_date: date("2024-06-01"),
            end_date: date("2024-08-31"),
            is_active,
            banner_url: None,
        }
    }

    #[test]
    fn test_parse_falls_back_to_all() {
        assert_eq!(ActiveFilter::parse("running"), ActiveFilter::Running);
        assert_eq!(ActiveFilter::parse(""), ActiveFilter::All);
        assert_eq!(ActiveFilter::parse("bogus"), ActiveFilter::All);
    }

    #[test]
    fn test_matches() {
        let in_season = date("2024-07-01");
        let off_season = date("2024-09-01");

        assert!(ActiveFilter::All.matches(&program(false), in_season));
        assert!(ActiveFilter::Active.matches(&program(true), off_season));
        assert!(!ActiveFilter::Active.matches(&program(false), in_season));
        assert!(ActiveFilter::Inactive.matches(&program(false), in_season));
        assert!(ActiveFilter::Running.matches(&program(true), in_season));
        assert!(!ActiveFilter::Running.matches(&program(true), off_season));
        assert!(!ActiveFilter::Running.matches(&program(false), in_season));
    }

    #[test]
    fn test_query_flag() {
        assert_eq!(ActiveFilter::All.query_flag(), None);
        assert_eq!(ActiveFilter::Running.query_flag(), Some(true));
        assert_eq!(ActiveFilter::Inactive.query_flag(), Some(false));
    }
}
