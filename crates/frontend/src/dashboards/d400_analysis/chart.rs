//! Bar chart geometry for the revenue series.
//!
//! Bars are laid out as CSS percentages so the chart scales with its
//! container; only the relative heights are computed here.

use chrono::{Duration, NaiveDate};
use contracts::dashboards::d400_analysis::RevenuePoint;

/// Shortest visible bar for a non-zero value, in percent.
const MIN_BAR_PERCENT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub date: NaiveDate,
    pub value: f64,
    pub orders: i64,
    /// 0..=100, relative to the largest value in the series
    pub height_percent: f64,
}

pub fn scale(value: f64, max: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(MIN_BAR_PERCENT, 100.0)
}

/// One bar per day of `from..=to`; days without sales get an empty bar.
pub fn daily_bars(points: &[RevenuePoint], from: NaiveDate, to: NaiveDate) -> Vec<Bar> {
    if to < from {
        return Vec::new();
    }
    let days = (to - from).num_days();
    let mut bars: Vec<Bar> = (0..=days)
        .map(|offset| {
            let date = from + Duration::days(offset);
            let (value, orders) = points
                .iter()
                .filter(|p| p.date == date)
                .fold((0.0, 0), |(v, o), p| (v + p.revenue, o + p.orders));
            Bar {
                date,
                value,
                orders,
                height_percent: 0.0,
            }
        })
        .collect();
    // Heights are relative to the tallest day shown, after merging
    let max = bars.iter().map(|b| b.value).fold(0.0, f64::max);
    for bar in &mut bars {
        bar.height_percent = scale(bar.value, max);
    }
    bars
}

/// Rounded axis maximum: 1, 2 or 5 times a power of ten.
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn point(d: &str, revenue: f64) -> RevenuePoint {
        RevenuePoint {
            date: date(d),
            revenue,
            orders: 1,
        }
    }

    #[test]
    fn test_scale() {
        assert_eq!(scale(50.0, 100.0), 50.0);
        assert_eq!(scale(100.0, 100.0), 100.0);
        assert_eq!(scale(0.0, 100.0), 0.0);
        assert_eq!(scale(0.1, 1000.0), MIN_BAR_PERCENT);
        assert_eq!(scale(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_daily_bars_fill_missing_days() {
        let points = vec![point("2024-03-01", 200.0), point("2024-03-03", 100.0)];
        let bars = daily_bars(&points, date("2024-03-01"), date("2024-03-04"));
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[0].height_percent, 100.0);
        assert_eq!(bars[1].value, 0.0);
        assert_eq!(bars[1].orders, 0);
        assert_eq!(bars[2].height_percent, 50.0);
        assert_eq!(bars[3].date, date("2024-03-04"));
    }

    #[test]
    fn test_same_day_points_are_merged_before_scaling() {
        let points = vec![
            point("2024-01-01", 50.0),
            point("2024-01-01", 50.0),
            point("2024-01-02", 80.0),
        ];
        let bars = daily_bars(&points, date("2024-01-01"), date("2024-01-02"));
        assert_eq!(bars[0].value, 100.0);
        assert_eq!(bars[0].orders, 2);
        assert_eq!(bars[0].height_percent, 100.0);
        assert_eq!(bars[1].height_percent, 80.0);
    }

    #[test]
    fn test_points_outside_range_do_not_set_the_scale() {
        let points = vec![point("2023-12-31", 1000.0), point("2024-01-01", 40.0)];
        let bars = daily_bars(&points, date("2024-01-01"), date("2024-01-02"));
        assert_eq!(bars[0].height_percent, 100.0);
        assert_eq!(bars[1].height_percent, 0.0);
    }

    #[test]
    fn test_daily_bars_empty_and_reversed() {
        assert!(daily_bars(&[], date("2024-03-02"), date("2024-03-01")).is_empty());
        let bars = daily_bars(&[], date("2024-03-01"), date("2024-03-01"));
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].height_percent, 0.0);
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 0.0);
        assert_eq!(nice_max(87.0), 100.0);
        assert_eq!(nice_max(130.0), 200.0);
        assert_eq!(nice_max(4200.0), 5000.0);
        assert_eq!(nice_max(1000.0), 1000.0);
    }
}
