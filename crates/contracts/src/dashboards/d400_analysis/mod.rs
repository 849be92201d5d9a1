use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ANALYSIS_PATH: &str = "/analysis";
pub const SUMMARY_PATH: &str = "/analysis/summary";
pub const REVENUE_PATH: &str = "/analysis/revenue";
pub const TOP_PRODUCTS_PATH: &str = "/analysis/top-products";

/// Query for every analysis endpoint: inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Headline figures for the selected period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub new_users: i64,
    pub products_sold: i64,
}

impl SalesSummary {
    pub fn average_order_value(&self) -> f64 {
        if self.total_orders == 0 {
            0.0
        } else {
            self.total_revenue / self.total_orders as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub revenue: f64,
    pub orders: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: i64,
    pub product_name: String,
    pub quantity_sold: i64,
    pub revenue: f64,
}
