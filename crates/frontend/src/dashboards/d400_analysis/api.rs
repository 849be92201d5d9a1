use contracts::dashboards::d400_analysis::{
    AnalysisRange, RevenuePoint, SalesSummary, TopProduct, REVENUE_PATH, SUMMARY_PATH,
    TOP_PRODUCTS_PATH,
};
use serde::Serialize;

use crate::shared::api_client::{ApiClient, ApiResult};

pub const TOP_PRODUCTS_LIMIT: usize = 10;

#[derive(Serialize)]
struct TopProductsQuery {
    #[serde(flatten)]
    range: AnalysisRange,
    limit: usize,
}

pub async fn fetch_summary(range: AnalysisRange) -> ApiResult<SalesSummary> {
    ApiClient::shared().get_with_query(SUMMARY_PATH, &range).await
}

/// Daily revenue, one point per day with sales.
pub async fn fetch_revenue(range: AnalysisRange) -> ApiResult<Vec<RevenuePoint>> {
    ApiClient::shared().get_with_query(REVENUE_PATH, &range).await
}

pub async fn fetch_top_products(range: AnalysisRange) -> ApiResult<Vec<TopProduct>> {
    let query = TopProductsQuery {
        range,
        limit: TOP_PRODUCTS_LIMIT,
    };
    ApiClient::shared()
        .get_with_query(TOP_PRODUCTS_PATH, &query)
        .await
}
