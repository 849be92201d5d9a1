use contracts::domain::a004_order::{Order, OrderStatus, OrderStatusDto, ORDERS_PATH};
use contracts::shared::pagination::{PageQuery, PagedList};

use crate::shared::api_client::{ApiClient, ApiResult, FormBody};

pub async fn fetch_page(query: &PageQuery) -> ApiResult<PagedList<Order>> {
    ApiClient::shared().find_paged_list(ORDERS_PATH, query).await
}

pub async fn fetch_order(id: i64) -> ApiResult<Order> {
    ApiClient::shared().find(ORDERS_PATH, id).await
}

pub async fn update_status(id: i64, status: OrderStatus) -> ApiResult<()> {
    let form = FormBody::from_serialize(&OrderStatusDto { status })?;
    ApiClient::shared().patch(ORDERS_PATH, id, form).await
}

pub async fn delete_order(id: i64) -> ApiResult<()> {
    ApiClient::shared().remove(ORDERS_PATH, id).await
}
