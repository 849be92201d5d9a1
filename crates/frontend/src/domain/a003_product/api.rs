use contracts::domain::a003_product::{
    product_items_path, Product, ProductDto, ProductItem, ProductItemDto, PRODUCTS_PATH,
};
use contracts::shared::pagination::{PageQuery, PagedList};
use serde::de::IgnoredAny;
use web_sys::File;

use crate::shared::api_client::{ApiClient, ApiResult, FormBody};

fn product_form(dto: &ProductDto, image: Option<File>) -> ApiResult<FormBody> {
    Ok(FormBody::from_serialize(dto)?.file("image", image))
}

pub async fn fetch_page(query: &PageQuery) -> ApiResult<PagedList<Product>> {
    ApiClient::shared().find_paged_list(PRODUCTS_PATH, query).await
}

pub async fn fetch_product(id: i64) -> ApiResult<Product> {
    ApiClient::shared().find(PRODUCTS_PATH, id).await
}

pub async fn create_product(dto: &ProductDto, image: Option<File>) -> ApiResult<()> {
    ApiClient::shared()
        .create::<IgnoredAny>(PRODUCTS_PATH, product_form(dto, image)?)
        .await
        .map(|_| ())
}

pub async fn update_product(id: i64, dto: &ProductDto, image: Option<File>) -> ApiResult<()> {
    ApiClient::shared()
        .put(PRODUCTS_PATH, id, product_form(dto, image)?)
        .await
}

pub async fn delete_product(id: i64) -> ApiResult<()> {
    ApiClient::shared().remove(PRODUCTS_PATH, id).await
}

// Variants

pub async fn fetch_items(product_id: i64) -> ApiResult<Vec<ProductItem>> {
    ApiClient::shared().get(&product_items_path(product_id)).await
}

pub async fn create_item(product_id: i64, dto: &ProductItemDto) -> ApiResult<()> {
    ApiClient::shared()
        .create::<IgnoredAny>(&product_items_path(product_id), FormBody::from_serialize(dto)?)
        .await
        .map(|_| ())
}

pub async fn update_item(product_id: i64, item_id: i64, dto: &ProductItemDto) -> ApiResult<()> {
    ApiClient::shared()
        .put(&product_items_path(product_id), item_id, FormBody::from_serialize(dto)?)
        .await
}

pub async fn delete_item(product_id: i64, item_id: i64) -> ApiResult<()> {
    ApiClient::shared()
        .remove(&product_items_path(product_id), item_id)
        .await
}
