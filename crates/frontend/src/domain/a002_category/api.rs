use contracts::domain::a002_category::{Category, CategoryDto, CATEGORIES_PATH};
use serde::de::IgnoredAny;
use web_sys::File;

use super::tree::build_tree;
use crate::shared::api_client::{ApiClient, ApiResult, FormBody};

fn category_form(dto: &CategoryDto, image: Option<File>) -> ApiResult<FormBody> {
    Ok(FormBody::from_serialize(dto)?.file("image", image))
}

/// Category tree; a flat response is nested by `parentId`.
pub async fn fetch_tree() -> ApiResult<Vec<Category>> {
    let items: Vec<Category> = ApiClient::shared().get(CATEGORIES_PATH).await?;
    Ok(build_tree(items))
}

pub async fn create_category(dto: &CategoryDto, image: Option<File>) -> ApiResult<()> {
    ApiClient::shared()
        .create::<IgnoredAny>(CATEGORIES_PATH, category_form(dto, image)?)
        .await
        .map(|_| ())
}

pub async fn update_category(id: i64, dto: &CategoryDto, image: Option<File>) -> ApiResult<()> {
    ApiClient::shared()
        .put(CATEGORIES_PATH, id, category_form(dto, image)?)
        .await
}

pub async fn delete_category(id: i64) -> ApiResult<()> {
    ApiClient::shared().remove(CATEGORIES_PATH, id).await
}
