use contracts::domain::a001_brand::{Brand, BrandDto, BRANDS_PATH};
use serde::de::IgnoredAny;
use web_sys::File;

use crate::shared::api_client::{ApiClient, ApiResult, FormBody};

/// Multipart part carrying the logo image
const LOGO_FIELD: &str = "logo";

fn brand_form(dto: &BrandDto, logo: Option<File>) -> ApiResult<FormBody> {
    Ok(FormBody::from_serialize(dto)?.file(LOGO_FIELD, logo))
}

pub async fn fetch_brands() -> ApiResult<Vec<Brand>> {
    ApiClient::shared().get(BRANDS_PATH).await
}

pub async fn fetch_brand(id: i64) -> ApiResult<Brand> {
    ApiClient::shared().find(BRANDS_PATH, id).await
}

pub async fn create_brand(dto: &BrandDto, logo: Option<File>) -> ApiResult<()> {
    ApiClient::shared()
        .create::<IgnoredAny>(BRANDS_PATH, brand_form(dto, logo)?)
        .await
        .map(|_| ())
}

pub async fn update_brand(id: i64, dto: &BrandDto, logo: Option<File>) -> ApiResult<()> {
    ApiClient::shared()
        .put(BRANDS_PATH, id, brand_form(dto, logo)?)
        .await
}

pub async fn delete_brand(id: i64) -> ApiResult<()> {
    ApiClient::shared().remove(BRANDS_PATH, id).await
}
