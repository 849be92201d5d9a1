use contracts::domain::a005_sale_program::{SaleProgram, SaleProgramDto, SALE_PROGRAMS_PATH};
use serde::de::IgnoredAny;
use serde::Serialize;
use web_sys::File;

use crate::shared::api_client::{ApiClient, ApiResult, FormBody};

const BANNER_FIELD: &str = "banner";

/// Server-side narrowing by the active flag; `None` returns every program.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgramQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    is_active: Option<bool>,
}

fn program_form(dto: &SaleProgramDto, banner: Option<File>) -> ApiResult<FormBody> {
    Ok(FormBody::from_serialize(dto)?.file(BANNER_FIELD, banner))
}

pub async fn fetch_programs(is_active: Option<bool>) -> ApiResult<Vec<SaleProgram>> {
    ApiClient::shared()
        .get_with_query(SALE_PROGRAMS_PATH, &ProgramQuery { is_active })
        .await
}

pub async fn create_program(dto: &SaleProgramDto, banner: Option<File>) -> ApiResult<()> {
    ApiClient::shared()
        .create::<IgnoredAny>(SALE_PROGRAMS_PATH, program_form(dto, banner)?)
        .await
        .map(|_| ())
}

pub async fn update_program(id: i64, dto: &SaleProgramDto, banner: Option<File>) -> ApiResult<()> {
    ApiClient::shared()
        .put(SALE_PROGRAMS_PATH, id, program_form(dto, banner)?)
        .await
}

pub async fn delete_program(id: i64) -> ApiResult<()> {
    ApiClient::shared().remove(SALE_PROGRAMS_PATH, id).await
}
