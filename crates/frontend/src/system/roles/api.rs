use contracts::system::roles::{
    role_claims_path, Role, RoleClaimsDto, RoleDto, PERMISSION_CLAIM_TYPE, ROLES_PATH,
};
use serde::de::IgnoredAny;

use crate::shared::api_client::{ApiClient, ApiResult, FormBody};

pub async fn fetch_roles() -> ApiResult<Vec<Role>> {
    ApiClient::shared().get(ROLES_PATH).await
}

pub async fn create_role(dto: &RoleDto) -> ApiResult<()> {
    ApiClient::shared()
        .create::<IgnoredAny>(ROLES_PATH, FormBody::from_serialize(dto)?)
        .await
        .map(|_| ())
}

pub async fn update_role(id: &str, dto: &RoleDto) -> ApiResult<()> {
    ApiClient::shared()
        .put(ROLES_PATH, id, FormBody::from_serialize(dto)?)
        .await
}

pub async fn delete_role(id: &str) -> ApiResult<()> {
    ApiClient::shared().remove(ROLES_PATH, id).await
}

/// Replaces the permission claims of a role.
pub async fn update_permissions(id: &str, values: Vec<String>) -> ApiResult<()> {
    let dto = RoleClaimsDto {
        claim_type: PERMISSION_CLAIM_TYPE.to_string(),
        claim_values: values,
    };
    ApiClient::shared()
        .put_at(&role_claims_path(id), FormBody::from_serialize(&dto)?)
        .await
}
