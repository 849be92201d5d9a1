use contracts::shared::pagination::{PageQuery, PagedList};
use contracts::system::users::{
    user_roles_path, CreateUserDto, UpdateUserDto, User, UserLockDto, UserRolesDto, USERS_PATH,
};
use serde::de::IgnoredAny;

use crate::shared::api_client::{ApiClient, ApiResult, FormBody};

pub async fn fetch_page(query: &PageQuery) -> ApiResult<PagedList<User>> {
    ApiClient::shared().find_paged_list(USERS_PATH, query).await
}

pub async fn create_user(dto: &CreateUserDto) -> ApiResult<()> {
    ApiClient::shared()
        .create::<IgnoredAny>(USERS_PATH, FormBody::from_serialize(dto)?)
        .await
        .map(|_| ())
}

/// Profile fields only; email and password are not editable here.
pub async fn update_user(id: &str, dto: &UpdateUserDto) -> ApiResult<()> {
    ApiClient::shared()
        .put(USERS_PATH, id, FormBody::from_serialize(dto)?)
        .await
}

pub async fn delete_user(id: &str) -> ApiResult<()> {
    ApiClient::shared().remove(USERS_PATH, id).await
}

pub async fn set_locked(id: &str, is_locked: bool) -> ApiResult<()> {
    let form = FormBody::from_serialize(&UserLockDto { is_locked })?;
    ApiClient::shared().patch(USERS_PATH, id, form).await
}

/// Replaces the whole role set of the user.
pub async fn set_roles(id: &str, roles: Vec<String>) -> ApiResult<()> {
    let form = FormBody::from_serialize(&UserRolesDto { roles })?;
    ApiClient::shared().put_at(&user_roles_path(id), form).await
}
