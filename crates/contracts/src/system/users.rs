use serde::{Deserialize, Serialize};

pub const USERS_PATH: &str = "/users";

pub fn user_permissions_path(user_id: &str) -> String {
    format!("{}/{}/permissions", USERS_PATH, user_id)
}

pub fn user_roles_path(user_id: &str) -> String {
    format!("{}/{}/roles", USERS_PATH, user_id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub email: String,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Form payload for `PATCH /users/{id}` (lock or unlock).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLockDto {
    pub is_locked: bool,
}

/// Form payload for `PUT /users/{id}/roles`; the whole role set is replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRolesDto {
    pub roles: Vec<String>,
}
