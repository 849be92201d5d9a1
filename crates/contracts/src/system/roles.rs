use serde::{Deserialize, Serialize};

pub const ROLES_PATH: &str = "/roles";

pub fn role_claims_path(role_id: &str) -> String {
    format!("{}/{}/claims", ROLES_PATH, role_id)
}

/// Claim type under which permissions are stored on roles.
pub const PERMISSION_CLAIM_TYPE: &str = "Permission";

/// Permission values known to the admin UI.
pub mod permissions {
    /// Grants every admin page.
    pub const ADMIN: &str = "Permissions.Admin";
    pub const BRANDS: &str = "Permissions.Brands.Manage";
    pub const CATEGORIES: &str = "Permissions.Categories.Manage";
    pub const PRODUCTS: &str = "Permissions.Products.Manage";
    pub const ORDERS: &str = "Permissions.Orders.Manage";
    pub const USERS: &str = "Permissions.Users.Manage";
    pub const ROLES: &str = "Permissions.Roles.Manage";
    pub const SALE_PROGRAMS: &str = "Permissions.SalePrograms.Manage";
    pub const ANALYSIS: &str = "Permissions.Analysis.View";

    pub const ALL: [&str; 9] = [
        ADMIN,
        BRANDS,
        CATEGORIES,
        PRODUCTS,
        ORDERS,
        USERS,
        ROLES,
        SALE_PROGRAMS,
        ANALYSIS,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleClaim {
    pub claim_type: String,
    pub claim_value: String,
}

impl RoleClaim {
    pub fn permission(value: &str) -> Self {
        Self {
            claim_type: PERMISSION_CLAIM_TYPE.to_string(),
            claim_value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub claims: Vec<RoleClaim>,
}

impl Role {
    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.claims
            .iter()
            .filter(|c| c.claim_type == PERMISSION_CLAIM_TYPE)
            .map(|c| c.claim_value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub name: String,
    pub description: Option<String>,
}

/// Form payload for `PUT /roles/{id}/claims`: repeated `claimValues` parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleClaimsDto {
    pub claim_type: String,
    pub claim_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissions_skip_other_claim_types() {
        let role = Role {
            id: "r1".into(),
            name: "Catalog".into(),
            description: None,
            claims: vec![
                RoleClaim::permission(permissions::BRANDS),
                RoleClaim {
                    claim_type: "Department".into(),
                    claim_value: "Sales".into(),
                },
            ],
        };
        let perms: Vec<&str> = role.permissions().collect();
        assert_eq!(perms, vec![permissions::BRANDS]);
    }
}
