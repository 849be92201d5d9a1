use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/auth/login";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Claims read from the JWT payload. The backend may use either the short
/// JWT names or the long identity-framework claim URIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(
        alias = "id",
        alias = "nameid",
        alias = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier"
    )]
    pub sub: String,
    #[serde(
        default,
        alias = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        alias = "unique_name",
        alias = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name"
    )]
    pub name: Option<String>,
    pub exp: i64, // expiration timestamp, seconds
    #[serde(default)]
    pub iat: Option<i64>,
}

impl TokenClaims {
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp <= now_secs
    }
}

/// Identity of the signed-in administrator as kept in the client store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<&TokenClaims> for CurrentUser {
    fn from(c: &TokenClaims) -> Self {
        let email = c.email.clone().unwrap_or_default();
        let name = c
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| email.clone());
        Self {
            id: c.sub.clone(),
            email,
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_accept_identity_uris() {
        let raw = r#"{
            "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": "42",
            "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress": "a@shop.io",
            "exp": 1700000000
        }"#;
        let claims: TokenClaims = serde_json::from_str(raw).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email.as_deref(), Some("a@shop.io"));
        assert!(claims.is_expired(1700000000));
        assert!(!claims.is_expired(1699999999));
    }

    #[test]
    fn test_current_user_falls_back_to_email_for_name() {
        let claims = TokenClaims {
            sub: "7".into(),
            email: Some("ops@shop.io".into()),
            name: None,
            exp: 0,
            iat: None,
        };
        let user = CurrentUser::from(&claims);
        assert_eq!(user.name, "ops@shop.io");
        assert_eq!(user.id, "7");
    }
}
