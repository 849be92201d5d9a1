//! Client-side route gate.
//!
//! Only decides what to show; the backend enforces permissions on every call.

use contracts::system::auth::TokenClaims;
use contracts::system::roles::permissions;

use super::token::decode_claims;
use crate::routes::admin_pages::FORBIDDEN_PATH;
use crate::shared::api_client::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Missing,
    Invalid,
    Expired,
    Valid(TokenClaims),
}

impl Session {
    pub fn check(token: Option<&str>, now_secs: i64) -> Self {
        let Some(token) = token else {
            return Session::Missing;
        };
        match decode_claims(token) {
            Ok(claims) if claims.is_expired(now_secs) => Session::Expired,
            Ok(claims) => Session::Valid(claims),
            Err(e) => {
                log::warn!("Stored token rejected: {}", e);
                Session::Invalid
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    SignIn,
    Forbidden,
}

/// `Permissions.Admin` implies every other permission.
pub fn has_permission(granted: &[String], required: &str) -> bool {
    granted
        .iter()
        .any(|p| p == permissions::ADMIN || p == required)
}

pub fn decide(session: &Session, required: Option<&str>, granted: &[String]) -> GateDecision {
    match session {
        Session::Valid(_) => match required {
            Some(required) if !has_permission(granted, required) => GateDecision::Forbidden,
            _ => GateDecision::Allow,
        },
        _ => GateDecision::SignIn,
    }
}

/// Page to leave for when the permission set cannot be loaded.
///
/// `None` when the client has already redirected (network, 401, 500).
pub fn permissions_fallback(err: &ApiError) -> Option<&'static str> {
    match err.redirect() {
        Some(_) => None,
        None => Some(FORBIDDEN_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::token::tests::make_token;

    fn granted(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_session_check() {
        assert_eq!(Session::check(None, 0), Session::Missing);
        assert_eq!(Session::check(Some("garbage"), 0), Session::Invalid);

        let token = make_token(r#"{"sub":"1","exp":100}"#);
        assert_eq!(Session::check(Some(&token), 100), Session::Expired);
        assert!(matches!(Session::check(Some(&token), 99), Session::Valid(_)));
    }

    #[test]
    fn test_admin_permission_passes_every_gate() {
        assert!(has_permission(&granted(&[permissions::ADMIN]), permissions::ORDERS));
        assert!(has_permission(&granted(&[permissions::ORDERS]), permissions::ORDERS));
        assert!(!has_permission(&granted(&[permissions::BRANDS]), permissions::ORDERS));
        assert!(!has_permission(&[], permissions::ORDERS));
    }

    #[test]
    fn test_permissions_fallback() {
        assert_eq!(permissions_fallback(&ApiError::Forbidden), Some(FORBIDDEN_PATH));
        assert_eq!(permissions_fallback(&ApiError::NotFound), Some(FORBIDDEN_PATH));
        assert_eq!(
            permissions_fallback(&ApiError::Decode("bad json".into())),
            Some(FORBIDDEN_PATH)
        );
        assert_eq!(permissions_fallback(&ApiError::Unauthorized), None);
        assert_eq!(permissions_fallback(&ApiError::Server("boom".into())), None);
    }

    #[test]
    fn test_decide() {
        let token = make_token(r#"{"sub":"1","exp":100}"#);
        let valid = Session::check(Some(&token), 0);
        let brands = granted(&[permissions::BRANDS]);

        assert_eq!(decide(&Session::Missing, None, &brands), GateDecision::SignIn);
        assert_eq!(decide(&Session::Expired, None, &brands), GateDecision::SignIn);
        assert_eq!(decide(&valid, None, &[]), GateDecision::Allow);
        assert_eq!(
            decide(&valid, Some(permissions::BRANDS), &brands),
            GateDecision::Allow
        );
        assert_eq!(
            decide(&valid, Some(permissions::USERS), &brands),
            GateDecision::Forbidden
        );
    }
}
