//! JWT payload decoding.
//!
//! The signature is not checked here; the backend verifies every request.
//! The client only needs the identity and the expiry.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use contracts::system::auth::TokenClaims;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("token must have three dot-separated parts")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Base64(String),
    #[error("token payload is not valid claims JSON: {0}")]
    Json(String),
}

pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let mut parts = token.trim().split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => return Err(TokenError::Malformed),
    };
    // Some issuers keep the '=' padding.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))
}

/// Current time in seconds since the epoch.
pub fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_token(payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json);
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn test_decodes_claims() {
        let token = make_token(r#"{"sub":"u-1","email":"a@shop.io","name":"Ann","exp":2000000000}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.name.as_deref(), Some("Ann"));
        assert_eq!(claims.exp, 2000000000);
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let header = URL_SAFE_NO_PAD.encode("{}");
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"1","exp":5}"#);
        let token = format!("{}.{}.sig", header, payload);
        assert_eq!(decode_claims(&token).unwrap().exp, 5);
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert_eq!(decode_claims("abc"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a..c"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
        assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Base64(_))));
        let not_claims = format!("h.{}.s", URL_SAFE_NO_PAD.encode("[1,2]"));
        assert!(matches!(decode_claims(&not_claims), Err(TokenError::Json(_))));
    }
}
