use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a backend call, classified by how the UI reacts to it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Session expired, please sign in again")]
    Unauthorized,
    #[error("Access denied")]
    Forbidden,
    #[error("Not found")]
    NotFound,
    #[error("Server error: {0}")]
    Server(String),
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to build request: {0}")]
    Encode(String),
    #[error("Invalid pagination header: {0}")]
    Pagination(String),
}

impl ApiError {
    /// Maps a non-success response to an error, keeping the backend's
    /// message when it sent one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            500 => ApiError::Server(message),
            _ => ApiError::Status { status, message },
        }
    }

    /// Global redirect the interceptor performs for this error, if any.
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            ApiError::Network(_) => Some(Redirect::Error(ErrorReason::Network)),
            ApiError::Unauthorized => Some(Redirect::SignIn),
            ApiError::Server(_) => Some(Redirect::Error(ErrorReason::Server)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorReason {
    Network,
    Server,
}

impl ErrorReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorReason::Network => "network",
            ErrorReason::Server => "server",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "network" => Some(ErrorReason::Network),
            "server" => Some(ErrorReason::Server),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    SignIn,
    Error(ErrorReason),
}

impl Redirect {
    pub fn path(&self) -> String {
        match self {
            Redirect::SignIn => "/signin".to_string(),
            Redirect::Error(reason) => format!("/error?reason={}", reason.as_str()),
        }
    }
}

const MAX_MESSAGE_LEN: usize = 200;

/// Pulls a human readable message out of an error body: JSON `message`,
/// `title` or `detail` fields, otherwise the (truncated) text itself.
pub fn extract_message(body: &str) -> String {
    let body = body.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "title", "detail"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
        if let Some(msg) = value.as_str() {
            return msg.to_string();
        }
    }
    body.chars().take(MAX_MESSAGE_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, ""), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, ""), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(500, "boom"),
            ApiError::Server("boom".into())
        );
        assert_eq!(
            ApiError::from_status(422, r#"{"message":"Name is required"}"#),
            ApiError::Status {
                status: 422,
                message: "Name is required".into()
            }
        );
    }

    #[test]
    fn test_only_network_401_and_500_redirect() {
        assert_eq!(
            ApiError::Network("offline".into()).redirect(),
            Some(Redirect::Error(ErrorReason::Network))
        );
        assert_eq!(ApiError::Unauthorized.redirect(), Some(Redirect::SignIn));
        assert_eq!(
            ApiError::Server(String::new()).redirect(),
            Some(Redirect::Error(ErrorReason::Server))
        );
        assert_eq!(ApiError::Forbidden.redirect(), None);
        assert_eq!(ApiError::from_status(502, "").redirect(), None);
        assert_eq!(ApiError::Decode("x".into()).redirect(), None);
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(Redirect::SignIn.path(), "/signin");
        assert_eq!(
            Redirect::Error(ErrorReason::Server).path(),
            "/error?reason=server"
        );
        assert_eq!(ErrorReason::parse("network"), Some(ErrorReason::Network));
        assert_eq!(ErrorReason::parse("other"), None);
    }

    #[test]
    fn test_extract_message_variants() {
        assert_eq!(extract_message(r#"{"title":"Bad request"}"#), "Bad request");
        assert_eq!(extract_message(r#""plain json string""#), "plain json string");
        assert_eq!(extract_message("  Brand exists  "), "Brand exists");
        assert_eq!(extract_message(&"x".repeat(500)).len(), MAX_MESSAGE_LEN);
    }
}
