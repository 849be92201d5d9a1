//! Application configuration
//!
//! The backend address is baked in at build time through the `API_BASE_URL`
//! environment variable (e.g. `API_BASE_URL=https://api.shop.io trunk build`).
//! Without it the API is expected on port 5000 of the host serving the UI.

use std::sync::OnceLock;

/// Port used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_API_PORT: u16 = 5000;

/// How long a notice stays on screen.
pub const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Page size options offered by list pages.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Configuration loaded once on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Reads the build-time override, falling back to the window location.
    pub fn load() -> Self {
        let api_base_url = match option_env!("API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => normalize_base_url(url),
            _ => location_base_url(),
        };
        log::debug!("API base url: {}", api_base_url);
        Self { api_base_url }
    }

    /// Build a full API URL from a path such as `/brands/3`.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.api_base_url, path)
    }
}

fn location_base_url() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize_base_url(" https://api.shop.io/ "), "https://api.shop.io");
    }

    #[test]
    fn test_join_url_handles_missing_slash() {
        assert_eq!(join_url("http://h:5000", "/brands"), "http://h:5000/brands");
        assert_eq!(join_url("http://h:5000", "brands/1"), "http://h:5000/brands/1");
    }

    #[test]
    fn test_url_uses_configured_base() {
        let cfg = AppConfig {
            api_base_url: "http://localhost:5000".into(),
        };
        assert_eq!(cfg.url("/orders/9"), "http://localhost:5000/orders/9");
    }
}
