//! Global response interceptor: the one place that reacts to failures
//! every page treats the same way.

use super::error::{ApiError, Redirect};
use crate::system::auth::storage;

/// Performs the global redirect for `err`, if it has one.
pub fn intercept(err: &ApiError) {
    let Some(redirect) = err.redirect() else {
        return;
    };
    if redirect == Redirect::SignIn {
        storage::clear_token();
    }
    navigate_away(&redirect.path());
}

fn navigate_away(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    // Already there: a reload would wipe the page's own error message.
    let current = location.pathname().unwrap_or_default();
    let target = path.split('?').next().unwrap_or(path);
    if current == target {
        return;
    }
    log::warn!("Redirecting to {}", path);
    if let Err(e) = location.set_href(path) {
        log::error!("Redirect to {} failed: {:?}", path, e);
    }
}
