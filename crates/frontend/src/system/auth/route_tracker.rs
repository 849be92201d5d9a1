use contracts::system::auth::CurrentUser;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::context::use_auth;
use super::gate::{decide, permissions_fallback, GateDecision, Session};
use super::store::UserAction;
use super::storage;
use super::token::now_secs;
use crate::routes::admin_pages::required_permission;
use crate::shared::api_client::ApiClient;
use crate::shared::notice::use_notices;

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Re-validates the session on every navigation inside the admin area.
///
/// Decodes the stored token, reloads the permission set and leaves the page
/// for `/signin` or `/forbidden` when the gate says so.
#[component]
pub fn RouteTracker() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();
    let notices = use_notices();

    Effect::new(move |_| {
        let path = location.pathname.get();
        let seq = auth.next_navigation();
        let session = Session::check(storage::get_token().as_deref(), now_secs());
        log::debug!("navigation #{} to {}", seq, path);

        let claims = match &session {
            Session::Valid(claims) => claims.clone(),
            _ => {
                storage::clear_token();
                auth.reset();
                navigate("/signin", replace());
                return;
            }
        };

        auth.user
            .dispatch(UserAction::SignedIn(CurrentUser::from(&claims)));

        let navigate = navigate.clone();
        spawn_local(async move {
            match ApiClient::shared().permissions(&claims.sub).await {
                Ok(granted) => {
                    if !auth.is_latest(seq) {
                        log::debug!("navigation #{} superseded", seq);
                        return;
                    }
                    let decision = decide(&session, required_permission(&path), &granted);
                    auth.permissions.set(Some(granted));
                    if decision == GateDecision::Forbidden {
                        log::warn!("{} denied for user {}", path, claims.sub);
                        navigate("/forbidden", replace());
                    }
                }
                Err(e) => {
                    if !auth.is_latest(seq) {
                        return;
                    }
                    match permissions_fallback(&e) {
                        Some(path) => {
                            // An empty set ends the guards' loading state
                            auth.permissions.set(Some(Vec::new()));
                            notices.api_error("Failed to load permissions", &e);
                            navigate(path, replace());
                        }
                        None => log::error!("Failed to load permissions: {}", e),
                    }
                }
            }
        });
    });
}
