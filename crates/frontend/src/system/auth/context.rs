use contracts::system::auth::CurrentUser;
use leptos::prelude::*;

use super::gate::{has_permission, Session};
use super::store::{UserAction, UserStore};
use super::token::{decode_claims, now_secs};
use super::storage;
use crate::shared::api_client::{ApiClient, ApiError, ApiResult};

/// Auth state shared through context: the current-user store plus the
/// permission set of the signed-in user.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: UserStore,
    /// `None` until loaded for the current navigation.
    pub permissions: RwSignal<Option<Vec<String>>>,
    nav_seq: StoredValue<u64>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            user: UserStore::new(),
            permissions: RwSignal::new(None),
            nav_seq: StoredValue::new(0),
        }
    }

    /// Starts a navigation and returns its sequence number.
    pub fn next_navigation(&self) -> u64 {
        self.nav_seq.update_value(|seq| *seq += 1);
        self.nav_seq.get_value()
    }

    /// Results of older navigations are dropped.
    pub fn is_latest(&self, seq: u64) -> bool {
        self.nav_seq.get_value() == seq
    }

    /// `None` while permissions are loading.
    pub fn allows(&self, required: &str) -> Option<bool> {
        self.permissions
            .with(|granted| granted.as_ref().map(|g| has_permission(g, required)))
    }

    pub fn reset(&self) {
        self.permissions.set(None);
        self.user.dispatch(UserAction::SignedOut);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = AuthContext::new();

    // Restore the identity from a token left by a previous visit
    match Session::check(storage::get_token().as_deref(), now_secs()) {
        Session::Valid(claims) => ctx
            .user
            .dispatch(UserAction::SignedIn(CurrentUser::from(&claims))),
        Session::Missing => {}
        Session::Expired | Session::Invalid => storage::clear_token(),
    }

    provide_context(ctx);
    provide_context(ctx.user);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

/// Helper: Perform login
pub async fn do_login(ctx: AuthContext, email: String, password: String) -> ApiResult<()> {
    let token = ApiClient::shared().sign_in(&email, &password).await?;
    match decode_claims(&token) {
        Ok(claims) => {
            ctx.permissions.set(None);
            ctx.user
                .dispatch(UserAction::SignedIn(CurrentUser::from(&claims)));
            log::info!("Signed in as {}", claims.sub);
            Ok(())
        }
        Err(e) => {
            storage::clear_token();
            Err(ApiError::Decode(e.to_string()))
        }
    }
}

/// Helper: Perform logout
pub fn do_logout(ctx: AuthContext) {
    ApiClient::shared().sign_out();
    ctx.reset();
    log::info!("Signed out");
}
