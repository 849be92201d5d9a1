//! Current-user store
//!
//! A single slice holding the identity decoded from the token. It changes
//! only through [`UserAction`]s: `SignedIn` on login or token decode,
//! `SignedOut` on logout or an expired session.

use contracts::system::auth::CurrentUser;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    SignedIn(CurrentUser),
    SignedOut,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub current: Option<CurrentUser>,
}

impl UserState {
    pub fn reduce(self, action: UserAction) -> Self {
        match action {
            UserAction::SignedIn(user) => Self {
                current: Some(user),
            },
            UserAction::SignedOut => Self::default(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct UserStore {
    state: RwSignal<UserState>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(UserState::default()),
        }
    }

    pub fn dispatch(&self, action: UserAction) {
        // Re-decoding the same token on every navigation is a no-op.
        let unchanged = self.state.with_untracked(|s| match &action {
            UserAction::SignedIn(user) => s.current.as_ref() == Some(user),
            UserAction::SignedOut => s.current.is_none(),
        });
        if unchanged {
            return;
        }
        log::debug!("user store: {:?}", action);
        self.state.update(|s| *s = std::mem::take(s).reduce(action));
    }

    pub fn current(&self) -> Option<CurrentUser> {
        self.state.with(|s| s.current.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.with(|s| s.current.is_some())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_user_store() -> UserStore {
    use_context::<UserStore>().expect("UserStore not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> CurrentUser {
        CurrentUser {
            id: "1".into(),
            email: "ann@shop.io".into(),
            name: "Ann".into(),
        }
    }

    #[test]
    fn test_sign_in_then_out() {
        let state = UserState::default().reduce(UserAction::SignedIn(ann()));
        assert_eq!(state.current, Some(ann()));
        let state = state.reduce(UserAction::SignedOut);
        assert_eq!(state, UserState::default());
    }

    #[test]
    fn test_sign_in_replaces_previous_user() {
        let bob = CurrentUser {
            id: "2".into(),
            email: "bob@shop.io".into(),
            name: "Bob".into(),
        };
        let state = UserState::default()
            .reduce(UserAction::SignedIn(ann()))
            .reduce(UserAction::SignedIn(bob.clone()));
        assert_eq!(state.current, Some(bob));
    }
}
