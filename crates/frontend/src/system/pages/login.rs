use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::routes::admin_pages::ADMIN_ROOT;
use crate::system::auth::context::{do_login, use_auth};

/// Required-field check run before posting the credentials.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let auth = use_auth();
    let navigate = use_navigate();

    // A still-valid session skips the form
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if auth.user.is_signed_in() {
                navigate(ADMIN_ROOT, NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        if let Err(msg) = validate_credentials(&email_val, &password_val) {
            error_message.set(Some(msg.to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match do_login(auth, email_val.trim().to_string(), password_val).await {
                Ok(()) => {
                    password.set(String::new());
                    navigate(ADMIN_ROOT, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("Sign-in failed: {}", e);
                    error_message.set(Some(format!("Sign-in failed: {}", e)));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Shop Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("admin@shop.test", "secret").is_ok());
        assert!(validate_credentials("  ", "secret").is_err());
        assert!(validate_credentials("admin@shop.test", "").is_err());
        assert_eq!(
            validate_credentials("admin", "secret"),
            Err("Enter a valid email address")
        );
    }
}
