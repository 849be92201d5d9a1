//! Top bar: sidebar toggle, application title, signed-in user and logout.

use crate::layout::LayoutState;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn TopHeader() -> impl IntoView {
    let layout = use_context::<LayoutState>().expect("LayoutState not found");
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(auth);
        navigate("/signin", NavigateOptions::default());
    };

    let user_label = move || {
        auth.user
            .current()
            .map(|u| u.name)
            .unwrap_or_else(|| "Guest".to_string())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| layout.toggle_sidebar()
                    title=move || if layout.sidebar_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("layers")}
                </button>
                <span class="top-header__title">"Shop Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user" title=move || auth.user.current().map(|u| u.email).unwrap_or_default()>
                    {icon("user")}
                    <span>{user_label}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
