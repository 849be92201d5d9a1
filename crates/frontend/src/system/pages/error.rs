//! Landing pages for redirects: `/error`, `/forbidden` and unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::routes::admin_pages::{first_allowed_page, AdminPage, ADMIN_ROOT};
use crate::shared::api_client::ErrorReason;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

fn describe(reason: Option<ErrorReason>) -> &'static str {
    match reason {
        Some(ErrorReason::Network) => "The server could not be reached. Check your connection and try again.",
        Some(ErrorReason::Server) => "The server failed to process the request.",
        None => "Something went wrong.",
    }
}

/// Where a status page points the user back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackLink {
    Page(&'static AdminPage),
    /// Permissions not loaded; `/admin` picks the page once they are.
    Admin,
    /// The account opens no admin page at all.
    SignOut,
}

fn back_link(granted: Option<&[String]>) -> BackLink {
    match granted {
        None => BackLink::Admin,
        Some(granted) => first_allowed_page(granted)
            .map(BackLink::Page)
            .unwrap_or(BackLink::SignOut),
    }
}

#[component]
fn StatusPage(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: Signal<String>,
) -> impl IntoView {
    let auth = use_auth();
    let back = Memo::new(move |_| auth.permissions.with(|granted| back_link(granted.as_deref())));

    view! {
        <div class="status-page">
            <div class="status-page__icon">{icon("alert")}</div>
            <h1>{title}</h1>
            <p>{move || message.get()}</p>
            {move || match back.get() {
                BackLink::Page(page) => view! { <A href=page.path>"Back to " {page.label}</A> }.into_any(),
                BackLink::Admin => view! { <A href=ADMIN_ROOT>"Back to the admin"</A> }.into_any(),
                BackLink::SignOut => view! {
                    <a href="/signin" on:click=move |_| do_logout(auth)>"Sign in with another account"</a>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn ErrorPage() -> impl IntoView {
    let query = use_query_map();
    let message = Signal::derive(move || {
        let reason = query.with(|q| q.get("reason").and_then(|r| ErrorReason::parse(&r)));
        describe(reason).to_string()
    });

    view! { <StatusPage title="Error" message=message /> }
}

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <StatusPage
            title="Access denied"
            message=String::from("Your account does not have permission to open this page.")
        />
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <StatusPage title="Not found" message=String::from("This page does not exist.") /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_reason() {
        assert!(describe(Some(ErrorReason::Network)).contains("reached"));
        assert!(describe(Some(ErrorReason::Server)).contains("server"));
        assert_eq!(describe(None), "Something went wrong.");
    }

    #[test]
    fn test_back_link_never_points_at_a_denied_page() {
        use contracts::system::roles::permissions;

        let brands = vec![permissions::BRANDS.to_string()];
        match back_link(Some(brands.as_slice())) {
            BackLink::Page(page) => assert_eq!(page.path, "/admin/brands"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(back_link(None), BackLink::Admin);
        assert_eq!(back_link(Some(&[] as &[String])), BackLink::SignOut);
    }
}
