use leptos::prelude::*;
use thaw::*;

use super::context::use_auth;

/// Renders `children` only when the signed-in user holds `permission`.
/// Shows a spinner while permissions load.
#[component]
pub fn RequirePermission(permission: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    // Memo: permission reloads on navigation must not re-create the page.
    let state = Memo::new(move |_| auth.allows(permission));

    view! {
        <Show
            when=move || state.get() == Some(true)
            fallback=move || match state.get() {
                None => view! { <div class="page-loading"><Spinner /></div> }.into_any(),
                Some(_) => view! {
                    <div class="alert alert--error">"Access denied. Missing permission: " {permission}</div>
                }.into_any(),
            }
        >
            {children()}
        </Show>
    }
}
