//! Sidebar navigation built from the admin page table.

use crate::routes::admin_pages::ADMIN_PAGES;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;

    view! {
        <nav class="app-sidebar__content">
            {ADMIN_PAGES.iter().map(|page| {
                let path = page.path;
                // Entries stay visible while permissions load
                let visible = move || auth.allows(page.permission) != Some(false);
                let active = move || pathname.get().starts_with(path);
                view! {
                    <Show when=visible>
                        <A href=path attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=active
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(page.icon)}
                                    <span>{page.label}</span>
                                </div>
                            </div>
                        </A>
                    </Show>
                }
            }).collect_view()}
        </nav>
    }
}
