use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modals;
use crate::shared::notice::use_notices;
use crate::shared::server_pager::ServerPager;
use crate::system::auth::context::use_auth;
use crate::system::users::api;
use crate::system::users::ui::details::{UserDetails, UserRoles};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn UserList() -> impl IntoView {
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);
    let pager = ServerPager::new();

    let modals = use_modals();
    let notices = use_notices();
    let auth = use_auth();
    let is_self = move |id: &str| {
        auth.user
            .current()
            .is_some_and(|current| current.id == id)
    };

    Effect::new(move |_| {
        reload.track();
        let query = pager.query().with_search(&search.get());
        let seq = pager.begin();
        loading.set(true);
        spawn_local(async move {
            let result = api::fetch_page(&query).await;
            if !pager.is_current(seq) {
                return;
            }
            match result {
                Ok(page) => {
                    pager.apply(&page.meta);
                    users.set(page.items);
                }
                Err(e) => notices.api_error("Failed to load users", &e),
            }
            loading.set(false);
        });
    });

    let refresh = move || reload.update(|n| *n += 1);

    let apply_search = move || {
        pager.reset();
        search.set(search_input.get_untracked());
    };

    let reset_search = move || {
        search_input.set(String::new());
        pager.reset();
        search.set(String::new());
    };

    let open_details = move |user: Option<User>| {
        let title = match &user {
            Some(u) => format!("Edit {}", u.email),
            None => "New user".to_string(),
        };
        modals.open(title, move |handle| {
            view! {
                <UserDetails
                    user=user.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        refresh();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let open_roles = move |user: User| {
        modals.open(format!("Roles of {}", user.email), move |handle| {
            view! {
                <UserRoles
                    user=user.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        refresh();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let toggle_lock = move |user: User| {
        let lock = !user.is_locked;
        let verb = if lock { "Lock" } else { "Unlock" };
        if !confirm(&format!("{} {}?", verb, user.email)) {
            return;
        }
        spawn_local(async move {
            match api::set_locked(&user.id, lock).await {
                Ok(()) => {
                    notices.success(format!("{} {}ed", user.email, verb.to_lowercase()));
                    refresh();
                }
                Err(e) => notices.api_error(&format!("Failed to {} user", verb.to_lowercase()), &e),
            }
        });
    };

    let delete = move |user: User| {
        if !confirm(&format!("Delete user {}?", user.email)) {
            return;
        }
        spawn_local(async move {
            match api::delete_user(&user.id).await {
                Ok(()) => {
                    notices.success(format!("User {} deleted", user.email));
                    refresh();
                }
                Err(e) => notices.api_error("Failed to delete user", &e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Users" count=pager.total_count>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                    {icon("plus")}
                    " New"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh() disabled=loading>
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 280px;">
                            <Input value=search_input placeholder="Email or name..." />
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                            {icon("search")}
                            " Find"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset_search()>
                            "Reset"
                        </Button>
                    </Flex>
                    <PaginationControls
                        current_page=pager.page
                        total_pages=pager.total_pages
                        total_count=pager.total_count
                        page_size=pager.page_size
                        on_page_change=Callback::new(move |p| pager.page.set(p))
                        on_page_size_change=Callback::new(move |size| pager.set_page_size(size))
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=200.0>"Email"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Name"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Phone"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Roles"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Created"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || users.get()
                                key=|u| (u.id.clone(), u.is_locked, u.roles.clone(), u.full_name.clone(), u.phone_number.clone())
                                children=move |user| {
                                    let own = is_self(&user.id);
                                    let locked = user.is_locked;
                                    let for_edit = user.clone();
                                    let for_roles = user.clone();
                                    let for_lock = user.clone();
                                    let email = user.email.clone();
                                    let full_name = user.full_name.clone().unwrap_or_default();
                                    let phone = user.phone_number.clone().unwrap_or_default();
                                    let roles = user.roles.clone();
                                    let created = format_datetime_opt(user.created_at.as_deref());
                                    let for_delete = user;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{email}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {full_name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{phone}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="badge-list">
                                                    {roles.into_iter().map(|r| view! {
                                                        <span class="badge badge--info">{r}</span>
                                                    }).collect_view()}
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                <span class=if locked { "badge badge--danger" } else { "badge badge--success" }>
                                                    {if locked { "Locked" } else { "Active" }}
                                                </span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_details(Some(for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_roles(for_roles.clone())
                                                    attr:title="Roles"
                                                >
                                                    {icon("shield")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| toggle_lock(for_lock.clone())
                                                    disabled=own
                                                    attr:title=if locked { "Unlock" } else { "Lock" }
                                                >
                                                    {icon(if locked { "unlock" } else { "lock" })}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete(for_delete.clone())
                                                    disabled=own
                                                    attr:title="Delete"
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && users.with(Vec::is_empty)>
                        <div class="table__empty">"No users found"</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
