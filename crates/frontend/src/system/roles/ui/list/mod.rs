use crate::shared::components::page_header::PageHeader;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, Searchable};
use crate::shared::modal_stack::use_modals;
use crate::shared::notice::use_notices;
use crate::system::roles::api;
use crate::system::roles::claims::permission_label;
use crate::system::roles::ui::details::{RoleDetails, RolePermissions};
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for Role {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.description.as_deref().unwrap_or("")]
    }
}

#[component]
pub fn RoleList() -> impl IntoView {
    let roles: RwSignal<Vec<Role>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    let modals = use_modals();
    let notices = use_notices();

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_roles().await {
                Ok(mut data) => {
                    data.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                    roles.set(data);
                }
                Err(e) => notices.api_error("Failed to load roles", &e),
            }
            loading.set(false);
        });
    };
    load();

    let visible = Memo::new(move |_| roles.with(|items| filter_list(items, &search.get())));

    let open_details = move |role: Option<Role>| {
        let title = if role.is_some() { "Edit role" } else { "New role" };
        modals.open(title, move |handle| {
            view! {
                <RoleDetails
                    role=role.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        load();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let open_permissions = move |role: Role| {
        modals.open(format!("Permissions: {}", role.name), move |handle| {
            view! {
                <RolePermissions
                    role=role.clone()
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        load();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let delete = move |role: Role| {
        if !confirm(&format!("Delete role \"{}\"? Users lose its permissions.", role.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_role(&role.id).await {
                Ok(()) => {
                    notices.success(format!("Role \"{}\" deleted", role.name));
                    load();
                }
                Err(e) => notices.api_error("Failed to delete role", &e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Roles" count=Signal::derive(move || roles.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                    {icon("plus")}
                    " New"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=search placeholder="Search roles..." />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=160.0>"Name"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Description"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=260.0>"Permissions"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|r| (r.id.clone(), r.name.clone(), r.description.clone(), r.claims.len())
                                children=move |role| {
                                    let granted: Vec<String> = role.permissions().map(permission_label).collect();
                                    let for_edit = role.clone();
                                    let for_claims = role.clone();
                                    let name = role.name.clone();
                                    let description = role.description.clone().unwrap_or_default();
                                    let for_delete = role;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {description}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="badge-list">
                                                    {granted.into_iter().map(|label| view! {
                                                        <span class="badge badge--info">{label}</span>
                                                    }).collect_view()}
                                                </div>
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
                                                    on_click=move |_| open_permissions(for_claims.clone())
                                                    attr:title="Permissions"
                                                >
                                                    {icon("key")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete(for_delete.clone())
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
                    <Show when=move || !loading.get() && visible.with(Vec::is_empty)>
                        <div class="table__empty">"No roles found"</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
