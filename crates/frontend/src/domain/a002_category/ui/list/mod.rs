use crate::domain::a002_category::api;
use crate::domain::a002_category::tree::{flatten, CategoryRow};
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, paginate, PageSlice, Searchable};
use crate::shared::modal_stack::use_modals;
use crate::shared::notice::use_notices;
use contracts::domain::a002_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for CategoryRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.category.name,
            self.category.description.as_deref().unwrap_or(""),
        ]
    }
}

/// Tree order is kept; there is no column sorting on this page.
#[component]
pub fn CategoryList() -> impl IntoView {
    let tree: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(PAGE_SIZE_OPTIONS[1]);

    let modals = use_modals();
    let notices = use_notices();

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_tree().await {
                Ok(data) => tree.set(data),
                Err(e) => notices.api_error("Failed to load categories", &e),
            }
            loading.set(false);
        });
    };
    load();

    Effect::new(move |_| {
        search.track();
        page.set(0);
    });

    let rows = Memo::new(move |_| tree.with(|t| flatten(t)));
    let view_slice: Memo<PageSlice<CategoryRow>> = Memo::new(move |_| {
        let filtered = rows.with(|r| filter_list(r, &search.get()));
        paginate(&filtered, page.get(), page_size.get())
    });

    let open_details = move |category: Option<Category>| {
        let title = if category.is_some() { "Edit category" } else { "New category" };
        modals.open(title, move |handle| {
            view! {
                <CategoryDetails
                    category=category.clone()
                    tree=tree.get_untracked()
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

    let delete = move |category: Category| {
        let warning = if rows.with_untracked(|r| r.iter().any(|row| row.category.parent_id == Some(category.id))) {
            format!("Delete category \"{}\"? Its subcategories are affected too.", category.name)
        } else {
            format!("Delete category \"{}\"?", category.name)
        };
        if !confirm(&warning) {
            return;
        }
        spawn_local(async move {
            match api::delete_category(category.id).await {
                Ok(()) => {
                    notices.success(format!("Category \"{}\" deleted", category.name));
                    load();
                }
                Err(e) => notices.api_error("Failed to delete category", &e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Categories" count=Signal::derive(move || rows.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                    {icon("plus")}
                    " New"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=search placeholder="Search categories..." />
                    </div>
                    <PaginationControls
                        current_page=Signal::derive(move || view_slice.with(|s| s.page))
                        total_pages=Signal::derive(move || view_slice.with(|s| s.total_pages))
                        total_count=Signal::derive(move || view_slice.with(|s| s.total_count))
                        page_size=page_size
                        on_page_change=Callback::new(move |p| page.set(p))
                        on_page_size_change=Callback::new(move |size| {
                            page_size.set(size);
                            page.set(0);
                        })
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=240.0>"Name"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Description"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Subcategories"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || view_slice.get().items
                                key=|row| (
                                    row.category.id,
                                    row.category.name.clone(),
                                    row.category.description.clone(),
                                    row.depth,
                                    row.child_count,
                                )
                                children=move |row| {
                                    let for_edit = row.category.clone();
                                    let for_delete = row.category.clone();
                                    let indent = format!("padding-left: {}px;", row.depth * 20);
                                    let has_children = row.child_count > 0;
                                    let children_count = row.child_count.to_string();
                                    let name = row.category.name.clone();
                                    let description = row.category.description.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style=indent>
                                                        {if has_children { icon("folder") } else { icon("layers") }}
                                                        " "
                                                        {name}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {description}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{children_count}</TableCellLayout>
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
                </div>
            </div>
        </div>
    }
}
