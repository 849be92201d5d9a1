use crate::domain::a001_brand::api;
use crate::domain::a001_brand::ui::details::BrandDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sort_header::{SortHeaderCell, SortState};
use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_text, filter_list, paginate, sort_list, PageSlice, Searchable, Sortable,
};
use crate::shared::modal_stack::use_modals;
use crate::shared::notice::use_notices;
use contracts::domain::a001_brand::Brand;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for Brand {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.description.as_deref().unwrap_or("")]
    }
}

impl Sortable for Brand {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "description" => cmp_text(self.description.as_deref(), other.description.as_deref()),
            _ => cmp_text(Some(&self.name), Some(&other.name)),
        }
    }
}

#[component]
pub fn BrandList() -> impl IntoView {
    let all_brands: RwSignal<Vec<Brand>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let sort = SortState::new("name");
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(PAGE_SIZE_OPTIONS[0]);

    let modals = use_modals();
    let notices = use_notices();

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match api::fetch_brands().await {
                Ok(data) => all_brands.set(data),
                Err(e) => notices.api_error("Failed to load brands", &e),
            }
            loading.set(false);
        });
    };
    load();

    // A new query starts from the first page
    Effect::new(move |_| {
        search.track();
        page.set(0);
    });

    let view_slice: Memo<PageSlice<Brand>> = Memo::new(move |_| {
        let mut data = all_brands.with(|items| filter_list(items, &search.get()));
        sort_list(&mut data, &sort.field.get(), sort.ascending.get());
        paginate(&data, page.get(), page_size.get())
    });

    let open_details = move |id: Option<i64>| {
        let title = if id.is_some() { "Edit brand" } else { "New brand" };
        modals.open(title, move |handle| {
            view! {
                <BrandDetails
                    id=id
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

    let delete = move |brand: Brand| {
        if !confirm(&format!("Delete brand \"{}\"?", brand.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_brand(brand.id).await {
                Ok(()) => {
                    notices.success(format!("Brand \"{}\" deleted", brand.name));
                    load();
                }
                Err(e) => notices.api_error("Failed to delete brand", &e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Brands" count=Signal::derive(move || all_brands.with(Vec::len))>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                    {icon("plus")}
                    " New"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=search placeholder="Search by name or description..." />
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
                                <TableHeaderCell resizable=false min_width=60.0>"Logo"</TableHeaderCell>
                                <SortHeaderCell label="Name" field="name" sort=sort min_width=180.0 />
                                <SortHeaderCell label="Description" field="description" sort=sort min_width=240.0 />
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || view_slice.get().items
                                key=|b| (b.id, b.name.clone(), b.description.clone(), b.logo_url.clone())
                                children=move |brand| {
                                    let id = brand.id;
                                    let for_delete = brand.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {brand.logo_url.clone().map(|url| view! {
                                                    <img class="table__thumb" src=url alt="" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{brand.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {brand.description.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_details(Some(id))
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
                    <Show when=move || !loading.get() && view_slice.with(|s| s.items.is_empty())>
                        <div class="table__empty">"No brands found"</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
