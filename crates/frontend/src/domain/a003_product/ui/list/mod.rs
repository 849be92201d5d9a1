use crate::domain::a003_product::api;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::domain::a003_product::ui::items::ProductItems;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalSize;
use crate::shared::modal_stack::use_modals;
use crate::shared::notice::use_notices;
use crate::shared::number_format::{format_int, format_money};
use crate::shared::server_pager::ServerPager;
use contracts::domain::a003_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Products are paginated and searched by the backend.
#[component]
pub fn ProductList() -> impl IntoView {
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);
    let pager = ServerPager::new();

    let modals = use_modals();
    let notices = use_notices();

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
                    products.set(page.items);
                }
                Err(e) => notices.api_error("Failed to load products", &e),
            }
            loading.set(false);
        });
    });

    let refresh = move || reload.update(|n| *n += 1);

    let apply_search = move || {
        pager.reset();
        search.set(search_input.get_untracked());
    };

    let open_details = move |id: Option<i64>| {
        let title = if id.is_some() { "Edit product" } else { "New product" };
        modals.open_sized(title, ModalSize::Large, move |handle| {
            view! {
                <ProductDetails
                    id=id
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

    let open_items = move |product: Product| {
        modals.open_sized(
            format!("Variants of {}", product.name),
            ModalSize::Large,
            move |_| view! { <ProductItems product_id=product.id /> }.into_any(),
        );
    };

    let delete = move |product: Product| {
        if !confirm(&format!("Delete product \"{}\" and all its variants?", product.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_product(product.id).await {
                Ok(()) => {
                    notices.success(format!("Product \"{}\" deleted", product.name));
                    refresh();
                }
                Err(e) => notices.api_error("Failed to delete product", &e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Products" count=pager.total_count>
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
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=search_input placeholder="Name, brand or category..." />
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                            {icon("search")}
                            " Find"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                search_input.set(String::new());
                                apply_search();
                            }
                        >
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
                                <TableHeaderCell resizable=false min_width=60.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Name"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Brand"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Category"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Price"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Stock"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Created"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || products.get()
                                key=|p| (p.id, p.name.clone(), p.price.to_bits(), p.total_stock(), p.image_url.clone())
                                children=move |product| {
                                    let id = product.id;
                                    let thumb = product.image_url.clone();
                                    let name = product.name.clone();
                                    let brand = product.brand_label();
                                    let category = product.category_label();
                                    let price = format_money(product.price);
                                    let stock = format_int(product.total_stock());
                                    let created = format_datetime_opt(product.created_at.as_deref());
                                    let for_items = product.clone();
                                    let for_delete = product;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {thumb.map(|url| view! {
                                                    <img class="table__thumb" src=url alt="" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {brand}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{price}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{stock}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
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
                                                    on_click=move |_| open_items(for_items.clone())
                                                    attr:title="Variants"
                                                >
                                                    {icon("layers")}
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
