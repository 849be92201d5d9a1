use crate::domain::a004_order::api;
use crate::domain::a004_order::status::{badge_class, can_delete};
use crate::domain::a004_order::ui::details::OrderDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalSize;
use crate::shared::modal_stack::use_modals;
use crate::shared::notice::use_notices;
use crate::shared::number_format::{format_int, format_money};
use crate::shared::server_pager::ServerPager;
use contracts::domain::a004_order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    // Raw `<select>` value; empty means every status
    let status_filter = RwSignal::new(String::new());
    let reload = RwSignal::new(0u32);
    let pager = ServerPager::new();

    let modals = use_modals();
    let notices = use_notices();

    // A new status filter starts from the first page
    Effect::new(move |prev: Option<String>| {
        let status = status_filter.get();
        if prev.is_some_and(|p| p != status) {
            pager.reset();
        }
        status
    });

    Effect::new(move |_| {
        reload.track();
        let query = pager
            .query()
            .with_search(&search.get())
            .with_status(Some(status_filter.get()));
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
                    orders.set(page.items);
                }
                Err(e) => notices.api_error("Failed to load orders", &e),
            }
            loading.set(false);
        });
    });

    let refresh = move || reload.update(|n| *n += 1);

    let apply_search = move || {
        pager.reset();
        search.set(search_input.get_untracked());
    };

    let open_details = move |id: i64| {
        modals.open_sized(format!("Order #{}", id), ModalSize::Large, move |_| {
            view! { <OrderDetails id=id on_changed=Callback::new(move |_| refresh()) /> }.into_any()
        });
    };

    let delete = move |order: Order| {
        if !confirm(&format!("Delete order #{} of {}?", order.id, order.customer_name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_order(order.id).await {
                Ok(()) => {
                    notices.success(format!("Order #{} deleted", order.id));
                    refresh();
                }
                Err(e) => notices.api_error("Failed to delete order", &e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Orders" count=pager.total_count>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh() disabled=loading>
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 280px;">
                            <Input value=search_input placeholder="Customer, email or order #..." />
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                            {icon("search")}
                            " Find"
                        </Button>
                        <Select value=status_filter>
                            <option value="">"All statuses"</option>
                            {OrderStatus::ALL.iter().map(|s| view! {
                                <option value=s.as_str()>{s.as_str()}</option>
                            }).collect_view()}
                        </Select>
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
                                <TableHeaderCell resizable=false min_width=70.0>"#"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Placed"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=70.0>"Items"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Total"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || orders.get()
                                key=|o| (o.id, o.status, o.total_price.to_bits())
                                children=move |order| {
                                    let id = order.id;
                                    let status = order.status;
                                    let deletable = can_delete(status);
                                    let customer = order.customer_name.clone();
                                    let email = order.email.clone().unwrap_or_default();
                                    let placed = format_datetime(&order.created_at);
                                    let items = format_int(order.item_count());
                                    let total = format_money(order.total_price);
                                    let for_delete = order;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{format!("#{}", id)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{customer}</span>
                                                    <span class="form__hint">" " {email}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{placed}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{items}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class=badge_class(status)>{status.as_str()}</span>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_details(id)
                                                    attr:title="Details"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                {deletable.then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete(for_delete.clone())
                                                        attr:title="Delete"
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                })}
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
