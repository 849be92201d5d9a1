use crate::domain::a004_order::api;
use crate::domain::a004_order::status::{badge_class, next_statuses, totals, LineRow};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use crate::shared::number_format::format_money;
use contracts::domain::a004_order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Order lines, totals and the status control.
#[component]
pub fn OrderDetails(id: i64, on_changed: Callback<()>) -> impl IntoView {
    let notices = use_notices();
    let order: RwSignal<Option<Order>> = RwSignal::new(None);
    let error = RwSignal::new(None::<String>);
    let next_status = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let load = move || {
        spawn_local(async move {
            match api::fetch_order(id).await {
                Ok(o) => {
                    next_status.set(String::new());
                    order.set(Some(o));
                }
                Err(e) => error.set(Some(format!("Failed to load order: {}", e))),
            }
        });
    };
    load();

    let apply_status = move |_| {
        let Some(status) = OrderStatus::parse(&next_status.get_untracked()) else {
            error.set(Some("Select a new status".to_string()));
            return;
        };
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::update_status(id, status).await {
                Ok(()) => {
                    notices.success(format!("Order #{} is now {}", id, status.as_str()));
                    load();
                    on_changed.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="order-details">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || order.get().map(|o| {
                let sums = totals(&o);
                let options = next_statuses(o.status);
                let has_options = !options.is_empty();
                let lines: Vec<LineRow> = o.items.iter().map(LineRow::from).collect();
                view! {
                    <div class="order-details__summary">
                        <div>
                            <div class="order-details__label">"Customer"</div>
                            <div>{o.customer_name.clone()}</div>
                            <div class="form__hint">{o.email.clone().unwrap_or_default()}</div>
                            <div class="form__hint">{o.phone.clone().unwrap_or_default()}</div>
                        </div>
                        <div>
                            <div class="order-details__label">"Shipping address"</div>
                            <div>{o.shipping_address.clone().unwrap_or_else(|| "-".to_string())}</div>
                        </div>
                        <div>
                            <div class="order-details__label">"Placed"</div>
                            <div>{format_datetime(&o.created_at)}</div>
                            <span class=badge_class(o.status)>{o.status.as_str()}</span>
                        </div>
                    </div>

                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Qty"</TableHeaderCell>
                                <TableHeaderCell>"Unit price"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {lines.into_iter().map(|line| view! {
                                <TableRow>
                                    <TableCell>{line.product}</TableCell>
                                    <TableCell>{line.sku}</TableCell>
                                    <TableCell>{line.quantity}</TableCell>
                                    <TableCell>{line.unit_price}</TableCell>
                                    <TableCell>{line.total}</TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>

                    <div class="order-details__totals">
                        <div>"Subtotal: " {format_money(sums.subtotal)}</div>
                        {(sums.discount > 0.0).then(|| view! {
                            <div>"Discount: -" {format_money(sums.discount)}</div>
                        })}
                        <div class="order-details__total">"Total: " {format_money(sums.total)}</div>
                    </div>

                    {if has_options {
                        view! {
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <Select value=next_status>
                                    <option value="">"Change status to..."</option>
                                    {options.iter().map(|s| view! {
                                        <option value=s.as_str()>{s.as_str()}</option>
                                    }).collect_view()}
                                </Select>
                                <Button appearance=ButtonAppearance::Primary on_click=apply_status disabled=saving>
                                    {icon("save")}
                                    " Apply"
                                </Button>
                            </Flex>
                        }.into_any()
                    } else {
                        view! { <div class="form__hint">"This order is closed."</div> }.into_any()
                    }}
                }
            })}
        </div>
    }
}
