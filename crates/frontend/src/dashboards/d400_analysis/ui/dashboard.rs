use crate::dashboards::d400_analysis::api;
use crate::dashboards::d400_analysis::chart::{daily_bars, nice_max, Bar};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, last_days, today};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_int, format_money};
use contracts::dashboards::d400_analysis::{AnalysisRange, RevenuePoint, SalesSummary, TopProduct};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const PRESETS: [(i64, &str); 3] = [(7, "7 days"), (30, "30 days"), (90, "90 days")];

#[component]
pub fn AnalysisDashboard() -> impl IntoView {
    let (initial_from, initial_to) = last_days(today(), 30);
    let from = RwSignal::new(Some(initial_from));
    let to = RwSignal::new(Some(initial_to));

    let summary = RwSignal::new(None::<SalesSummary>);
    let revenue: RwSignal<Vec<RevenuePoint>> = RwSignal::new(Vec::new());
    let top_products: RwSignal<Vec<TopProduct>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let request_seq = StoredValue::new(0u64);

    let range = Memo::new(move |_| match (from.get(), to.get()) {
        (Some(from), Some(to)) if from <= to => Some(AnalysisRange { from, to }),
        _ => None,
    });

    Effect::new(move |_| {
        let Some(range) = range.get() else {
            error.set(Some("Pick a valid date range".to_string()));
            return;
        };
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        loading.set(true);
        error.set(None);
        summary.set(None);

        spawn_local(async move {
            let (summary_res, revenue_res, top_res) = futures::join!(
                api::fetch_summary(range),
                api::fetch_revenue(range),
                api::fetch_top_products(range)
            );
            if request_seq.get_value() != seq {
                return;
            }
            match (summary_res, revenue_res, top_res) {
                (Ok(s), Ok(r), Ok(t)) => {
                    summary.set(Some(s));
                    revenue.set(r);
                    top_products.set(t);
                }
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    log::error!("Failed to load analysis: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let bars = Memo::new(move |_| match range.get() {
        Some(r) => revenue.with(|points| daily_bars(points, r.from, r.to)),
        None => Vec::new(),
    });
    let axis_max = Memo::new(move |_| {
        nice_max(bars.with(|b| b.iter().map(|bar| bar.value).fold(0.0, f64::max)))
    });

    let apply_preset = move |days: i64| {
        let (start, end) = last_days(today(), days);
        from.set(Some(start));
        to.set(Some(end));
    };

    let stat = move |f: fn(&SalesSummary) -> String| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(f)))
    };

    view! {
        <div class="page">
            <PageHeader title="Analysis">
                {move || loading.get().then(|| view! { <Spinner /> })}
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <DateInput label="From" value=from />
                        <DateInput label="To" value=to />
                        {PRESETS.into_iter().map(|(days, label)| view! {
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| apply_preset(days)>
                                {label}
                            </Button>
                        }).collect_view()}
                    </Flex>
                </div>

                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard label="Revenue" icon_name="bar-chart" value=stat(|s| format_money(s.total_revenue)) />
                    <StatCard label="Orders" icon_name="shopping-cart" value=stat(|s| format_int(s.total_orders)) />
                    <StatCard
                        label="Average order"
                        icon_name="tag"
                        value=stat(|s| format_money(s.average_order_value()))
                    />
                    <StatCard label="Products sold" icon_name="package" value=stat(|s| format_int(s.products_sold)) />
                    <StatCard label="New customers" icon_name="users" value=stat(|s| format_int(s.new_users)) />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Daily revenue"</h3>
                        <span class="form__hint">
                            {move || range.get().map(|r| format!("{} - {}", format_date(r.from), format_date(r.to)))}
                        </span>
                    </div>
                    <div class="bar-chart">
                        <div class="bar-chart__axis">
                            <span>{move || format_money(axis_max.get())}</span>
                            <span>{move || format_money(axis_max.get() / 2.0)}</span>
                            <span>"0"</span>
                        </div>
                        <div class="bar-chart__bars">
                            <For
                                each=move || bars.get()
                                key=|bar| (bar.date, bar.value.to_bits())
                                children=move |bar: Bar| {
                                    let title = format!(
                                        "{}: {} ({} orders)",
                                        format_date(bar.date),
                                        format_money(bar.value),
                                        bar.orders
                                    );
                                    let date = bar.date;
                                    let value = bar.value;
                                    // Re-scaled against the rounded axis, not the raw maximum
                                    let height = move || {
                                        let max = axis_max.get();
                                        if max > 0.0 { value / max * 100.0 } else { bar.height_percent }
                                    };
                                    view! {
                                        <div class="bar-chart__slot" title=title>
                                            <div
                                                class="bar-chart__bar"
                                                style:height=move || format!("{:.1}%", height())
                                            ></div>
                                            <div class="bar-chart__label">{date.format("%d.%m").to_string()}</div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">{icon("package")} " Top products"</h3>
                    </div>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>"#"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Product"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Sold"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Revenue"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || top_products.get().into_iter().enumerate().map(|(i, p)| view! {
                                <TableRow>
                                    <TableCell>{i + 1}</TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{p.product_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <span class="table__num">{format_int(p.quantity_sold)}</span>
                                    </TableCell>
                                    <TableCell>
                                        <span class="table__num">{format_money(p.revenue)}</span>
                                    </TableCell>
                                </TableRow>
                            }).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || !loading.get() && top_products.with(Vec::is_empty)>
                        <div class="table__empty">"No sales in this period"</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
