use crate::domain::a005_sale_program::api;
use crate::domain::a005_sale_program::filter::ActiveFilter;
use crate::domain::a005_sale_program::ui::details::SaleProgramDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::sort_header::{SortHeaderCell, SortState};
use crate::shared::date_utils::{format_date, today};
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_text, filter_list, sort_list, Searchable, Sortable};
use crate::shared::modal_stack::use_modals;
use crate::shared::notice::use_notices;
use crate::shared::number_format::format_percent;
use contracts::domain::a005_sale_program::SaleProgram;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for SaleProgram {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.description.as_deref().unwrap_or("")]
    }
}

impl Sortable for SaleProgram {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "discount" => cmp_f64(self.discount_percent, other.discount_percent),
            "start" => self.start_date.cmp(&other.start_date),
            "end" => self.end_date.cmp(&other.end_date),
            _ => cmp_text(Some(&self.name), Some(&other.name)),
        }
    }
}

#[component]
pub fn SaleProgramList() -> impl IntoView {
    let programs: RwSignal<Vec<SaleProgram>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(ActiveFilter::All.as_str().to_string());
    let sort = SortState::new("start");
    let reload = RwSignal::new(0u32);
    let today = today();

    let modals = use_modals();
    let notices = use_notices();

    // Only the latest request may overwrite the table
    let request_seq = StoredValue::new(0u64);
    Effect::new(move |_| {
        reload.track();
        let filter = ActiveFilter::parse(&status.get());
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        loading.set(true);
        spawn_local(async move {
            let result = api::fetch_programs(filter.query_flag()).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => programs.set(data),
                Err(e) => notices.api_error("Failed to load sale programs", &e),
            }
            loading.set(false);
        });
    });

    let refresh = move || reload.update(|n| *n += 1);

    let visible = Memo::new(move |_| {
        let filter = ActiveFilter::parse(&status.get());
        let mut data: Vec<SaleProgram> = programs.with(|items| filter_list(items, &search.get()));
        data.retain(|p| filter.matches(p, today));
        sort_list(&mut data, &sort.field.get(), sort.ascending.get());
        data
    });

    let open_details = move |program: Option<SaleProgram>| {
        let title = if program.is_some() { "Edit sale program" } else { "New sale program" };
        modals.open(title, move |handle| {
            view! {
                <SaleProgramDetails
                    program=program.clone()
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

    let delete = move |program: SaleProgram| {
        if !confirm(&format!("Delete sale program \"{}\"?", program.name)) {
            return;
        }
        spawn_local(async move {
            match api::delete_program(program.id).await {
                Ok(()) => {
                    notices.success(format!("Sale program \"{}\" deleted", program.name));
                    refresh();
                }
                Err(e) => notices.api_error("Failed to delete sale program", &e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Sale programs" count=Signal::derive(move || visible.with(Vec::len))>
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
                            <Input value=search placeholder="Search by name..." />
                        </div>
                        <Select value=status>
                            {ActiveFilter::ALL.iter().map(|f| view! {
                                <option value=f.as_str()>{f.label()}</option>
                            }).collect_view()}
                        </Select>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=80.0>"Banner"</TableHeaderCell>
                                <SortHeaderCell label="Name" field="name" sort=sort min_width=200.0 />
                                <SortHeaderCell label="Discount" field="discount" sort=sort min_width=90.0 align="right" />
                                <SortHeaderCell label="Starts" field="start" sort=sort min_width=110.0 />
                                <SortHeaderCell label="Ends" field="end" sort=sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|p| (p.id, p.name.clone(), p.is_active, p.start_date, p.end_date, p.discount_percent.to_bits(), p.banner_url.clone())
                                children=move |program| {
                                    let running = program.is_running(today);
                                    let (badge, label) = if running {
                                        ("badge badge--success", "Running")
                                    } else if program.is_active {
                                        ("badge badge--info", "Scheduled")
                                    } else {
                                        ("badge badge--muted", "Inactive")
                                    };
                                    let banner = program.banner_url.clone();
                                    let name = program.name.clone();
                                    let discount = format_percent(program.discount_percent);
                                    let starts = format_date(program.start_date);
                                    let ends = format_date(program.end_date);
                                    let for_edit = program.clone();
                                    let for_delete = program;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {banner.map(|url| view! {
                                                    <img class="table__thumb table__thumb--wide" src=url alt="" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__num">{discount}</span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{starts}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{ends}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class=badge>{label}</span>
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
                    <Show when=move || !loading.get() && visible.with(Vec::is_empty)>
                        <div class="table__empty">"No sale programs found"</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
