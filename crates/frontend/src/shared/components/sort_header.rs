use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Column sort state of a table.
#[derive(Clone, Copy)]
pub struct SortState {
    pub field: RwSignal<String>,
    pub ascending: RwSignal<bool>,
}

impl SortState {
    pub fn new(field: &str) -> Self {
        Self {
            field: RwSignal::new(field.to_string()),
            ascending: RwSignal::new(true),
        }
    }

    /// Same column flips the direction; a new column starts ascending.
    pub fn toggle(&self, field: &str) {
        if self.field.get_untracked() == field {
            self.ascending.update(|a| *a = !*a);
        } else {
            self.field.set(field.to_string());
            self.ascending.set(true);
        }
    }
}

#[component]
pub fn SortHeaderCell(
    label: &'static str,
    field: &'static str,
    sort: SortState,
    #[prop(optional, default = 100.0)]
    min_width: f64,
    /// `right` for numeric columns
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let class = if align == "right" {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div class=class on:click=move |_| sort.toggle(field)>
                {label}
                <span class=move || sort.field.with(|f| get_sort_class(f, field))>
                    {move || get_sort_indicator(&sort.field.get(), field, sort.ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
