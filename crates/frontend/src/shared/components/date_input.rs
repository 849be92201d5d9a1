use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::date_utils::{parse_input_date, to_input_date};

/// DateInput component with native date picker
#[component]
pub fn DateInput(
    #[prop(into)]
    label: String,
    value: RwSignal<Option<NaiveDate>>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="date"
                class="form__input form__input--date"
                prop:value=move || value.get().map(to_input_date).unwrap_or_default()
                on:input=move |ev| value.set(parse_input_date(&event_target_value(&ev)))
            />
        </div>
    }
}
