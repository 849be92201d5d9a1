use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    icon_name: &'static str,
    /// Formatted value; `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional, into)]
    hint: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "…".to_string())}
                </div>
                {move || hint.get().map(|h| view! { <div class="stat-card__hint">{h}</div> })}
            </div>
        </div>
    }
}
