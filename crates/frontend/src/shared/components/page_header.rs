use leptos::prelude::*;
use thaw::*;

/// Header row of a list page: title, item count and action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Item count shown in a badge next to the title
    #[prop(optional, into)]
    count: Option<Signal<usize>>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {count.map(|c| view! { <Badge>{move || c.get().to_string()}</Badge> })}
            </div>
            <div class="page__header-right">
                {children()}
            </div>
        </div>
    }
}
