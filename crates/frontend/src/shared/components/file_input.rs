use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

/// File picker for image uploads.
///
/// `web_sys::File` is not `Send`, so the selection lives in a local
/// `StoredValue` owned by the form.
#[component]
pub fn FileInput(
    #[prop(into)]
    label: String,
    file: StoredValue<Option<File>, LocalStorage>,
    /// URL of the image already stored on the server
    #[prop(optional, into)]
    current_url: MaybeProp<String>,
    #[prop(optional)]
    accept: Option<&'static str>,
) -> impl IntoView {
    let (file_name, set_file_name) = signal(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        set_file_name.set(picked.as_ref().map(|f| f.name()));
        file.set_value(picked);
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {move || current_url.get().map(|url| view! {
                <img class="form__thumb" src=url alt="current" />
            })}
            <input type="file" accept=accept.unwrap_or("image/*") on:change=on_change />
            {move || file_name.get().map(|name| view! {
                <span class="form__hint">{name}</span>
            })}
        </div>
    }
}
