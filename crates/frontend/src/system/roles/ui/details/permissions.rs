use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use crate::system::roles::api;
use crate::system::roles::claims::{initial_selection, ordered, permission_label, toggle};
use contracts::system::roles::{permissions, Role};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Claims editor: one checkbox per known permission.
#[component]
pub fn RolePermissions(role: Role, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let notices = use_notices();
    let initial = initial_selection(&role);
    let boxes: Vec<(&'static str, RwSignal<bool>)> = permissions::ALL
        .iter()
        .map(|p| (*p, RwSignal::new(initial.iter().any(|v| v == p))))
        .collect();
    let boxes = StoredValue::new(boxes);
    let initial = StoredValue::new(initial);
    let role_id = role.id.clone();
    let role_name = role.name.clone();
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let save = move |_| {
        let mut selected = initial.get_value();
        boxes.with_value(|boxes| {
            for (value, checked) in boxes {
                toggle(&mut selected, value, checked.get_untracked());
            }
        });
        let selected = ordered(&selected);
        let id = role_id.clone();
        let name = role_name.clone();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::update_permissions(&id, selected).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    notices.success(format!("Permissions of \"{}\" saved", name));
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-form">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="permission-grid">
                {boxes.get_value().into_iter().map(|(value, checked)| view! {
                    <div class="permission-grid__item">
                        <Checkbox checked=checked label=permission_label(value) />
                        <span class="form__hint">{value}</span>
                    </div>
                }).collect_view()}
            </div>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=saving>
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </div>
        </div>
    }
}
