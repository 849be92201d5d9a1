use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use crate::system::roles;
use crate::system::users::api;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Role assignment dialog: one checkbox per role known to the backend.
#[component]
pub fn UserRoles(user: User, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let notices = use_notices();
    let boxes: RwSignal<Vec<(String, RwSignal<bool>)>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let assigned = StoredValue::new(user.roles.clone());
    let user_id = user.id.clone();
    let email = user.email.clone();

    spawn_local(async move {
        match roles::api::fetch_roles().await {
            Ok(all) => {
                let current = assigned.get_value();
                boxes.set(
                    all.into_iter()
                        .map(|r| {
                            let on = current.iter().any(|name| name == &r.name);
                            (r.name, RwSignal::new(on))
                        })
                        .collect(),
                );
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        loading.set(false);
    });

    let save = move |_| {
        let selected: Vec<String> = boxes.with_untracked(|boxes| {
            boxes
                .iter()
                .filter(|(_, on)| on.get_untracked())
                .map(|(name, _)| name.clone())
                .collect()
        });
        let id = user_id.clone();
        let email = email.clone();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::set_roles(&id, selected).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    notices.success(format!("Roles of {} updated", email));
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-form">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || if loading.get() {
                view! { <Spinner /> }.into_any()
            } else {
                view! {
                    <div class="permission-grid">
                        {boxes.get().into_iter().map(|(name, checked)| view! {
                            <div class="permission-grid__item">
                                <Checkbox checked=checked label=name />
                            </div>
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=Signal::derive(move || saving.get() || loading.get())>
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </div>
        </div>
    }
}
