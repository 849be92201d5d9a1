mod permissions;

pub use permissions::RolePermissions;

use crate::shared::form_utils::{optional_text, required_text};
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use crate::system::roles::api;
use contracts::system::roles::{Role, RoleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub fn validate_role(name: &str, description: &str) -> Result<RoleDto, String> {
    let name = required_text(name, "Name")?;
    if name.contains(char::is_whitespace) {
        return Err("Role name cannot contain spaces".to_string());
    }
    Ok(RoleDto {
        name,
        description: optional_text(description),
    })
}

#[component]
pub fn RoleDetails(
    /// Role being edited; `None` creates a new one
    role: Option<Role>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notices = use_notices();
    let id = role.as_ref().map(|r| r.id.clone());
    let name = RwSignal::new(role.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        role.as_ref()
            .and_then(|r| r.description.clone())
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let dto = match validate_role(&name.get_untracked(), &description.get_untracked()) {
            Ok(dto) => dto,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let id = id.clone();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_role(&id, &dto).await,
                None => api::create_role(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    notices.success(format!("Role \"{}\" saved", dto.name));
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-form">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Name"</Label>
                <Input value=name placeholder="e.g. CatalogManager" />
            </div>

            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description attr:rows=3 />
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_role() {
        let dto = validate_role(" Support ", "  ").unwrap();
        assert_eq!(dto.name, "Support");
        assert_eq!(dto.description, None);
        assert!(validate_role("", "x").is_err());
        assert!(validate_role("Catalog Manager", "").is_err());
    }
}
