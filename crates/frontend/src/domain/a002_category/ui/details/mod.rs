use crate::domain::a002_category::api;
use crate::domain::a002_category::tree::parent_options;
use crate::shared::components::file_input::FileInput;
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use contracts::domain::a002_category::{Category, CategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::File;

/// Builds the payload from the typed values. `parent` is the raw value of
/// the parent `<select>`; empty means a root category.
pub fn validate_category(
    name: &str,
    description: &str,
    parent: &str,
    allowed_parents: &[i64],
) -> Result<CategoryDto, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    let parent_id = match parent.trim() {
        "" => None,
        raw => {
            let id = raw
                .parse::<i64>()
                .map_err(|_| "Invalid parent category".to_string())?;
            if !allowed_parents.contains(&id) {
                return Err("A category cannot be moved under itself".to_string());
            }
            Some(id)
        }
    };
    let description = description.trim();
    Ok(CategoryDto {
        name: name.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        parent_id,
    })
}

#[component]
pub fn CategoryDetails(
    /// Category being edited; `None` creates a new one
    category: Option<Category>,
    /// Current tree, used for the parent picker
    tree: Vec<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notices = use_notices();
    let id = category.as_ref().map(|c| c.id);
    let options = parent_options(&tree, id);
    let allowed: Vec<i64> = options.iter().map(|r| r.category.id).collect();

    let name = RwSignal::new(category.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let description = RwSignal::new(
        category
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let parent = RwSignal::new(
        category
            .as_ref()
            .and_then(|c| c.parent_id)
            .map(|p| p.to_string())
            .unwrap_or_default(),
    );
    let image = StoredValue::<Option<File>, LocalStorage>::new_local(None);
    let image_url = category.as_ref().and_then(|c| c.image_url.clone());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let dto = match validate_category(
            &name.get_untracked(),
            &description.get_untracked(),
            &parent.get_untracked(),
            &allowed,
        ) {
            Ok(dto) => dto,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        let file = image.get_value();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_category(id, &dto, file).await,
                None => api::create_category(&dto, file).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    notices.success(format!("Category \"{}\" saved", dto.name));
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
                <Input value=name placeholder="Category name" />
            </div>

            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description attr:rows=3 />
            </div>

            <div class="form__group">
                <Label>"Parent category"</Label>
                <Select value=parent>
                    <option value="">"(none)"</option>
                    {options.into_iter().map(|row| view! {
                        <option value=row.category.id.to_string()>{row.indented_name()}</option>
                    }).collect_view()}
                </Select>
            </div>

            <FileInput label="Image" file=image current_url=image_url />

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
    fn test_validate_category_parent() {
        let dto = validate_category("Shirts", "", "2", &[1, 2]).unwrap();
        assert_eq!(dto.parent_id, Some(2));
        assert_eq!(dto.description, None);

        assert_eq!(validate_category("Root", "x", "", &[]).unwrap().parent_id, None);
        assert!(validate_category("Shirts", "", "4", &[1, 2]).is_err());
        assert!(validate_category("Shirts", "", "abc", &[1, 2]).is_err());
        assert!(validate_category("  ", "", "", &[]).is_err());
    }
}
