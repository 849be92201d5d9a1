use super::view_model::ProductDetailsViewModel;
use crate::shared::components::file_input::FileInput;
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(id);
    let notices = use_notices();
    vm.load();

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Name"</Label>
                <Input value=vm.name placeholder="Product name" />
            </div>

            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=vm.description attr:rows=4 />
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Price"</Label>
                    <Input value=vm.price placeholder="0.00" />
                </div>

                <div class="form__group">
                    <Label>"Brand"</Label>
                    <Select value=vm.brand_id>
                        <option value="">"Select a brand"</option>
                        {move || vm.brands.get().into_iter().map(|b| view! {
                            <option value=b.id.to_string() selected=vm.brand_id.get_untracked() == b.id.to_string()>
                                {b.name}
                            </option>
                        }).collect_view()}
                    </Select>
                </div>

                <div class="form__group">
                    <Label>"Category"</Label>
                    <Select value=vm.category_id>
                        <option value="">"Select a category"</option>
                        {move || vm.categories.get().into_iter().map(|row| {
                            let id = row.category.id.to_string();
                            let selected = vm.category_id.get_untracked() == id;
                            view! {
                                <option value=id selected=selected>{row.indented_name()}</option>
                            }
                        }).collect_view()}
                    </Select>
                </div>
            </div>

            <FileInput label="Image" file=vm.image current_url=vm.image_url />

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(notices, on_saved)
                    disabled=vm.saving
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </div>
        </div>
    }
}
