use super::view_model::BrandDetailsViewModel;
use crate::shared::components::file_input::FileInput;
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BrandDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BrandDetailsViewModel::new(id);
    let notices = use_notices();
    vm.load();

    let busy = Signal::derive(move || vm.loading.get() || vm.saving.get());

    view! {
        <div class="details-form">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Name"</Label>
                <Input value=vm.name placeholder="Brand name" disabled=busy />
            </div>

            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=vm.description placeholder="Optional" attr:rows=3 />
            </div>

            <FileInput label="Logo" file=vm.logo current_url=vm.logo_url />

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=busy
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(notices, on_saved)
                    disabled=busy
                >
                    {icon("save")}
                    {move || if vm.saving.get() {
                        " Saving..."
                    } else if vm.is_edit_mode() {
                        " Save"
                    } else {
                        " Create"
                    }}
                </Button>
            </div>
        </div>
    }
}
