use super::model::BrandForm;
use crate::domain::a001_brand::api;
use crate::shared::notice::NoticeService;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

/// ViewModel for the brand dialog
#[derive(Clone, Copy)]
pub struct BrandDetailsViewModel {
    pub id: Option<i64>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub logo_url: RwSignal<Option<String>>,
    pub logo: StoredValue<Option<File>, LocalStorage>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl BrandDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            logo_url: RwSignal::new(None),
            logo: StoredValue::new_local(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    fn form(&self) -> BrandForm {
        BrandForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    fn apply(&self, form: BrandForm) {
        self.name.set(form.name);
        self.description.set(form.description);
    }

    /// Fetches the brand being edited.
    pub fn load(&self) {
        let Some(id) = self.id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_brand(id).await {
                Ok(brand) => {
                    vm.apply(BrandForm::from_brand(&brand));
                    vm.logo_url.set(brand.logo_url);
                }
                Err(e) => vm.error.set(Some(format!("Failed to load brand: {}", e))),
            }
            vm.loading.set(false);
        });
    }

    pub fn save_command(&self, notices: NoticeService, on_saved: Callback<()>) {
        let dto = match self.form().validate() {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let vm = *self;
        let logo = vm.logo.get_value();
        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = match vm.id {
                Some(id) => api::update_brand(id, &dto, logo).await,
                None => api::create_brand(&dto, logo).await,
            };
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    notices.success(format!("Brand \"{}\" saved", dto.name));
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save brand: {}", e);
                    vm.error.set(Some(e.to_string()));
                }
            }
        });
    }
}
