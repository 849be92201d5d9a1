use super::model::ProductForm;
use crate::domain::a001_brand::api as brand_api;
use crate::domain::a002_category::api as category_api;
use crate::domain::a002_category::tree::{flatten, CategoryRow};
use crate::domain::a003_product::api;
use crate::shared::notice::NoticeService;
use contracts::domain::a001_brand::Brand;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub id: Option<i64>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub brand_id: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub image_url: RwSignal<Option<String>>,
    pub image: StoredValue<Option<File>, LocalStorage>,
    pub brands: RwSignal<Vec<Brand>>,
    pub categories: RwSignal<Vec<CategoryRow>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id,
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            brand_id: RwSignal::new(String::new()),
            category_id: RwSignal::new(String::new()),
            image_url: RwSignal::new(None),
            image: StoredValue::new_local(None),
            brands: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    fn form(&self) -> ProductForm {
        ProductForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            brand_id: self.brand_id.get_untracked(),
            category_id: self.category_id.get_untracked(),
        }
    }

    fn apply(&self, form: ProductForm) {
        self.name.set(form.name);
        self.description.set(form.description);
        self.price.set(form.price);
        self.brand_id.set(form.brand_id);
        self.category_id.set(form.category_id);
    }

    /// Loads the picker options and, when editing, the product itself.
    pub fn load(&self) {
        let vm = *self;
        spawn_local(async move {
            match brand_api::fetch_brands().await {
                Ok(brands) => vm.brands.set(brands),
                Err(e) => vm.error.set(Some(format!("Failed to load brands: {}", e))),
            }
        });
        spawn_local(async move {
            match category_api::fetch_tree().await {
                Ok(tree) => vm.categories.set(flatten(&tree)),
                Err(e) => vm.error.set(Some(format!("Failed to load categories: {}", e))),
            }
        });
        if let Some(id) = vm.id {
            spawn_local(async move {
                match api::fetch_product(id).await {
                    Ok(product) => {
                        vm.apply(ProductForm::from_product(&product));
                        vm.image_url.set(product.image_url);
                    }
                    Err(e) => vm.error.set(Some(format!("Failed to load product: {}", e))),
                }
            });
        }
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
        let image = vm.image.get_value();
        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = match vm.id {
                Some(id) => api::update_product(id, &dto, image).await,
                None => api::create_product(&dto, image).await,
            };
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    notices.success(format!("Product \"{}\" saved", dto.name));
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save product: {}", e);
                    vm.error.set(Some(e.to_string()));
                }
            }
        });
    }
}
