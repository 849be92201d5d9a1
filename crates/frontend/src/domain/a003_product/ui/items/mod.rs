//! Variants (SKUs) of one product, edited inside the product's dialog stack.

use crate::domain::a003_product::api;
use crate::shared::dialogs::confirm;
use crate::shared::form_utils::{optional_text, parse_amount, parse_count, required_text};
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;
use crate::shared::number_format::{format_int, format_money};
use contracts::domain::a003_product::{ProductItem, ProductItemDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub sku: String,
    pub color: String,
    pub size: String,
    pub price: String,
    pub quantity: String,
}

impl ItemForm {
    pub fn from_item(item: &ProductItem) -> Self {
        Self {
            sku: item.sku.clone(),
            color: item.color.clone().unwrap_or_default(),
            size: item.size.clone().unwrap_or_default(),
            price: item.price.to_string(),
            quantity: item.quantity_in_stock.to_string(),
        }
    }

    /// `taken_skus` are the SKUs of the other variants of the product.
    pub fn validate(&self, taken_skus: &[String]) -> Result<ProductItemDto, String> {
        let sku = required_text(&self.sku, "SKU")?;
        if taken_skus.iter().any(|s| s.eq_ignore_ascii_case(&sku)) {
            return Err(format!("SKU {} is already used by another variant", sku));
        }
        Ok(ProductItemDto {
            sku,
            color: optional_text(&self.color),
            size: optional_text(&self.size),
            price: parse_amount(&self.price, "Price")?,
            quantity_in_stock: parse_count(&self.quantity, "Stock")?,
        })
    }
}

#[component]
pub fn ProductItems(product_id: i64) -> impl IntoView {
    let notices = use_notices();
    let items: RwSignal<Vec<ProductItem>> = RwSignal::new(Vec::new());
    let editing: RwSignal<Option<i64>> = RwSignal::new(None);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let sku = RwSignal::new(String::new());
    let color = RwSignal::new(String::new());
    let size = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::from("0"));

    let fill = move |form: ItemForm| {
        sku.set(form.sku);
        color.set(form.color);
        size.set(form.size);
        price.set(form.price);
        quantity.set(form.quantity);
    };

    let load = move || {
        spawn_local(async move {
            match api::fetch_items(product_id).await {
                Ok(data) => items.set(data),
                Err(e) => notices.api_error("Failed to load variants", &e),
            }
        });
    };
    load();

    let reset = move || {
        editing.set(None);
        error.set(None);
        fill(ItemForm {
            quantity: "0".into(),
            ..Default::default()
        });
    };

    let save = move |_| {
        let form = ItemForm {
            sku: sku.get_untracked(),
            color: color.get_untracked(),
            size: size.get_untracked(),
            price: price.get_untracked(),
            quantity: quantity.get_untracked(),
        };
        let editing_id = editing.get_untracked();
        let taken: Vec<String> = items.with_untracked(|all| {
            all.iter()
                .filter(|i| Some(i.id) != editing_id)
                .map(|i| i.sku.clone())
                .collect()
        });
        let dto = match form.validate(&taken) {
            Ok(dto) => dto,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        busy.set(true);
        spawn_local(async move {
            let result = match editing_id {
                Some(item_id) => api::update_item(product_id, item_id, &dto).await,
                None => api::create_item(product_id, &dto).await,
            };
            busy.set(false);
            match result {
                Ok(()) => {
                    notices.success(format!("Variant {} saved", dto.sku));
                    reset();
                    load();
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let delete = move |item: ProductItem| {
        if !confirm(&format!("Delete variant {}?", item.sku)) {
            return;
        }
        spawn_local(async move {
            match api::delete_item(product_id, item.id).await {
                Ok(()) => {
                    if editing.get_untracked() == Some(item.id) {
                        reset();
                    }
                    load();
                }
                Err(e) => notices.api_error("Failed to delete variant", &e),
            }
        });
    };

    view! {
        <div class="product-items">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__row">
                <div class="form__group"><Label>"SKU"</Label><Input value=sku /></div>
                <div class="form__group"><Label>"Color"</Label><Input value=color /></div>
                <div class="form__group"><Label>"Size"</Label><Input value=size /></div>
                <div class="form__group"><Label>"Price"</Label><Input value=price /></div>
                <div class="form__group"><Label>"Stock"</Label><Input value=quantity /></div>
            </div>
            <div class="details-actions">
                <Show when=move || editing.get().is_some()>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset()>
                        "Cancel edit"
                    </Button>
                </Show>
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=busy>
                    {move || if editing.get().is_some() { icon("save") } else { icon("plus") }}
                    {move || if editing.get().is_some() { " Update variant" } else { " Add variant" }}
                </Button>
            </div>

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"SKU"</TableHeaderCell>
                        <TableHeaderCell>"Color"</TableHeaderCell>
                        <TableHeaderCell>"Size"</TableHeaderCell>
                        <TableHeaderCell>"Price"</TableHeaderCell>
                        <TableHeaderCell>"Stock"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || items.get()
                        key=|i| (i.id, i.sku.clone(), i.quantity_in_stock, i.price.to_bits())
                        children=move |item| {
                            let id = item.id;
                            let for_edit = item.clone();
                            let for_delete = item.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <span class:product-items__sku--editing=move || editing.get() == Some(id)>
                                            {item.sku.clone()}
                                        </span>
                                    </TableCell>
                                    <TableCell>{item.color.clone().unwrap_or_default()}</TableCell>
                                    <TableCell>{item.size.clone().unwrap_or_default()}</TableCell>
                                    <TableCell>{format_money(item.price)}</TableCell>
                                    <TableCell>{format_int(item.quantity_in_stock)}</TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| {
                                                editing.set(Some(for_edit.id));
                                                error.set(None);
                                                fill(ItemForm::from_item(&for_edit));
                                            }
                                        >
                                            {icon("edit")}
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| delete(for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(sku: &str) -> ItemForm {
        ItemForm {
            sku: sku.into(),
            color: "Red".into(),
            size: " ".into(),
            price: "19.99".into(),
            quantity: "12".into(),
        }
    }

    #[test]
    fn test_validate_item() {
        let dto = form("AM-RED-42").validate(&[]).unwrap();
        assert_eq!(dto.color.as_deref(), Some("Red"));
        assert_eq!(dto.size, None);
        assert_eq!(dto.quantity_in_stock, 12);
    }

    #[test]
    fn test_duplicate_sku_is_rejected() {
        let taken = vec!["am-red-42".to_string()];
        assert!(form("AM-RED-42").validate(&taken).is_err());
        assert!(form("AM-RED-43").validate(&taken).is_ok());
    }

    #[test]
    fn test_bad_stock_is_rejected() {
        let mut f = form("X");
        f.quantity = "many".into();
        assert!(f.validate(&[]).unwrap_err().starts_with("Stock"));
    }
}
