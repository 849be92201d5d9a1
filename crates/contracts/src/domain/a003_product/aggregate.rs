use serde::{Deserialize, Serialize};

pub const PRODUCTS_PATH: &str = "/products";

/// Path of the variant collection that belongs to one product.
pub fn product_items_path(product_id: i64) -> String {
    format!("{}/{}/items", PRODUCTS_PATH, product_id)
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product with its variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub brand_id: i64,
    #[serde(default)]
    pub brand_name: Option<String>,
    pub category_id: i64,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub items: Vec<ProductItem>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Stock summed over all variants, as shown in the list.
    pub fn total_stock(&self) -> i64 {
        self.items.iter().map(|i| i.quantity_in_stock).sum()
    }

    /// Brand name, or `#id` when the server did not join it.
    pub fn brand_label(&self) -> String {
        self.brand_name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.brand_id))
    }

    pub fn category_label(&self) -> String {
        self.category_name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.category_id))
    }
}

/// Product variant (one SKU)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    pub id: i64,
    pub product_id: i64,
    pub sku: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    pub price: f64,
    pub quantity_in_stock: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

// ============================================================================
// Forms
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub brand_id: i64,
    pub category_id: i64,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price,
            brand_id: p.brand_id,
            category_id: p.category_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemDto {
    pub sku: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub price: f64,
    pub quantity_in_stock: i64,
}

impl From<&ProductItem> for ProductItemDto {
    fn from(i: &ProductItem) -> Self {
        Self {
            sku: i.sku.clone(),
            color: i.color.clone(),
            size: i.size.clone(),
            price: i.price,
            quantity_in_stock: i.quantity_in_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_nested_items() {
        let raw = r#"{
            "id": 7, "name": "Runner", "price": 99.5,
            "brandId": 1, "brandName": "Acme", "categoryId": 3,
            "items": [
                {"id": 1, "productId": 7, "sku": "RUN-40", "size": "40", "price": 99.5, "quantityInStock": 4},
                {"id": 2, "productId": 7, "sku": "RUN-41", "size": "41", "price": 99.5, "quantityInStock": 6}
            ]
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.items.len(), 2);
        assert_eq!(product.total_stock(), 10);
        assert_eq!(product.category_name, None);
        assert_eq!(product.brand_label(), "Acme");
        assert_eq!(product.category_label(), "#3");
    }

    #[test]
    fn test_items_path() {
        assert_eq!(product_items_path(12), "/products/12/items");
    }
}
