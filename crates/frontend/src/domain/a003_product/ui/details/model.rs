use contracts::domain::a003_product::{Product, ProductDto};

use crate::shared::form_utils::{optional_text, parse_amount, parse_selected_id, required_text};

/// Product form values as typed; selects hold ids as strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub brand_id: String,
    pub category_id: String,
}

impl ProductForm {
    pub fn from_product(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone().unwrap_or_default(),
            price: p.price.to_string(),
            brand_id: p.brand_id.to_string(),
            category_id: p.category_id.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ProductDto, String> {
        Ok(ProductDto {
            name: required_text(&self.name, "Name")?,
            description: optional_text(&self.description),
            price: parse_amount(&self.price, "Price")?,
            brand_id: parse_selected_id(&self.brand_id, "brand")?,
            category_id: parse_selected_id(&self.category_id, "category")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            name: "Air Max".into(),
            description: String::new(),
            price: "129.90".into(),
            brand_id: "2".into(),
            category_id: "5".into(),
        }
    }

    #[test]
    fn test_validate_builds_dto() {
        let dto = filled().validate().unwrap();
        assert_eq!(dto.name, "Air Max");
        assert_eq!(dto.description, None);
        assert_eq!(dto.price, 129.9);
        assert_eq!((dto.brand_id, dto.category_id), (2, 5));
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let mut form = filled();
        form.brand_id.clear();
        assert_eq!(form.validate(), Err("Select a brand".to_string()));

        let mut form = filled();
        form.price = "-3".into();
        assert!(form.validate().unwrap_err().starts_with("Price"));
    }

    #[test]
    fn test_round_trip_from_product() {
        let product = Product {
            id: 1,
            name: "Air Max".into(),
            description: Some("Runner".into()),
            price: 129.9,
            image_url: None,
            brand_id: 2,
            brand_name: None,
            category_id: 5,
            category_name: None,
            items: vec![],
            created_at: None,
        };
        let dto = ProductForm::from_product(&product).validate().unwrap();
        assert_eq!(dto, ProductDto::from(&product));
    }
}
