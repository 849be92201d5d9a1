use contracts::domain::a001_brand::{Brand, BrandDto};

pub const NAME_MAX_LEN: usize = 100;

/// Editable values of the brand form, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandForm {
    pub name: String,
    pub description: String,
}

impl BrandForm {
    pub fn from_brand(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            description: brand.description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<BrandDto, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(format!("Name must be at most {} characters", NAME_MAX_LEN));
        }
        let description = self.description.trim();
        Ok(BrandDto {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_and_drops_empty_description() {
        let form = BrandForm {
            name: "  Acme ".into(),
            description: "   ".into(),
        };
        assert_eq!(
            form.validate(),
            Ok(BrandDto {
                name: "Acme".into(),
                description: None
            })
        );
    }

    #[test]
    fn test_validate_rejects_missing_or_long_name() {
        assert!(BrandForm::default().validate().is_err());
        let long = BrandForm {
            name: "x".repeat(NAME_MAX_LEN + 1),
            description: String::new(),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_from_brand() {
        let brand = Brand {
            id: 3,
            name: "Nike".into(),
            description: Some("Sportswear".into()),
            logo_url: None,
        };
        let form = BrandForm::from_brand(&brand);
        assert_eq!(form.name, "Nike");
        assert_eq!(form.description, "Sportswear");
    }
}
