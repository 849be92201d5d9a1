use serde::{Deserialize, Serialize};

pub const BRANDS_PATH: &str = "/brands";

/// Product brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Form payload for create and update. The logo file travels as a
/// separate multipart part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDto {
    pub name: String,
    pub description: Option<String>,
}

impl From<&Brand> for BrandDto {
    fn from(b: &Brand) -> Self {
        Self {
            name: b.name.clone(),
            description: b.description.clone(),
        }
    }
}
