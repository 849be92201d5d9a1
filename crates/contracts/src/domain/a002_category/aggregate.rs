use serde::{Deserialize, Serialize};

pub const CATEGORIES_PATH: &str = "/categories";

/// Catalog category. The list endpoint returns root categories with
/// their subtree nested in `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub children: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i64>,
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            name: c.name.clone(),
            description: c.description.clone(),
            parent_id: c.parent_id,
        }
    }
}
