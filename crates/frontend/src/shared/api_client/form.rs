//! Multipart form bodies
//!
//! Every write endpoint takes `multipart/form-data`. A [`FormBody`] is built
//! from a serializable DTO (one text part per scalar field) plus optional
//! file parts, and only turned into a browser `FormData` at send time.

use serde::Serialize;
use serde_json::Value;
use web_sys::{File, FormData};

use super::error::{ApiError, ApiResult};

pub enum FormValue {
    Text(String),
    File(File),
}

#[derive(Default)]
pub struct FormBody {
    fields: Vec<(String, FormValue)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens a DTO into text parts.
    ///
    /// `None` fields are omitted, arrays become repeated parts with the same
    /// name and nested objects use dotted names (`address.city`).
    pub fn from_serialize<T: Serialize>(dto: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(dto).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut body = Self::new();
        match value {
            Value::Object(map) => {
                for (key, v) in map {
                    body.push_value(&key, v);
                }
            }
            other => {
                return Err(ApiError::Encode(format!(
                    "form payload must be an object, got {}",
                    other
                )))
            }
        }
        Ok(body)
    }

    fn push_value(&mut self, name: &str, value: Value) {
        match value {
            Value::Null => {}
            Value::Bool(b) => self.push_text(name, if b { "true" } else { "false" }),
            Value::Number(n) => self.push_text(name, &n.to_string()),
            Value::String(s) => self.push_text(name, &s),
            Value::Array(items) => {
                for item in items {
                    self.push_value(name, item);
                }
            }
            Value::Object(map) => {
                for (key, v) in map {
                    self.push_value(&format!("{}.{}", name, key), v);
                }
            }
        }
    }

    fn push_text(&mut self, name: &str, value: &str) {
        self.fields
            .push((name.to_string(), FormValue::Text(value.to_string())));
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.push_text(name, value);
        self
    }

    /// Adds a file part; `None` (no file picked) adds nothing.
    pub fn file(mut self, name: &str, file: Option<File>) -> Self {
        if let Some(file) = file {
            self.fields.push((name.to_string(), FormValue::File(file)));
        }
        self
    }

    /// Text parts in insertion order.
    pub fn text_fields(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(name, value)| match value {
                FormValue::Text(text) => Some((name.as_str(), text.as_str())),
                FormValue::File(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_form_data(&self) -> ApiResult<FormData> {
        let form_data = FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
        for (name, value) in &self.fields {
            match value {
                FormValue::Text(text) => form_data.append_with_str(name, text),
                FormValue::File(file) => {
                    form_data.append_with_blob_and_filename(name, file, &file.name())
                }
            }
            .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
        }
        Ok(form_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Sample {
        name: String,
        description: Option<String>,
        price: f64,
        is_active: bool,
        roles: Vec<String>,
        address: Address,
    }

    #[derive(Serialize)]
    struct Address {
        city: String,
    }

    #[test]
    fn test_flattens_scalars_arrays_and_nested_objects() {
        let body = FormBody::from_serialize(&Sample {
            name: "Acme".into(),
            description: None,
            price: 12.5,
            is_active: true,
            roles: vec!["Admin".into(), "Editor".into()],
            address: Address { city: "Hanoi".into() },
        })
        .unwrap();

        let mut fields = body.text_fields();
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("address.city", "Hanoi"),
                ("isActive", "true"),
                ("name", "Acme"),
                ("price", "12.5"),
                ("roles", "Admin"),
                ("roles", "Editor"),
            ]
        );
    }

    #[test]
    fn test_rejects_non_object_payload() {
        assert!(matches!(
            FormBody::from_serialize(&vec![1, 2]),
            Err(ApiError::Encode(_))
        ));
    }

    #[test]
    fn test_missing_file_adds_no_part() {
        let body = FormBody::new().text("name", "x").file("logo", None);
        assert_eq!(body.len(), 1);
    }
}
