//! Request and response DTOs for the admin product API.
//!
//! # Design
//! The admin backend accepts and returns loosely shaped JSON. Each DTO names
//! the fields the client relies on and flattens everything else into a map, so
//! whatever the caller sends is forwarded unchanged and whatever the backend
//! returns survives deserialization. The mock server defines its own copies of
//! these shapes; integration tests catch drift between the two.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product identifier. Backends serving JavaScript clients often send 64-bit
/// ids as strings, so both shapes are accepted and sent back as they came.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Num(i64),
    Str(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Num(id) => write!(f, "{id}"),
            ProductId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Num(id)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        ProductId::Num(i64::from(id))
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Str(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Str(id.to_string())
    }
}

/// Query for `product/page`. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPageQuery {
    pub page: u64,
    pub size: u64,
    /// Backend-defined filter keys, sent alongside `page` and `size`.
    #[serde(flatten)]
    pub filters: Map<String, Value>,
}

impl ProductPageQuery {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            filters: Map::new(),
        }
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }
}

/// One page of results. Keys beyond `list` and `total` (page counters and
/// the like) are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub list: Vec<T>,
    pub total: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Page<T> {
    pub fn new(list: Vec<T>, total: u64) -> Self {
        Self {
            list,
            total,
            extra: Map::new(),
        }
    }
}

/// A product as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Payload for `product/saveOrEdit`.
///
/// Whether the backend creates or updates is its own decision; the client
/// forwards `id` when present and never branches on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            id: None,
            fields: Map::new(),
        }
    }

    pub fn with_id(id: impl Into<ProductId>) -> Self {
        Self {
            id: Some(id.into()),
            fields: Map::new(),
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Payload for `product/remove`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRemoval {
    pub ids: Vec<ProductId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductRemoval {
    pub fn new<I>(ids: impl IntoIterator<Item = I>) -> Self
    where
        I: Into<ProductId>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }
}

/// Result of an upload endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Backend acknowledgement for `saveOrEdit` and `remove`, passed through as
/// raw JSON.
pub type Ack = Value;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn page_query_flattens_filters() {
        let query = ProductPageQuery::new(2, 20).filter("name", "lamp").filter("status", 1);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({"page": 2, "size": 20, "name": "lamp", "status": 1}));
    }

    #[test]
    fn product_keeps_unknown_fields() {
        let raw = json!({"id": 7, "name": "Desk", "price": 199.5, "tags": ["wood"]});
        let product: Product = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(product.id, Some(ProductId::Num(7)));
        assert_eq!(serde_json::to_value(&product).unwrap(), raw);
    }

    #[test]
    fn form_without_id_omits_it() {
        let value = serde_json::to_value(ProductForm::new().field("name", "Chair")).unwrap();
        assert_eq!(value, json!({"name": "Chair"}));
    }

    #[test]
    fn removal_requires_ids() {
        let result: Result<ProductRemoval, _> = serde_json::from_str(r#"{"reason":"dup"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn string_ids_survive_both_directions() {
        let raw = json!({"id": "1790000000000000001", "name": "Desk"});
        let product: Product = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(product.id, Some(ProductId::from("1790000000000000001")));
        assert_eq!(serde_json::to_value(&product).unwrap(), raw);

        let removal = ProductRemoval::new(vec![ProductId::from("1790000000000000001"), ProductId::from(2)]);
        assert_eq!(
            serde_json::to_value(&removal).unwrap(),
            json!({"ids": ["1790000000000000001", 2]})
        );
    }

    #[test]
    fn page_keeps_extra_top_level_keys() {
        let raw = json!({"list": [], "total": 0, "pages": 0, "current": 1});
        let page: Page<Product> = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(page.extra["current"], 1);
        assert_eq!(serde_json::to_value(&page).unwrap(), raw);
    }

    #[test]
    fn empty_page_parses() {
        let page: Page<Product> = serde_json::from_str(r#"{"list":[],"total":0}"#).unwrap();
        assert!(page.list.is_empty());
        assert_eq!(page.total, 0);
    }
}
