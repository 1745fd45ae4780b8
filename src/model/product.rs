use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A product as acknowledged by the entity store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub expiration_date: NaiveDate,
    pub category_id: i32,
    pub unit_id: i32,
    pub storage_id: i32,
    pub created_at: NaiveDateTime,
}

/// Fields supplied when recording a new product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProductDto {
    pub name: String,
    pub quantity: i32,
    pub expiration_date: NaiveDate,
    pub category_id: i32,
    pub unit_id: i32,
    pub storage_id: i32,
}

/// Partial product update.
///
/// Fields left as `None` are omitted from the serialized body so the store keeps
/// whatever value it already holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<i32>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.expiration_date.is_none()
            && self.category_id.is_none()
            && self.unit_id.is_none()
            && self.storage_id.is_none()
    }
}

#[cfg(feature = "server")]
impl From<entity::product::Model> for ProductDto {
    fn from(model: entity::product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            expiration_date: model.expiration_date,
            category_id: model.category_id,
            unit_id: model.unit_id,
            storage_id: model.storage_id,
            created_at: model.created_at,
        }
    }
}
