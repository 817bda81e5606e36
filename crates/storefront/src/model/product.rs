use crate::model::CategoryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A catalog item.
///
/// Invariants: the slug is unique (the product actor's key index enforces
/// it), `price` is non-negative and `inventory` is a whole count by
/// construction. `category_id`, when present, referenced an existing
/// category at creation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub price: f64,
    pub inventory: u32,
    pub category_id: Option<CategoryId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new product. All fields are required at creation;
/// the HTTP boundary rejects requests missing any of them before this struct
/// is built.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    pub inventory: u32,
    pub category_id: CategoryId,
}

/// Payload for updating an existing product.
///
/// `name` and `price` are mandatory on every update. `description` is always
/// written (an absent field clears it). `inventory`, `is_active` and
/// `category_id` are written only when present. `new_slug`, when present,
/// replaces the slug; the store's key index decides whether the rename is
/// allowed.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub inventory: Option<u32>,
    pub is_active: Option<bool>,
    pub category_id: Option<CategoryId>,
    pub new_slug: Option<String>,
}
