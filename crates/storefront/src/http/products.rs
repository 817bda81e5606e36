//! Product endpoints.
//!
//! Creation rejects with "Missing required field: {name}" in a fixed field
//! order, then checks the numeric and slug shapes, all before any client
//! call. Category validity is checked by the product actor itself
//! (`on_create`), and slug uniqueness by the store index, so their error
//! precedence matches the contract: invalid category before duplicate slug.
//!
//! Updates address the product by slug but apply the change by primary key,
//! so a rename never leaves the update ambiguous.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

use super::{ApiError, AppState, NumberOrString};
use crate::model::{
    is_valid_slug, Category, CategoryId, CategorySummary, Product, ProductCreate, ProductId,
    ProductUpdate,
};
use resource_actor::ActorClient;

const SLUG_FORMAT_MESSAGE: &str = "Slug must contain only lowercase letters, numbers, and hyphens";

/// A product joined with the reduced category shape used in listings.
#[derive(Debug, Serialize)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<CategorySummary>,
}

/// A product joined with the full category record, used by the edit
/// endpoints.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct ProductEnvelope {
    pub product: ProductDetail,
}

#[derive(Debug, Serialize)]
pub struct ProductUpdatedResponse {
    pub product: ProductDetail,
    pub message: String,
}

async fn with_full_category(
    state: &AppState,
    product: Product,
) -> Result<ProductDetail, ApiError> {
    let category = match product.category_id {
        Some(id) => state.categories.get(id).await?,
        None => None,
    };
    Ok(ProductDetail { product, category })
}

/// GET /api/products: all products with their category summary, by name.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductWithCategory>>, ApiError> {
    let mut products = state.products.list().await?;
    products.sort_by(|a, b| a.name.cmp(&b.name));

    let categories: HashMap<CategoryId, CategorySummary> = state
        .categories
        .list()
        .await?
        .iter()
        .map(|c| (c.id, CategorySummary::from(c)))
        .collect();

    let joined = products
        .into_iter()
        .map(|product| {
            let category = product.category_id.and_then(|id| categories.get(&id).cloned());
            ProductWithCategory { product, category }
        })
        .collect();

    Ok(Json(joined))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price: Option<NumberOrString>,
    pub inventory: Option<NumberOrString>,
    pub category_id: Option<u32>,
}

fn missing(field: &str) -> ApiError {
    ApiError::BadRequest(format!("Missing required field: {field}"))
}

fn require_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| missing(field))
}

impl CreateProductRequest {
    /// Boundary validation: required fields in contract order, then shapes.
    fn into_params(self) -> Result<ProductCreate, ApiError> {
        let name = require_text(self.name, "name")?;
        let slug = require_text(self.slug, "slug")?;
        let description = require_text(self.description, "description")?;
        let price = self.price.ok_or_else(|| missing("price"))?;
        let inventory = self.inventory.ok_or_else(|| missing("inventory"))?;
        let category_id = self.category_id.ok_or_else(|| missing("categoryId"))?;

        if !is_valid_slug(&slug) {
            return Err(ApiError::BadRequest(SLUG_FORMAT_MESSAGE.to_string()));
        }
        let price = price
            .as_f64()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| ApiError::BadRequest("Price must be a positive number".to_string()))?;
        let inventory = inventory.as_u32().ok_or_else(|| {
            ApiError::BadRequest("Inventory must be a positive integer".to_string())
        })?;

        Ok(ProductCreate {
            name,
            slug,
            description,
            price,
            inventory,
            category_id: CategoryId::from(category_id),
        })
    }
}

/// POST /api/products: create a product.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductWithCategory>), ApiError> {
    let params = body.into_params()?;

    let id = state.products.create_product(params).await?;
    let product = state
        .products
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal("Failed to create product".to_string()))?;

    let category = match product.category_id {
        Some(category_id) => state
            .categories
            .get(category_id)
            .await?
            .as_ref()
            .map(CategorySummary::from),
        None => None,
    };

    Ok((
        StatusCode::CREATED,
        Json(ProductWithCategory { product, category }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<u32>,
}

/// DELETE /api/products?id=: delete a product by id.
pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<Value>, ApiError> {
    let id = params
        .id
        .ok_or_else(|| ApiError::BadRequest("Product ID is required".to_string()))?;

    state.products.delete(ProductId::from(id)).await?;

    Ok(Json(json!({ "success": true })))
}

/// GET /api/products/edit/:slug: one product with its full category.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let product = state
        .products
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    let product = with_full_category(&state, product).await?;
    Ok(Json(ProductEnvelope { product }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<NumberOrString>,
    pub inventory: Option<NumberOrString>,
    pub category_id: Option<u32>,
    pub is_active: Option<bool>,
    pub new_slug: Option<String>,
}

/// POST /api/products/edit/:slug: update a product addressed by slug.
pub async fn update_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductUpdatedResponse>, ApiError> {
    let existing = state
        .products
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    let name = body.name.filter(|n| !n.is_empty());
    let (Some(name), Some(price)) = (name, body.price) else {
        return Err(ApiError::MissingFields(vec!["name", "price"]));
    };

    let price = price
        .as_f64()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| ApiError::BadRequest("Price must be a positive number".to_string()))?;
    let inventory = body
        .inventory
        .map(|i| {
            i.as_u32().ok_or_else(|| {
                ApiError::BadRequest("Inventory must be a positive integer".to_string())
            })
        })
        .transpose()?;
    let new_slug = body.new_slug.filter(|s| !s.is_empty());
    if let Some(new_slug) = &new_slug {
        if !is_valid_slug(new_slug) {
            return Err(ApiError::BadRequest(SLUG_FORMAT_MESSAGE.to_string()));
        }
    }

    // Addressed by slug, applied by primary key: a rename in the same
    // request cannot orphan the update.
    let updated = state
        .products
        .update_product(
            existing.id,
            ProductUpdate {
                name,
                description: body.description,
                price,
                inventory,
                is_active: body.is_active,
                category_id: body.category_id.map(CategoryId::from),
                new_slug,
            },
        )
        .await?;

    let product = with_full_category(&state, updated).await?;
    Ok(Json(ProductUpdatedResponse {
        product,
        message: "Product updated successfully".to_string(),
    }))
}
