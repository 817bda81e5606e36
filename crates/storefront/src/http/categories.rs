//! Category endpoints.
//!
//! Creation is validated declaratively at the boundary: the request struct
//! carries its validation schema, and failures come back as a per-field
//! error map. Missing fields default to empty strings, so "absent" and
//! "too short" produce the same message.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::{Validate, ValidationError, ValidationErrors};

use super::{ApiError, AppState};
use crate::model::{is_valid_slug, Category, CategoryCreate, Product};
use resource_actor::ActorClient;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(min = 2, message = "Slug must be at least 2 characters"),
        custom(function = validate_slug)
    )]
    pub slug: String,
    pub description: Option<String>,
}

fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        let mut error = ValidationError::new("slug_format");
        error.message =
            Some("Slug must contain only lowercase letters, numbers, and hyphens".into());
        Err(error)
    }
}

/// Flatten validator output into the `{field: message}` map the API returns.
fn field_errors(errors: ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let message = errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid value".to_string());
            (field.to_string(), message)
        })
        .collect()
}

/// GET /api/categories: all categories, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let mut categories = state.categories.list().await?;
    categories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(categories))
}

/// POST /api/categories: create a category.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    body.validate()
        .map_err(|errors| ApiError::Validation(field_errors(errors)))?;

    let id = state
        .categories
        .create_category(CategoryCreate {
            name: body.name,
            slug: body.slug,
            description: body.description,
        })
        .await?;

    let category = state
        .categories
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal("Failed to create category".to_string()))?;

    Ok((StatusCode::CREATED, Json(category)))
}

#[derive(Debug, Serialize)]
pub struct CategoryProductsResponse {
    pub category: Category,
    pub products: Vec<Product>,
}

/// GET /api/categories/:slug/products: the category and its active
/// products, for the storefront category page.
pub async fn products_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryProductsResponse>, ApiError> {
    let category = state
        .categories
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))?;

    let mut products: Vec<Product> = state
        .products
        .list()
        .await?
        .into_iter()
        .filter(|p| p.category_id == Some(category.id) && p.is_active)
        .collect();
    products.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Json(CategoryProductsResponse { category, products }))
}
