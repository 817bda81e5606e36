//! # API Error Responses
//!
//! One error type for the whole HTTP surface. Handlers return
//! `Result<_, ApiError>`; resource errors convert via `From`, so `?` maps a
//! domain failure straight to the right status code and JSON body.
//!
//! Bodies follow the API contract: validation failures carry a per-field
//! map (`{"errors": {...}}`), everything else a single message
//! (`{"error": "..."}`). Internal failures are logged with their detail and
//! surface only a generic message: no stack traces, in any mode.
//!
//! One deliberate inconsistency is preserved from the API contract:
//! a duplicate *category* slug is 409, a duplicate *product* slug is 400.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;
use tracing::error;

use crate::auth::AuthError;
use crate::category_actor::CategoryError;
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;

/// Errors a handler can surface to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field-level validation failures, rendered as `{"errors": {field: message}}`.
    #[error("Validation failed")]
    Validation(HashMap<String, String>),

    #[error("{0}")]
    BadRequest(String),

    /// The product-update shape: names the fields the caller must supply.
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Generic failure; the message is already client-safe, the detail was
    /// logged where the error was converted.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Log the underlying failure and keep only a generic message for the
    /// client.
    pub fn internal(message: &str, detail: impl std::fmt::Display) -> Self {
        error!(error = %detail, "{message}");
        ApiError::Internal(message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::MissingFields(required) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing required fields", "required": required })),
            )
                .into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Conflict(message) => {
                (StatusCode::CONFLICT, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::NotFound(_) => ApiError::NotFound("Category not found".to_string()),
            CategoryError::AlreadyExists(_) => {
                ApiError::Conflict("A category with this slug already exists".to_string())
            }
            CategoryError::ValidationError(message) => ApiError::BadRequest(message),
            CategoryError::ActorCommunicationError(detail) => {
                ApiError::internal("Category request failed", detail)
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::NotFound("Product not found".to_string()),
            // Product slug conflicts are 400; only category conflicts get 409.
            ProductError::AlreadyExists(_) => {
                ApiError::BadRequest("A product with this slug already exists".to_string())
            }
            ProductError::InvalidCategory(_) => {
                ApiError::BadRequest("Invalid category".to_string())
            }
            ProductError::InsufficientStock {
                requested,
                available,
            } => ApiError::BadRequest(format!(
                "Insufficient stock: requested {requested}, available {available}"
            )),
            ProductError::ValidationError(message) => ApiError::BadRequest(message),
            ProductError::ActorCommunicationError(detail) => {
                ApiError::internal("Product request failed", detail)
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            UserError::AlreadyExists(_) => {
                ApiError::Conflict("User with this email already exists".to_string())
            }
            UserError::ValidationError(message) => ApiError::BadRequest(message),
            UserError::ActorCommunicationError(detail) => {
                ApiError::internal("User request failed", detail)
            }
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::NotFound("Order not found".to_string()),
            OrderError::InvalidUser(_) => ApiError::BadRequest("Invalid user".to_string()),
            OrderError::InvalidProduct(_) => ApiError::BadRequest("Invalid product".to_string()),
            OrderError::InsufficientStock(message) => {
                ApiError::BadRequest(format!("Insufficient stock: {message}"))
            }
            OrderError::ValidationError(message) => ApiError::BadRequest(message),
            OrderError::ActorCommunicationError(detail) => {
                ApiError::internal("Order request failed", detail)
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid email or password".to_string())
            }
            other => ApiError::internal("Authentication failed", other),
        }
    }
}
