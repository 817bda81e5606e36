//! Order endpoint.
//!
//! The handler only parses the request; reference validation and stock
//! reservation happen inside the order actor, atomically with respect to
//! the product's inventory.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::model::{Order, OrderCreate, ProductId, UserId};
use resource_actor::ActorClient;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderRequest {
    pub user_id: Option<u32>,
    pub product_id: Option<u32>,
    pub quantity: Option<u32>,
}

fn missing(field: &str) -> ApiError {
    ApiError::BadRequest(format!("Missing required field: {field}"))
}

/// POST /api/orders: place an order.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let user_id = body.user_id.ok_or_else(|| missing("userId"))?;
    let product_id = body.product_id.ok_or_else(|| missing("productId"))?;
    let quantity = body.quantity.ok_or_else(|| missing("quantity"))?;

    let id = state
        .orders
        .create_order(OrderCreate {
            user_id: UserId::from(user_id),
            product_id: ProductId::from(product_id),
            quantity,
        })
        .await?;

    let order = state
        .orders
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal("Failed to create order".to_string()))?;

    Ok((StatusCode::CREATED, Json(order)))
}
