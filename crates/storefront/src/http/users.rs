//! User endpoints (admin surface).
//!
//! The password hash never appears in any of these responses; the model
//! skips it at serialisation time. `orderCount` is derived on the fly from
//! the order store.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use super::{ApiError, AppState};
use crate::model::{User, UserId};
use resource_actor::ActorClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithOrderCount {
    #[serde(flatten)]
    pub user: User,
    pub order_count: usize,
}

/// GET /api/users: all users with their order count, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserWithOrderCount>>, ApiError> {
    let mut users = state.users.list().await?;
    users.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut order_counts: HashMap<UserId, usize> = HashMap::new();
    for order in state.orders.list().await? {
        *order_counts.entry(order.user_id).or_default() += 1;
    }

    let users = users
        .into_iter()
        .map(|user| {
            let order_count = order_counts.get(&user.id).copied().unwrap_or(0);
            UserWithOrderCount { user, order_count }
        })
        .collect();

    Ok(Json(users))
}

/// GET /api/users/edit/:id: one user.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .get(UserId::from(id))
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// DELETE /api/users/edit/:id: delete a user.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, ApiError> {
    state.users.delete(UserId::from(id)).await?;

    Ok(Json(json!({
        "success": true,
        "message": "User deleted successfully"
    })))
}
