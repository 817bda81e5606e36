//! Entity trait implementation for the Order domain type.
//!
//! Orders coordinate across actors: `on_create` runs with the user and
//! product clients as context, validating both references and reserving
//! stock before the order is stored. The reservation is the last step, so a
//! failed order never leaves inventory half-claimed.

use super::error::OrderError;
use crate::clients::{ProductClient, UserClient};
use crate::model::{Order, OrderCreate, OrderId};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = (UserClient, ProductClient);
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.quantity == 0 {
            return Err(OrderError::ValidationError(
                "Quantity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            id,
            user_id: params.user_id,
            product_id: params.product_id,
            quantity: params.quantity,
            // Filled in by on_create once the product is known.
            total: 0.0,
            status: "Created".to_string(),
            created_at: Utc::now(),
        })
    }

    /// Validates the user and product references, reserves stock and
    /// computes the total.
    async fn on_create(&mut self, ctx: &(UserClient, ProductClient)) -> Result<(), Self::Error> {
        let (users, products) = ctx;

        let user = users
            .get(self.user_id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if user.is_none() {
            return Err(OrderError::InvalidUser(self.user_id.to_string()));
        }

        let product = products
            .get(self.product_id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
            .ok_or_else(|| OrderError::InvalidProduct(self.product_id.to_string()))?;

        // Last side-effecting step: nothing to roll back if it fails.
        products
            .reserve_stock(self.product_id, self.quantity)
            .await
            .map_err(|e| match e {
                ProductError::InsufficientStock {
                    requested,
                    available,
                } => OrderError::InsufficientStock(format!(
                    "requested {requested}, available {available}"
                )),
                ProductError::NotFound(id) => OrderError::InvalidProduct(id),
                other => OrderError::ActorCommunicationError(other.to_string()),
            })?;

        self.total = product.price * f64::from(self.quantity);
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
