//! # Product Client
//!
//! High-level API for the Product actor, including the stock-reservation
//! action used by the order flow.

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Look a product up by its slug.
    #[instrument(skip(self))]
    pub async fn find_by_slug(&self, slug: String) -> Result<Option<Product>, ProductError> {
        debug!("Sending request");
        self.inner.find_by_key(slug).await.map_err(Self::map_error)
    }

    /// Reserve a specific amount of stock for a product.
    ///
    /// Returns `Ok(())` if successful, or an error if insufficient stock.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: u32) -> Result<(), ProductError> {
        debug!(%id, quantity, "Reserving stock");
        self.inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::DuplicateKey(slug) => ProductError::AlreadyExists(slug),
            other => {
                other.into_entity_error(|e| ProductError::ActorCommunicationError(e.to_string()))
            }
        }
    }
}
