//! # ActorClient Trait
//!
//! Common interface for resource-specific client wrappers. Implementors
//! provide access to the inner [`ResourceClient`] and an error mapping; the
//! trait supplies `get`, `find_by_key`, `list` and `delete` so wrappers only
//! write the operations that need resource-specific payloads.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// `map_error` translates framework failures into the resource's own error
/// type; wrappers typically recover their entity error from
/// [`FrameworkError::EntityError`] there.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch an entity by its unique secondary key.
    #[tracing::instrument(skip(self, key))]
    async fn find_by_key(&self, key: String) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_by_key(key).await.map_err(Self::map_error)
    }

    /// Fetch every entity in the store.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
