//! # Category Client
//!
//! High-level API for the Category actor.

use crate::category_actor::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_category(
        &self,
        params: CategoryCreate,
    ) -> Result<CategoryId, CategoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Look a category up by its slug.
    #[instrument(skip(self))]
    pub async fn find_by_slug(&self, slug: String) -> Result<Option<Category>, CategoryError> {
        debug!("Sending request");
        self.inner.find_by_key(slug).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CategoryError::NotFound(id),
            FrameworkError::DuplicateKey(slug) => CategoryError::AlreadyExists(slug),
            other => {
                other.into_entity_error(|e| CategoryError::ActorCommunicationError(e.to_string()))
            }
        }
    }
}
