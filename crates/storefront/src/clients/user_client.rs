//! # User Client
//!
//! High-level API for the User actor.

use crate::model::{User, UserCreate, UserId};
use crate::user_actor::UserError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Register a new account. The payload carries a password *hash*;
    /// hashing happens in the auth layer before this point.
    #[instrument(skip(self, params))]
    pub async fn register_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Look a user up by (lowercased) e-mail address.
    #[instrument(skip(self, email))]
    pub async fn find_by_email(&self, email: String) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        self.inner.find_by_key(email).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::DuplicateKey(email) => UserError::AlreadyExists(email),
            other => {
                other.into_entity_error(|e| UserError::ActorCommunicationError(e.to_string()))
            }
        }
    }
}
