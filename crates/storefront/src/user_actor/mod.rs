//! # User Actor
//!
//! Manages registered accounts. Registration stores only the bcrypt hash
//! (plaintext credentials stop at the auth layer), and the lowercased e-mail
//! is the unique key, so duplicate registrations are refused by the store
//! itself and login looks users up through the key index.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use resource_actor::ResourceActor;

/// Creates a new User actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, UserClient::new(generic_client))
}
