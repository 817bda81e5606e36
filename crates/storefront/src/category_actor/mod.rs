//! # Category Actor
//!
//! The simplest resource in the system: categories are created and listed,
//! never edited. The interesting behaviour is entirely in the store: the
//! slug is the unique key, so duplicate slugs are refused atomically at
//! insert time and `/:slug` lookups are index hits.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Category`]
//! - [`error`] - [`CategoryError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CategoryClient;
use crate::model::Category;
use resource_actor::ResourceActor;

/// Creates a new Category actor and its client.
pub fn new() -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, CategoryClient::new(generic_client))
}
