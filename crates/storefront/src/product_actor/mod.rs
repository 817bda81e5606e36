//! # Product Actor
//!
//! Manages the catalog. Beyond plain CRUD the product actor demonstrates the
//! two coordination patterns of the system:
//!
//! - **Context dependency**: the actor runs with a [`CategoryClient`] as its
//!   context, so `on_create` can verify the category reference against the
//!   category actor.
//! - **Custom action**: [`ProductAction::ReserveStock`] checks and decrements
//!   inventory in one step inside the actor, which is what keeps concurrent
//!   orders from overselling.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] for stock management
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, ProductClient::new(generic_client))
}
