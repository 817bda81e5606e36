//! # Order Actor
//!
//! Manages placed orders. This is the actor with real orchestration: its
//! context is `(UserClient, ProductClient)`, injected at `run()` time, and
//! order creation flows through both: validate the user, then the product,
//! reserve stock, compute the total. See [`entity`] for the exact sequence.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, OrderClient::new(generic_client))
}
