//! # ActorEntity Trait
//!
//! The contract every resource (Category, Product, User, Order, …) must
//! implement to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//! Associated types pin down the id, the create/update payloads, custom
//! actions, the injected context and the error type, so a `Category` actor
//! can never be sent a `ProductCreate` payload.
//!
//! # Provided Methods (Hooks)
//! `on_create` and `on_delete` have default no-op implementations; override
//! them for cross-resource validation or side effects (e.g. a product
//! checking that its category exists, an order reserving stock).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by
/// [`ResourceActor`](crate::ResourceActor).
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can call other actors. The
/// `Context` type is injected into every hook at `run()` time, which lets
/// dependent actors be wired after construction.
///
/// # Unique keys
/// An entity may expose a single unique secondary key through
/// [`ActorEntity::unique_key`] (a slug, an e-mail address). The owning actor
/// maintains an index over these keys and rejects any create or update that
/// would duplicate one; the index is also what serves
/// [`find_by_key`](crate::ResourceClient::find_by_key) lookups. Uniqueness is
/// therefore enforced by the store itself, atomically with the write.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `ReserveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity. One enum per actor; it must be the
    /// union of everything the entity's hooks can fail with.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The entity's unique secondary key, if it has one.
    ///
    /// Entities returning `Some` get store-enforced uniqueness and
    /// key-based lookup. The default is `None` (no secondary key).
    fn unique_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// Use this hook for validation or side effects involving other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received. The mutation is staged on
    /// a copy of the entity and only committed once the hook (and the store's
    /// key re-index) succeeds.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
