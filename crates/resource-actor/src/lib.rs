//! # Resource Actor Framework
//!
//! Building blocks for type-safe, concurrent resource management: each
//! resource type (Category, Product, User, …) gets its own actor that owns
//! the resource's store and processes requests sequentially, while callers
//! talk to it through a cloneable, typed client.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain model and its lifecycle
//!    hooks; business logic lives here.
//! 2. **Runtime** ([`ResourceActor`]) - the event loop that owns the store
//!    and the unique-key index.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - the async API
//!    the rest of the application uses.
//!
//! ## Concurrency model
//!
//! Each actor runs in its own Tokio task and processes messages one at a
//! time, so entity state needs no locks. Actors run in parallel with each
//! other; cross-resource work goes through the other resource's client,
//! injected as the actor's `Context` when `run()` is called. Because the
//! actor owns its unique-key index, "check then insert" is a single atomic
//! step from the point of view of every other request: duplicate slugs or
//! e-mails cannot race their way in.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Tag {
//!     id: u32,
//!     slug: String,
//! }
//!
//! #[derive(Debug)]
//! struct TagCreate {
//!     slug: String,
//! }
//! #[derive(Debug)]
//! struct TagUpdate {
//!     slug: Option<String>,
//! }
//! #[derive(Debug)]
//! enum TagAction {}
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("tag error")]
//! struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = u32;
//!     type Create = TagCreate;
//!     type Update = TagUpdate;
//!     type Action = TagAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TagError;
//!
//!     fn from_create_params(id: u32, params: TagCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, slug: params.slug })
//!     }
//!
//!     fn unique_key(&self) -> Option<String> {
//!         Some(self.slug.clone())
//!     }
//!
//!     async fn on_update(&mut self, update: TagUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(slug) = update.slug {
//!             self.slug = slug;
//!         }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, _: TagAction, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Tag>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create(TagCreate { slug: "sale".into() })
//!         .await
//!         .unwrap();
//!     let tag = client.find_by_key("sale").await.unwrap().unwrap();
//!     assert_eq!(tag.id, id);
//!
//!     // A second "sale" is refused by the store itself.
//!     let dup = client.create(TagCreate { slug: "sale".into() }).await;
//!     assert!(dup.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockClient`](mock::MockClient), a drop-in
//! client answered from queued expectations, for testing code that talks to
//! actors without spawning any.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
