//! # Resource Clients
//!
//! Domain-named wrappers around the generic [`ResourceClient`](resource_actor::ResourceClient).
//! Each wrapper pins the entity type, maps framework errors back into the
//! resource's own error enum, and adds the operations that need
//! resource-specific payloads (`create_category`, `reserve_stock`, …).
//! The shared `get`/`list`/`find_by_key`/`delete` come from
//! [`ActorClient`](resource_actor::ActorClient).

pub mod category_client;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use category_client::CategoryClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;
