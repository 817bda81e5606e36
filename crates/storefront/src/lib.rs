//! # Storefront
//!
//! An e-commerce API server covering the admin surface (category, product
//! and user management) and the storefront surface (catalog browsing,
//! registration, login, orders).
//!
//! ## Architecture
//!
//! Each resource is owned by its own actor from the [`resource-actor`]
//! framework: the actor holds the resource's store and unique-key index and
//! processes requests sequentially, so slug and e-mail uniqueness are
//! enforced atomically by the store itself. The axum layer in [`http`] is a
//! thin boundary: validate the request, call a client, serialise the
//! response.
//!
//! - [`model`] - domain types and payloads
//! - [`category_actor`], [`product_actor`], [`user_actor`], [`order_actor`]
//!   - entity implementations and per-resource errors
//! - [`clients`] - typed client wrappers used by handlers and tests
//! - [`auth`] - bcrypt password hashing and signed session tokens
//! - [`http`] - the axum router, handlers and error responses
//! - [`lifecycle`] - actor startup, wiring and graceful shutdown
//! - [`config`] - environment configuration
//!
//! [`resource-actor`]: resource_actor

pub mod auth;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;
