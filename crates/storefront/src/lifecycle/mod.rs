//! # System Lifecycle & Orchestration
//!
//! Individual actors are simple; wiring them together is where the
//! complexity lives. This module owns that wiring:
//!
//! 1. **Actor creation** - instantiate every actor and its client
//! 2. **Dependency injection** - pass clients into `run(context)` (late
//!    binding, so construction order never fights the dependency graph)
//! 3. **Graceful shutdown** - drop clients, let each actor drain and exit,
//!    await the task handles
//!
//! The dependency graph is acyclic: products depend on categories (reference
//! validation), orders depend on users and products (validation plus stock
//! reservation). Context clients held by other actors are clones and do not
//! keep the system alive once the [`StoreSystem`] itself is dropped.

pub mod store_system;

pub use store_system::*;
