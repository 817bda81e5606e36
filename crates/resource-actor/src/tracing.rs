//! # Observability & Tracing
//!
//! Tracing infrastructure for the whole actor system.
//!
//! Structured logging with the `tracing` crate: actor lifecycle events
//! (startup, shutdown, final store size), entity operations (Create, Get,
//! FindByKey, List, Update, Delete, Actions) and errors with entity ids.
//! Log levels are configured via `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # compact workflow logs
//! RUST_LOG=debug cargo run     # full request payloads
//! ```
//!
//! Payloads are logged once per request at `debug` using the `?field`
//! syntax, so `info` output stays one line per operation.

/// Initialise the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields replace module paths
        .compact()
        .init();
}
