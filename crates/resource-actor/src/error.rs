//! # Framework Errors
//!
//! Common error types shared by every actor and client. Entity-specific
//! failures travel inside [`FrameworkError::EntityError`] and can be
//! recovered with [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// The entity's unique key is already held by another entity in the
    /// same store. Carries the conflicting key.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the typed entity error carried by [`FrameworkError::EntityError`],
    /// mapping every other variant through `map`.
    pub fn into_entity_error<E>(self, map: impl FnOnce(FrameworkError) -> E) -> E
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => *e,
                Err(other) => map(FrameworkError::EntityError(other)),
            },
            other => map(other),
        }
    }
}
