//! # Generic Messages
//!
//! The message types exchanged between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the standard lifecycle of a persistent resource
/// (create, read by id, by unique key or as the whole collection, update,
/// delete), plus an `Action` variant for resource-specific logic that does
/// not fit the CRUD model. Each variant uses the associated types of
/// [`ActorEntity`], so a request for one entity type cannot be sent to an
/// actor managing another.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Look up an entity by its unique secondary key (slug, e-mail, …).
    FindByKey {
        key: String,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of every entity in the store, in unspecified order.
    List { respond_to: Response<Vec<T>> },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete { id: T::Id, respond_to: Response<()> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
