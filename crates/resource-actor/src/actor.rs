//! # Generic Actor Server
//!
//! [`ResourceActor`] owns the state of one resource type and processes its
//! messages sequentially. It is the "server" half of the actor pair; the
//! sending half is [`ResourceClient`](crate::ResourceClient).
//!
//! **Concurrency model**: each actor processes one message at a time in its
//! own Tokio task, so the store needs no `Mutex` or `RwLock`; exclusive
//! ownership of state within the task is the synchronisation. Many actors
//! run in parallel; one actor never does.
//!
//! **Uniqueness**: the actor keeps a secondary index over
//! [`ActorEntity::unique_key`] values. Because the index lives inside the
//! actor, a key check and the insert it guards happen atomically with
//! respect to every other request. There is no window for two concurrent
//! creates to both pass a pre-check and then both insert the same slug.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Operations
///
/// * **Create** - generate the next id, build the entity with
///   `from_create_params`, run the `on_create` hook, then claim the entity's
///   unique key in the index. A key already held by another entity fails the
///   request with [`FrameworkError::DuplicateKey`] and nothing is stored.
/// * **Get / FindByKey / List** - clone-out reads; absent entities are
///   `Ok(None)`, never an error.
/// * **Update** - stage `on_update` on a clone of the stored entity. If the
///   update changes the unique key, the new key must be free; a collision
///   fails with `DuplicateKey` and the stored entity is left untouched.
///   On success the staged clone replaces the original and is returned.
/// * **Delete** - `on_delete` hook, then removal from store and index.
/// * **Action** - entity-specific operation via `handle_action`.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// unique_key -> id, maintained for entities that expose a key.
    index: HashMap<String, T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the underlying mpsc channel; when it
    /// is full, client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            index: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes (i.e. until every client has been dropped).
    ///
    /// # Context Injection
    /// `context` is passed to every entity hook. Dependencies on other
    /// actors are provided here, after all actors have been constructed.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, not the full module path.
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match Self::build(id.clone(), params, &context).await {
                        Ok(item) => {
                            if let Some(key) = item.unique_key() {
                                if self.index.contains_key(&key) {
                                    warn!(entity_type, key, "Duplicate key");
                                    let _ = respond_to.send(Err(FrameworkError::DuplicateKey(key)));
                                    continue;
                                }
                                self.index.insert(key, id.clone());
                            }
                            self.next_id += 1;
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindByKey { key, respond_to } => {
                    let item = self
                        .index
                        .get(&key)
                        .and_then(|id| self.store.get(id))
                        .cloned();
                    debug!(entity_type, key, found = item.is_some(), "FindByKey");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(existing) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    // Stage the mutation; the store is only touched on success.
                    let old_key = existing.unique_key();
                    let mut updated = existing.clone();
                    if let Err(e) = updated.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    let new_key = updated.unique_key();
                    if new_key != old_key {
                        if let Some(key) = &new_key {
                            if self.index.contains_key(key) {
                                warn!(entity_type, %id, %key, "Duplicate key");
                                let _ = respond_to
                                    .send(Err(FrameworkError::DuplicateKey(key.clone())));
                                continue;
                            }
                        }
                        if let Some(key) = old_key {
                            self.index.remove(&key);
                        }
                        if let Some(key) = new_key {
                            self.index.insert(key, id.clone());
                        }
                    }

                    self.store.insert(id.clone(), updated.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(updated));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        if let Some(key) = item.unique_key() {
                            self.index.remove(&key);
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn build(id: T::Id, params: T::Create, context: &T::Context) -> Result<T, T::Error> {
        let mut item = T::from_create_params(id, params)?;
        item.on_create(context).await?;
        Ok(item)
    }
}
