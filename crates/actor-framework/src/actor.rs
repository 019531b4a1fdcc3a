//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of
//! entities. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// How many ids a single Create draws before giving up on a generator that keeps
/// returning ids already in the store.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor processes its messages one at a time
/// inside its own task, so the store needs no `Mutex` or `RwLock` even when many
/// clients send requests concurrently.
///
/// # Storage
///
/// * `store` keeps entities in insertion order; listings return it as is.
/// * `index` maps each id to its position in `store`. Entities are never removed,
///   so positions stay valid for the lifetime of the actor.
///
/// # Operations
///
/// * **Create**:
///     1. Asks the id generator for a new id, drawing again while the id is taken.
///     2. Rejects the request with [`FrameworkError::DuplicateId`] only if
///        [`MAX_ID_ATTEMPTS`] draws all collide.
///     3. Calls `T::from_create_params`, then the `on_create` hook.
///     4. Appends the entity and returns a copy of it.
///
/// * **Update**:
///     1. Looks up the position of the id, or answers [`FrameworkError::NotFound`].
///     2. Calls the `on_update` hook on the stored entity.
///     3. Returns the updated entity.
///
/// * **List**:
///     1. Returns a clone of the whole store. Later writes do not affect it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    index: HashMap<T::Id, usize>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id_fn` - Produces the id of every created entity.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            index: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Draws ids until one is not in the store.
    ///
    /// Gives up after [`MAX_ID_ATTEMPTS`] draws and returns the last taken id.
    fn fresh_id(&self) -> Result<T::Id, T::Id> {
        let mut id = (self.next_id_fn)();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.index.contains_key(&id) {
                return Ok(id);
            }
            debug!(%id, "Generated id already taken, drawing another");
            id = (self.next_id_fn)();
        }
        if self.index.contains_key(&id) {
            Err(id)
        } else {
            Ok(id)
        }
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "Product" rather than the full module path
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match self.fresh_id() {
                        Ok(id) => id,
                        Err(taken) => {
                            warn!(
                                entity_type,
                                id = %taken,
                                attempts = MAX_ID_ATTEMPTS,
                                "Duplicate id"
                            );
                            let _ = respond_to
                                .send(Err(FrameworkError::DuplicateId(taken.to_string())));
                            continue;
                        }
                    };

                    match T::from_create_params(id.clone(), params, &context) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.index.insert(id.clone(), self.store.len());
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.index.get(&id).and_then(|&pos| self.store.get_mut(pos))
                    else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item.clone()));
                }
                ResourceRequest::List { query, respond_to } => {
                    debug!(entity_type, ?query, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
