//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a record type must satisfy to be managed
//! by the generic `ResourceActor`. It names the id, the request shapes (create, update,
//! query), the injected context and the error type, and provides the lifecycle hooks
//! (`from_create_params`, `on_create`, `on_update`).
//!
//! # Request Shapes
//! Associated types tie each record to its own request shapes. A `Product` actor only
//! accepts a product create payload, and the compiler rejects anything else.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] has a default implementation that does nothing (`Ok(())`).
//! Override it only when creation needs extra validation or side effects.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// The `Context` type is injected into every hook when the actor starts, so
/// collaborators (clocks, generators, other clients) are bound late, in `run()`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The request accepted by a listing.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from a freshly generated id and the create payload.
    /// Fields the caller never supplies (timestamps, embedded records) come from `ctx`.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for this entity.
    /// The entity merges the update into its own state.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
