//! Errors produced by the framework itself, independent of any entity type.
//!
//! Clients for a concrete resource translate these into their own error enum
//! through [`ActorClient::map_error`](crate::ActorClient::map_error).

/// Failure of a request sent through a `ResourceClient`.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's mailbox is closed; the request was never delivered.
    #[error("Actor closed")]
    ActorClosed,
    /// The request was delivered but the actor went away before replying.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity is stored under the id (rendered with `Display`).
    #[error("Item not found: {0}")]
    NotFound(String),
    /// Every id the generator produced for one create was already in the store.
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    /// A hook on the entity rejected the request.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
