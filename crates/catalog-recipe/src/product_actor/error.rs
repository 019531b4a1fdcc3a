//! Error types for the Product actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// No product has the requested id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The id generator kept handing out ids that are already taken.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
