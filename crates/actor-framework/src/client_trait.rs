//! Shared surface for per-resource clients.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by the typed wrapper around a [`ResourceClient`].
///
/// A wrapper supplies its inner client and a translation from [`FrameworkError`]
/// into its own error type. In return it gets `list` with tracing attached; the
/// operations that need domain naming (insert, update) stay on the wrapper.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Translate a framework failure into `Self::Error`.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// All stored entities, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }
}
