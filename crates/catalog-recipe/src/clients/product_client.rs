//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes the catalog operations:
//! [`insert`](ProductClient::insert), [`update_by_id`](ProductClient::update_by_id)
//! and `list` (inherited from [`ActorClient`]).
use crate::model::{CreateProductDto, Product, ProductId, UpdateProductDto};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(ProductId(id)),
            FrameworkError::DuplicateId(id) => ProductError::DuplicateId(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(product_error) => *product_error,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Adds a product to the catalog and returns it with its generated fields.
    #[instrument(skip(self, params), fields(title = %params.title))]
    pub async fn insert(&self, params: CreateProductDto) -> Result<Product, ProductError> {
        debug!(?params, "Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Merges `changes` into the product with `id` and returns the result.
    ///
    /// Fails with [`ProductError::NotFound`] when no product has that id.
    #[instrument(skip(self, changes))]
    pub async fn update_by_id(
        &self,
        id: ProductId,
        changes: UpdateProductDto,
    ) -> Result<Product, ProductError> {
        debug!(?changes, "Sending request");
        self.inner.update(id, changes).await.map_err(Self::map_error)
    }
}
