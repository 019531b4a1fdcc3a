//! # Product Actor
//!
//! This module implements the Product resource actor: the in-memory catalog.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use catalog_recipe::clients::ProductClient;
//! use catalog_recipe::faker::{DataGenerator, FakeData};
//! use catalog_recipe::model::{CategoryId, CreateProductDto};
//! use catalog_recipe::product_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator: Arc<dyn DataGenerator> = Arc::new(FakeData);
//!
//!     // Create actor and client
//!     let (actor, generic_client) = product_actor::new(32, generator.clone());
//!     let client = ProductClient::new(generic_client);
//!
//!     // Start the actor with its data generator
//!     tokio::spawn(actor.run(generator));
//!
//!     let product = client
//!         .insert(CreateProductDto {
//!             title: "Shirt".to_string(),
//!             color: "blue".to_string(),
//!             description: "Cotton shirt".to_string(),
//!             stock: 10,
//!             size: None,
//!             tags: vec![],
//!             category_id: CategoryId::from("c-1"),
//!         })
//!         .await?;
//!     assert_eq!(product.category.id, CategoryId::from("c-1"));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::faker::DataGenerator;
use crate::model::{Product, ProductId};
use actor_framework::{ResourceActor, ResourceClient};
use std::sync::Arc;

/// Creates a new Product actor and its client.
///
/// Product ids come from `generator`. The same generator should be passed to
/// `run()` so timestamps and category names come from it too.
pub fn new(
    buffer_size: usize,
    generator: Arc<dyn DataGenerator>,
) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size, move || ProductId(generator.uuid()))
}
