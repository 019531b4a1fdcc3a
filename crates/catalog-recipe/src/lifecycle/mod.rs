//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and stops the actors behind the catalog.
//!
//! ## The CatalogSystem Pattern
//!
//! [`CatalogSystem`] is an explicitly constructed object that owns everything the
//! catalog needs. Nothing lives in a global: two systems in one process are two
//! independent catalogs.
//!
//! ```rust,ignore
//! let system = CatalogSystem::new();
//! let product = system.product_client.insert(dto).await?;
//! system.shutdown().await?;
//! ```
//!
//! ## Dependency Injection via Context
//!
//! The product actor receives its [`DataGenerator`](crate::faker::DataGenerator) as
//! its `Context` when it starts. Swap the generator through
//! [`CatalogSystem::with_generator`] to get repeatable ids and timestamps.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - the join handle resolves, or reports a panic
//!
//! Clones of `product_client` handed out elsewhere keep the actor alive until they
//! are dropped too.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see [`actor_framework::tracing`] for
//! what each actor logs.

pub mod catalog_system;

pub use actor_framework::tracing::setup_tracing;
pub use catalog_system::*;
