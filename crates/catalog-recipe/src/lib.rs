//! # Catalog Recipe
//!
//! Two small, independent recipes built on typed APIs:
//!
//! - **[transform]**: converts a text into its characters and back, with the result
//!   type fixed by the input type.
//! - **The catalog**: an in-memory product collection with insert, shallow-merge update
//!   by id and listing, run by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! ## Module Tour
//!
//! - [`model`]: the [`Product`](model::Product) record and the request shapes derived from it.
//! - [`product_actor`]: how `Product` plugs into the actor framework.
//! - [`clients`]: [`ProductClient`](clients::ProductClient), the catalog's public API.
//! - [`faker`]: the generator of ids, timestamps and category names.
//! - [`lifecycle`]: [`CatalogSystem`](lifecycle::CatalogSystem) starts and stops the actor.
//! - [`config`]: environment-driven settings.

pub mod clients;
pub mod config;
pub mod faker;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod transform;
