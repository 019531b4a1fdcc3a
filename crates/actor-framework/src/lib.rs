//! # Actor Framework
//!
//! This crate provides the building blocks for type-safe, concurrent record collections.
//! It applies a **Resource-Oriented Architecture (ROA)** on top of the **Actor Model**:
//! every resource type gets one actor that owns its collection, and callers talk to it
//! through a cloneable client.
//!
//! ## Why ROA + Actor Model?
//!
//! - **Uniform API**: every resource supports the same Create / Update / List requests.
//! - **Isolated state**: the collection lives inside one task, so there is no shared memory
//!   and no lock to forget.
//! - **Sequential processing**: requests are handled one at a time, which makes
//!   read-modify-write updates safe even with many concurrent callers.
//!
//! ## Core Components
//!
//! - [`ActorEntity`]: the trait a record type implements (id, request shapes, hooks).
//! - [`ResourceActor`]: the server half; owns the insertion-ordered store.
//! - [`ResourceClient`]: the client half; sends requests and awaits replies.
//! - [`ActorClient`]: a trait resource-specific clients implement to inherit `list`.
//! - [`FrameworkError`]: failures of the plumbing itself (closed actor, unknown id, ...).
//!
//! ## Quick Start
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u32,
//!     text: String,
//! }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] struct NoteUpdate { text: Option<String> }
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Query = ();
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u32, params: NoteCreate, _: &()) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(text) = update.text { self.text = text; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let counter = AtomicU32::new(1);
//!     let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
//!     let (actor, client) = ResourceActor::<Note>::new(10, next_id);
//!     tokio::spawn(actor.run(()));
//!
//!     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     let notes = client.list(()).await.unwrap();
//!     assert_eq!(notes.len(), 1);
//!     assert_eq!(notes[0].id, note.id);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Collaborators are injected when the actor starts, via `run(context)`, not at
//! construction. Each entity names what it needs through `type Context`; the context is
//! handed to every hook.
//!
//! ## Testing
//!
//! The [`mock`] module answers client requests from a queue of expectations, so client
//! wrappers can be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
