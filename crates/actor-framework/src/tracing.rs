//! # Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging for every actor in the process.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` and `Shutdown` with the final store size
//! - **Requests**: `Create`, `Update` and `List` at `debug`, with their payloads
//! - **Outcomes**: `Created` / `Updated` at `info`, `Not found` / `Duplicate id` at `warn`
//!
//! Every event carries an `entity_type` field, so module paths are hidden.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the framework only
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a short catalog session looks like:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO insert: Created entity_type="Product" id=4f0c... size=1
//! INFO update_by_id: Updated entity_type="Product" id=4f0c...
//! INFO Shutdown entity_type="Product" size=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset. Calling it twice is harmless: the
/// second installation attempt is ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where an event comes from
        .compact()
        .try_init();
}
