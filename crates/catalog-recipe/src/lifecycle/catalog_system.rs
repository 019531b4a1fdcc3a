use crate::clients::ProductClient;
use crate::config::CatalogConfig;
use crate::faker::{DataGenerator, FakeData};
use crate::product_actor;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while stopping the system.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// An actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the product catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the product actor
/// - **Dependency Wiring**: handing the data generator to the actor
///
/// Must be created inside a Tokio runtime.
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSystem {
    /// Starts a catalog with the default configuration and random fake data.
    pub fn new() -> Self {
        Self::with_generator(CatalogConfig::default(), Arc::new(FakeData))
    }

    /// Starts a catalog with the given configuration and random fake data.
    pub fn with_config(config: CatalogConfig) -> Self {
        Self::with_generator(config, Arc::new(FakeData))
    }

    /// Starts a catalog whose ids, timestamps and category names come from `generator`.
    pub fn with_generator(config: CatalogConfig, generator: Arc<dyn DataGenerator>) -> Self {
        let (product_actor, product_resource_client) =
            product_actor::new(config.channel_capacity, generator.clone());
        let product_client = ProductClient::new(product_resource_client);

        let product_handle = tokio::spawn(product_actor.run(generator));
        info!(channel_capacity = config.channel_capacity, "Catalog started");

        Self {
            product_client,
            handles: vec![product_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops the clients this system holds, then waits for every actor task. Returns
    /// an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down catalog...");

        // Closing the channel ends the actor's receive loop.
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
