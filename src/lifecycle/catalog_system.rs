use crate::clients::ProductClient;
use tracing::{error, info};

/// Owns the running product actor.
///
/// # Example
///
/// ```
/// use actor_framework::ActorClient;
/// use product_catalog::lifecycle::CatalogSystem;
/// use product_catalog::model::ProductDraft;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), String> {
/// let system = CatalogSystem::new(8);
///
/// let draft = ProductDraft::new("Widget", 9.99, 10).map_err(|e| e.to_string())?;
/// let widget = system
///     .product_client
///     .create_product(draft)
///     .await
///     .map_err(|e| e.to_string())?;
/// assert_eq!(widget.id.0, 1);
/// assert_eq!(system.product_client.list().await.map_err(|e| e.to_string())?.len(), 1);
///
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handles for running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Spawns the product actor with a mailbox of `capacity` messages.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(capacity: usize) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(capacity);
        let product_handle = tokio::spawn(product_actor.run(()));

        Self {
            product_client: ProductClient::new(product_client),
            handles: vec![product_handle],
        }
    }

    /// Drops the system's client and waits for every actor task to finish.
    ///
    /// Returns `Err` if an actor task panicked. Clones of the client held elsewhere
    /// keep the actor alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog...");

        // Closing the last sender ends the actor loop.
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
