//! # System Lifecycle
//!
//! Starts the order actor with the catalog as its context and stops it again.
//!
//! ## Dependency Injection via Context
//!
//! The actor is created without dependencies; the shared [`Catalog`] is handed to
//! `run()` when the task is spawned:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new();
//! let handle = tokio::spawn(order_actor.run(catalog.clone()));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for the actor task to finish
//!
//! Anything still holding an [`OrderClient`] clone (a running [`Kiosk`](crate::kiosk::Kiosk),
//! for instance) keeps the actor alive, so drop those first.

use crate::catalog::Catalog;
use crate::clients::OrderClient;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the running actors of a kiosk.
///
/// # Example
///
/// ```rust
/// use diner::catalog::Catalog;
/// use diner::lifecycle::KioskSystem;
/// use diner::model::SessionPolicy;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = KioskSystem::new(Arc::new(Catalog::default()));
///     let session = system
///         .order_client
///         .open_session(SessionPolicy::default())
///         .await
///         .map_err(|e| e.to_string())?;
///     assert!(system.order_client.summary(session).await.is_ok());
///     system.shutdown().await
/// }
/// ```
pub struct KioskSystem {
    /// Client for interacting with the order actor
    pub order_client: OrderClient,

    /// The menu every session prices against
    pub catalog: Arc<Catalog>,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KioskSystem {
    /// Spawns the order actor. Must be called inside a Tokio runtime.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let (order_actor, generic_client) = crate::order_actor::new();
        let order_handle = tokio::spawn(order_actor.run(Arc::clone(&catalog)));
        info!(items = catalog.len(), "Kiosk system started");

        Self {
            order_client: OrderClient::new(generic_client),
            catalog,
            handles: vec![order_handle],
        }
    }

    /// Drops the client and waits for every actor task to finish.
    ///
    /// Returns an error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
