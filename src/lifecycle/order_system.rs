use crate::clients::{OrderClient, ProductClient, UserClient};
use thiserror::Error;
use tracing::{error, info};

/// Mailbox capacity used by [`OrderSystem::new`].
pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

/// Errors raised while stopping the system.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// An actor task panicked or was aborted.
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the order management system.
///
/// `OrderSystem` starts the three actors, wires the order actor to the user
/// and product actors, and stops everything in [`shutdown`](Self::shutdown).
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let user_id = system.user_client.create_user(user).await?;
/// let product_id = system.product_client.create_product(product).await?;
/// let order = system
///     .order_client
///     .create_order(OrderCreate::new(user_id, [(product_id, 2)]))
///     .await?;
/// system.order_client.confirm_order(order.id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handles for all running actors, order actor first
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Starts the system with the default mailbox capacity.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAILBOX_CAPACITY)
    }

    /// Starts the system with `capacity` slots in every actor's mailbox.
    pub fn with_capacity(capacity: usize) -> Self {
        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = crate::user_actor::new(capacity);
        let (product_actor, product_client) = crate::product_actor::new(capacity);
        let (order_actor, order_client) =
            crate::order_actor::new(capacity, user_client.clone(), product_client.clone());

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(
            order_actor.run((user_client.clone(), product_client.clone())),
        );

        info!(capacity, "Order system started");

        Self {
            order_client,
            user_client,
            product_client,
            handles: vec![order_handle, user_handle, product_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops the system's clients and waits for every actor to drain its
    /// mailbox and stop. Clones of the clients held elsewhere keep their actor
    /// running, so drop them first. The order actor holds user and product
    /// clients in its context; those are released when it stops.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
