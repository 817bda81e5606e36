use crate::clients::{CategoryClient, OrderClient, ProductClient, UserClient};
use crate::{category_actor, order_actor, product_actor, user_actor};
use tracing::{error, info};

/// The running set of resource actors behind the API.
///
/// `StoreSystem` starts one actor per resource and hands out the clients the
/// HTTP layer uses. Dropping the system's clients is the shutdown signal;
/// [`StoreSystem::shutdown`] does that and then waits for every actor task
/// to finish.
pub struct StoreSystem {
    /// Client for interacting with the Category actor
    pub category_client: CategoryClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Creates and starts all actors, wiring their dependencies.
    ///
    /// Actors are constructed first, without dependencies, then started with
    /// their context injected: the product actor gets the category client
    /// (reference validation), the order actor gets the user and product
    /// clients (validation and stock reservation).
    pub fn new() -> Self {
        // 1. Create actors (no dependencies yet)
        let (category_actor, category_client) = category_actor::new();
        let (product_actor, product_client) = product_actor::new();
        let (user_actor, user_client) = user_actor::new();
        let (order_actor, order_client) = order_actor::new();

        // 2. Start actors with injected context
        let category_handle = tokio::spawn(category_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(category_client.clone()));
        let user_handle = tokio::spawn(user_actor.run(()));
        let order_handle =
            tokio::spawn(order_actor.run((user_client.clone(), product_client.clone())));

        Self {
            category_client,
            product_client,
            user_client,
            order_client,
            handles: vec![category_handle, product_handle, user_handle, order_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels; each actor drains
    /// its queue and exits. Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.category_client);
        drop(self.product_client);
        drop(self.user_client);
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

impl Default for StoreSystem {
    fn default() -> Self {
        Self::new()
    }
}
