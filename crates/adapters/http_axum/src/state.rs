//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use climahub_app::ports::{EntityRepository, Integration};
use climahub_app::services::entity_service::EntityService;

/// Application state shared across all axum handlers.
///
/// Generic over the entity repository and the integration to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R, I> {
    /// Entity snapshot service.
    pub entity_service: Arc<EntityService<R>>,
    /// Integration receiving service calls. Handlers take the read lock;
    /// the daemon takes the write lock for teardown.
    pub integration: Arc<RwLock<I>>,
}

impl<R, I> Clone for AppState<R, I> {
    fn clone(&self) -> Self {
        Self {
            entity_service: Arc::clone(&self.entity_service),
            integration: Arc::clone(&self.integration),
        }
    }
}

impl<R, I> AppState<R, I>
where
    R: EntityRepository + 'static,
    I: Integration + 'static,
{
    /// Create a new application state from already shared instances.
    pub fn new(entity_service: Arc<EntityService<R>>, integration: Arc<RwLock<I>>) -> Self {
        Self {
            entity_service,
            integration,
        }
    }
}
