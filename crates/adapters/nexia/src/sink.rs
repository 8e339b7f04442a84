//! Type-erased handle on the hub context, kept after setup.

use std::future::Future;
use std::pin::Pin;

use climahub_app::ports::IntegrationContext;
use climahub_domain::entity::Entity;
use climahub_domain::error::HubError;
use climahub_domain::id::EntityId;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe subset of [`IntegrationContext`] used once setup is over.
pub(crate) trait SnapshotSink: Send + Sync {
    /// Store fresh snapshots; a rejected snapshot is logged and skipped.
    fn publish(&self, entities: Vec<Entity>) -> BoxFuture<'_, ()>;

    /// Remove the stored snapshots of `ids`, stopping at the first failure.
    fn retract(&self, ids: Vec<EntityId>) -> BoxFuture<'_, Result<(), HubError>>;
}

impl<X: IntegrationContext> SnapshotSink for X {
    fn publish(&self, entities: Vec<Entity>) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            let count = entities.len();
            for entity in entities {
                let entity_id = entity.entity_id.clone();
                if let Err(err) = self.update_entity(entity).await {
                    tracing::warn!(%entity_id, error = %err, "failed to store scene snapshot");
                }
            }
            tracing::debug!(count, "scene snapshots published");
        })
    }

    fn retract(&self, ids: Vec<EntityId>) -> BoxFuture<'_, Result<(), HubError>> {
        Box::pin(async move {
            for id in ids {
                self.remove_entity(id).await?;
            }
            Ok(())
        })
    }
}
