//! Concrete [`IntegrationContext`] backed by the [`EntityService`].

use std::sync::Arc;

use climahub_domain::entity::Entity;
use climahub_domain::error::HubError;
use climahub_domain::id::EntityId;

use crate::ports::{EntityRepository, IntegrationContext};
use crate::services::entity_service::EntityService;

/// [`IntegrationContext`] implementation that delegates to `EntityService`.
///
/// Wraps an `Arc`-ed service so it is cheaply cloneable and `Send + Sync`.
/// The generic parameter is confined to this struct — integrations see
/// only the [`IntegrationContext`] trait.
pub struct ServiceContext<R> {
    entity_service: Arc<EntityService<R>>,
}

impl<R> ServiceContext<R> {
    /// Create a new context backed by the given service.
    pub fn new(entity_service: Arc<EntityService<R>>) -> Self {
        Self { entity_service }
    }
}

impl<R> Clone for ServiceContext<R> {
    fn clone(&self) -> Self {
        Self {
            entity_service: Arc::clone(&self.entity_service),
        }
    }
}

impl<R> IntegrationContext for ServiceContext<R>
where
    R: EntityRepository + 'static,
{
    async fn add_entities(&self, entities: Vec<Entity>) -> Result<(), HubError> {
        let count = entities.len();
        for entity in entities {
            self.entity_service.upsert_entity(entity).await?;
        }
        tracing::debug!(count, "entities registered");
        Ok(())
    }

    async fn update_entity(&self, entity: Entity) -> Result<Entity, HubError> {
        self.entity_service.upsert_entity(entity).await
    }

    async fn remove_entity(&self, id: EntityId) -> Result<(), HubError> {
        self.entity_service.remove_entity(id).await?;
        tracing::debug!(%id, "entity removed");
        Ok(())
    }
}
