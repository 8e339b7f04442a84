//! In-memory implementation of [`EntityRepository`].

use std::collections::HashMap;

use tokio::sync::RwLock;

use climahub_app::ports::EntityRepository;
use climahub_domain::entity::Entity;
use climahub_domain::error::HubError;
use climahub_domain::id::EntityId;

/// Entity snapshots keyed by [`EntityId`], guarded by a tokio `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryEntityRepository {
    entities: RwLock<HashMap<EntityId, Entity>>,
}

impl InMemoryEntityRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityRepository for InMemoryEntityRepository {
    async fn upsert(&self, entity: Entity) -> Result<Entity, HubError> {
        self.entities
            .write()
            .await
            .insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<Entity>, HubError> {
        Ok(self.entities.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Entity>, HubError> {
        Ok(self.entities.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: EntityId) -> Result<(), HubError> {
        self.entities.write().await.remove(&id);
        Ok(())
    }
}
