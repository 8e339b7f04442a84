//! Entity service — use-cases for the registry of entity snapshots.

use climahub_domain::entity::Entity;
use climahub_domain::error::{HubError, NotFoundError};
use climahub_domain::id::EntityId;
use climahub_domain::time::now;

use crate::ports::EntityRepository;

/// Application service holding the latest snapshot of every entity.
pub struct EntityService<R> {
    repo: R,
}

impl<R: EntityRepository> EntityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and store a snapshot, replacing any previous one with the same id.
    ///
    /// `last_changed` is carried over from the stored snapshot unless the
    /// state differs; `last_updated` is always bumped.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] if invariants fail, or a storage
    /// error propagated from the repository.
    pub async fn upsert_entity(&self, mut entity: Entity) -> Result<Entity, HubError> {
        entity.validate()?;
        let at = now();
        match self.repo.get_by_id(entity.id).await? {
            Some(stored) => {
                let state = entity.state;
                entity.state = stored.state;
                entity.last_changed = stored.last_changed;
                entity.update_state(state, at);
            }
            None => {
                entity.last_changed = at;
                entity.last_updated = at;
            }
        }
        self.repo.upsert(entity).await
    }

    /// Look up an entity by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotFound`] when no entity with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_entity(&self, id: EntityId) -> Result<Entity, HubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Entity",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all entities, ordered by entity id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_entities(&self) -> Result<Vec<Entity>, HubError> {
        let mut entities = self.repo.get_all().await?;
        entities.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));
        Ok(entities)
    }

    /// Remove an entity by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn remove_entity(&self, id: EntityId) -> Result<(), HubError> {
        self.repo.delete(id).await
    }
}
