//! Storage port — repository trait for entity snapshots.

use std::future::Future;

use climahub_domain::entity::Entity;
use climahub_domain::error::HubError;
use climahub_domain::id::EntityId;

/// Persistence for the latest snapshot of every registered entity.
pub trait EntityRepository: Send + Sync {
    /// Insert or replace the snapshot keyed by [`Entity::id`].
    fn upsert(&self, entity: Entity) -> impl Future<Output = Result<Entity, HubError>> + Send;

    fn get_by_id(
        &self,
        id: EntityId,
    ) -> impl Future<Output = Result<Option<Entity>, HubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Entity>, HubError>> + Send;

    fn delete(&self, id: EntityId) -> impl Future<Output = Result<(), HubError>> + Send;
}
