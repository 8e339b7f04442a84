//! Integration port — lifecycle and service-call handling for vendor integrations.
//!
//! An integration bridges an external system (a vendor cloud account, a
//! simulated account, …) into climahub. It registers its entities on setup
//! and handles service calls directed at entities it owns.

use std::future::Future;

use climahub_domain::entity::Entity;
use climahub_domain::error::HubError;
use climahub_domain::id::EntityId;

/// Context provided to integrations for registering entities.
///
/// This is a **port** — integrations call it to hand their entities to the
/// hub. The binary crate provides a concrete implementation backed by
/// `EntityService`. Integrations may keep a clone to push snapshots after
/// setup.
pub trait IntegrationContext: Clone + Send + Sync + 'static {
    /// Register a batch of entities in one call.
    fn add_entities(
        &self,
        entities: Vec<Entity>,
    ) -> impl Future<Output = Result<(), HubError>> + Send;

    /// Store a fresh snapshot of an already registered entity.
    fn update_entity(&self, entity: Entity)
    -> impl Future<Output = Result<Entity, HubError>> + Send;

    /// Drop the stored snapshot of an entity the integration no longer exposes.
    fn remove_entity(&self, id: EntityId) -> impl Future<Output = Result<(), HubError>> + Send;
}

/// A pluggable vendor integration.
///
/// The binary crate calls the lifecycle methods in order:
///
/// 1. [`setup`](Self::setup) — build entities and register them via `ctx`
/// 2. (the server runs, forwarding service calls via [`handle_service_call`](Self::handle_service_call))
/// 3. [`teardown`](Self::teardown) — release entities and remove their snapshots
pub trait Integration: Send + Sync {
    /// Unique name identifying this integration (e.g. `"nexia"`).
    fn name(&self) -> &'static str;

    /// Build this integration's entities and register them with the hub.
    fn setup(
        &mut self,
        ctx: &impl IntegrationContext,
    ) -> impl Future<Output = Result<(), HubError>> + Send;

    /// Handle a service call (e.g. `turn_on` on a scene) for an entity owned
    /// by this integration.
    ///
    /// Returns the entity snapshot after handling the call.
    fn handle_service_call(
        &self,
        entity_id: EntityId,
        service: &str,
        data: serde_json::Value,
    ) -> impl Future<Output = Result<Entity, HubError>> + Send;

    /// Called on graceful shutdown.
    fn teardown(&mut self) -> impl Future<Output = Result<(), HubError>> + Send;
}
