//! # climahub-adapter-nexia
//!
//! Nexia integration — exposes the automations defined on a Nexia / Trane
//! climate-control account as scenes.
//!
//! ## How it works
//!
//! On setup, every automation id reported by the account's home is resolved
//! and wrapped in an [`AutomationScene`]. All scenes are handed to the hub in
//! one batch. Activating a scene triggers the automation in the vendor cloud
//! and, after [`NexiaConfig::scene_activation_secs`], asks the shared
//! coordinator for a full refresh. Once the refresh has landed, successful
//! or not, every scene is snapshotted again and pushed to the hub through the
//! context kept from setup. Teardown removes the snapshots it registered.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `climahub-app` and `climahub-domain`.
//! The account itself is reached only through the `Coordinator` port.

mod config;
pub mod scene;
mod sink;

pub use config::NexiaConfig;
pub use scene::{AutomationScene, build_scenes};

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use climahub_app::platform::PlatformEntity;
use climahub_app::ports::{Coordinator, Integration, IntegrationContext, Scheduler};
use climahub_domain::entity::Entity;
use climahub_domain::error::{HubError, NotFoundError, ValidationError};
use climahub_domain::id::EntityId;

use crate::sink::SnapshotSink;

/// Scene integration for one Nexia account.
pub struct NexiaIntegration<C: Coordinator, S> {
    config: NexiaConfig,
    coordinator: Arc<C>,
    scheduler: Arc<S>,
    scenes: Arc<HashMap<EntityId, AutomationScene<C, S>>>,
    sink: Option<Arc<dyn SnapshotSink>>,
}

impl<C: Coordinator, S> NexiaIntegration<C, S> {
    /// Create the integration over a shared coordinator and scheduler.
    ///
    /// No scene exists until [`setup`](Integration::setup) has run.
    #[must_use]
    pub fn new(config: NexiaConfig, coordinator: Arc<C>, scheduler: Arc<S>) -> Self {
        Self {
            config,
            coordinator,
            scheduler,
            scenes: Arc::default(),
            sink: None,
        }
    }

    /// Check whether this integration owns the given entity.
    #[must_use]
    pub fn owns_entity(&self, entity_id: EntityId) -> bool {
        self.scenes.contains_key(&entity_id)
    }

    /// Scenes created by the last setup, in no particular order.
    pub fn scenes(&self) -> impl Iterator<Item = &AutomationScene<C, S>> {
        self.scenes.values()
    }
}

impl<C, S> NexiaIntegration<C, S>
where
    C: Coordinator + 'static,
    S: Scheduler + 'static,
{
    /// Snapshot every scene and hand the result to the hub.
    ///
    /// Does nothing when the integration was torn down (or never set up)
    /// by the time the future runs.
    fn publish_snapshots(&self) -> impl Future<Output = ()> + Send + 'static {
        let scenes = Arc::downgrade(&self.scenes);
        let sink = self.sink.clone();
        async move {
            let Some(sink) = sink else { return };
            let entities: Vec<Entity> = {
                let Some(scenes) = scenes.upgrade() else { return };
                scenes
                    .values()
                    .filter_map(|scene| match scene.to_entity() {
                        Ok(entity) => Some(entity),
                        Err(err) => {
                            tracing::warn!(unique_id = %scene.unique_id(), error = %err, "cannot snapshot scene");
                            None
                        }
                    })
                    .collect()
            };
            sink.publish(entities).await;
        }
    }
}

impl<C, S> Integration for NexiaIntegration<C, S>
where
    C: Coordinator + 'static,
    S: Scheduler + 'static,
{
    fn name(&self) -> &'static str {
        "nexia"
    }

    async fn setup(&mut self, ctx: &impl IntegrationContext) -> Result<(), HubError> {
        let scenes = build_scenes(
            &self.coordinator,
            &self.scheduler,
            self.config.scene_activation_time(),
        )?;
        let entities = scenes
            .iter()
            .map(PlatformEntity::to_entity)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(count = entities.len(), "nexia automation scenes discovered");
        ctx.add_entities(entities).await?;

        self.scenes = Arc::new(scenes.into_iter().map(|scene| (scene.id(), scene)).collect());
        let sink: Arc<dyn SnapshotSink> = Arc::new(ctx.clone());
        self.sink = Some(sink);
        Ok(())
    }

    async fn handle_service_call(
        &self,
        entity_id: EntityId,
        service: &str,
        _data: serde_json::Value,
    ) -> Result<Entity, HubError> {
        let scene = self.scenes.get(&entity_id).ok_or_else(|| NotFoundError {
            entity: "Entity",
            id: entity_id.to_string(),
        })?;

        match service {
            "turn_on" | "activate" => scene.activate_then(self.publish_snapshots()).await?,
            other => return Err(ValidationError::UnsupportedService(other.to_string()).into()),
        }

        scene.to_entity()
    }

    async fn teardown(&mut self) -> Result<(), HubError> {
        let ids: Vec<EntityId> = std::mem::take(&mut self.scenes).keys().copied().collect();
        let count = ids.len();
        if let Some(sink) = self.sink.take() {
            sink.retract(ids).await?;
        }
        tracing::info!(count, "nexia integration stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use climahub_adapter_virtual::{VirtualAutomationConfig, VirtualCoordinator, VirtualHome};
    use climahub_app::scheduler::TokioScheduler;
    use climahub_domain::entity::{AttributeValue, EntityState};

    /// Captures every call made through the [`IntegrationContext`].
    #[derive(Clone, Default)]
    struct RecordingContext {
        batches: Arc<Mutex<Vec<Vec<Entity>>>>,
        updates: Arc<Mutex<Vec<Entity>>>,
        removed: Arc<Mutex<Vec<EntityId>>>,
        fail: bool,
    }

    impl IntegrationContext for RecordingContext {
        async fn add_entities(&self, entities: Vec<Entity>) -> Result<(), HubError> {
            if self.fail {
                return Err(ValidationError::EmptyName.into());
            }
            self.batches.lock().unwrap().push(entities);
            Ok(())
        }

        async fn update_entity(&self, entity: Entity) -> Result<Entity, HubError> {
            self.updates.lock().unwrap().push(entity.clone());
            Ok(entity)
        }

        async fn remove_entity(&self, id: EntityId) -> Result<(), HubError> {
            self.removed.lock().unwrap().push(id);
            Ok(())
        }
    }

    fn integration(
        seed: &[VirtualAutomationConfig],
    ) -> NexiaIntegration<VirtualCoordinator, TokioScheduler> {
        NexiaIntegration::new(
            NexiaConfig::default(),
            Arc::new(VirtualCoordinator::new(VirtualHome::new(seed))),
            Arc::new(TokioScheduler),
        )
    }

    fn morning_and_night() -> Vec<VirtualAutomationConfig> {
        vec![
            VirtualAutomationConfig {
                id: 1,
                name: "Morning".to_string(),
                description: String::new(),
            },
            VirtualAutomationConfig {
                id: 2,
                name: "Night".to_string(),
                description: String::new(),
            },
        ]
    }

    fn find_scene(
        integration: &NexiaIntegration<VirtualCoordinator, TokioScheduler>,
        name: &str,
    ) -> EntityId {
        integration
            .scenes()
            .find(|scene| scene.name() == name)
            .unwrap()
            .id()
    }

    #[tokio::test]
    async fn should_return_nexia_as_name() {
        let integration = integration(&[]);
        assert_eq!(integration.name(), "nexia");
    }

    #[tokio::test]
    async fn should_register_all_scenes_in_one_batch() {
        let mut integration = integration(&morning_and_night());
        let ctx = RecordingContext::default();

        integration.setup(&ctx).await.unwrap();

        let batches = ctx.batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        let mut names: Vec<&str> = batches[0].iter().map(|e| e.friendly_name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["Morning", "Night"]);
    }

    #[tokio::test]
    async fn should_register_empty_batch_for_account_without_automations() {
        let mut integration = integration(&[]);
        let ctx = RecordingContext::default();

        integration.setup(&ctx).await.unwrap();

        let batches = ctx.batches.lock().unwrap();
        assert_eq!(batches.len(), 1);
        assert!(batches[0].is_empty());
    }

    #[tokio::test]
    async fn should_keep_no_scene_when_registration_fails() {
        let mut integration = integration(&morning_and_night());
        let ctx = RecordingContext {
            fail: true,
            ..RecordingContext::default()
        };

        let result = integration.setup(&ctx).await;

        assert!(matches!(result, Err(HubError::Validation(_))));
        assert_eq!(integration.scenes().count(), 0);
    }

    #[tokio::test]
    async fn should_own_registered_scenes() {
        let mut integration = integration(&morning_and_night());
        let ctx = RecordingContext::default();
        integration.setup(&ctx).await.unwrap();

        for entity in &ctx.batches.lock().unwrap()[0] {
            assert!(integration.owns_entity(entity.id));
        }
        assert!(!integration.owns_entity(EntityId::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn should_activate_scene_on_turn_on() {
        let mut integration = integration(&morning_and_night());
        integration.setup(&RecordingContext::default()).await.unwrap();
        let morning = find_scene(&integration, "Morning");

        let entity = integration
            .handle_service_call(morning, "turn_on", serde_json::json!({}))
            .await
            .unwrap();

        assert_eq!(entity.entity_id, "scene.morning");
        assert_eq!(entity.state, EntityState::Unknown);
        let scene = integration.scenes.get(&morning).unwrap();
        assert_eq!(scene.automation().activation_count(), 1);

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert_eq!(integration.coordinator.refresh_count(), 1);
    }

    #[tokio::test]
    async fn should_accept_activate_as_service_alias() {
        let mut integration = integration(&morning_and_night());
        integration.setup(&RecordingContext::default()).await.unwrap();
        let night = find_scene(&integration, "Night");

        integration
            .handle_service_call(night, "activate", serde_json::json!({}))
            .await
            .unwrap();

        let scene = integration.scenes.get(&night).unwrap();
        assert_eq!(scene.automation().activation_count(), 1);
    }

    #[tokio::test]
    async fn should_reject_unsupported_service() {
        let mut integration = integration(&morning_and_night());
        integration.setup(&RecordingContext::default()).await.unwrap();
        let night = find_scene(&integration, "Night");

        let result = integration
            .handle_service_call(night, "turn_off", serde_json::json!({}))
            .await;

        assert!(matches!(
            result,
            Err(HubError::Validation(ValidationError::UnsupportedService(ref s))) if s == "turn_off"
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_entity() {
        let integration = integration(&morning_and_night());
        let result = integration
            .handle_service_call(EntityId::new(), "turn_on", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(HubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_propagate_activation_failure() {
        let mut integration = integration(&morning_and_night());
        integration.setup(&RecordingContext::default()).await.unwrap();
        let morning = find_scene(&integration, "Morning");
        integration.coordinator.home().set_online(false);

        let result = integration
            .handle_service_call(morning, "turn_on", serde_json::json!({}))
            .await;

        assert!(matches!(result, Err(HubError::Upstream(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn should_publish_snapshots_once_refresh_has_landed() {
        let mut integration = integration(&morning_and_night());
        let ctx = RecordingContext::default();
        integration.setup(&ctx).await.unwrap();
        let morning = find_scene(&integration, "Morning");

        integration
            .handle_service_call(morning, "turn_on", serde_json::json!({}))
            .await
            .unwrap();
        integration.scenes.get(&morning).unwrap().automation().set_description("Later");
        integration.coordinator.home().set_online(false);

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert!(ctx.updates.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let updates = ctx.updates.lock().unwrap();
        assert_eq!(updates.len(), 2);
        assert!(updates.iter().all(|e| e.state == EntityState::Unavailable));
        let snapshot = updates.iter().find(|e| e.id == morning).unwrap();
        assert_eq!(
            snapshot.get_attribute(scene::ATTR_DESCRIPTION),
            Some(&AttributeValue::from("Later"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_publish_after_teardown() {
        let mut integration = integration(&morning_and_night());
        let ctx = RecordingContext::default();
        integration.setup(&ctx).await.unwrap();
        let night = find_scene(&integration, "Night");

        integration
            .handle_service_call(night, "turn_on", serde_json::json!({}))
            .await
            .unwrap();
        integration.teardown().await.unwrap();
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert_eq!(integration.coordinator.refresh_count(), 1);
        assert!(ctx.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_remove_registered_snapshots_on_teardown() {
        let mut integration = integration(&morning_and_night());
        let ctx = RecordingContext::default();
        integration.setup(&ctx).await.unwrap();

        integration.teardown().await.unwrap();

        assert_eq!(integration.scenes().count(), 0);
        let mut registered: Vec<EntityId> =
            ctx.batches.lock().unwrap()[0].iter().map(|e| e.id).collect();
        let mut removed = ctx.removed.lock().unwrap().clone();
        registered.sort_by_key(ToString::to_string);
        removed.sort_by_key(ToString::to_string);
        assert_eq!(removed, registered);
    }

    #[tokio::test]
    async fn should_tear_down_cleanly_without_setup() {
        let mut integration = integration(&morning_and_night());
        integration.teardown().await.unwrap();
        assert_eq!(integration.scenes().count(), 0);
    }
}
