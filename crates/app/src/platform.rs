//! Entity capabilities — the contract every platform entity fulfils.
//!
//! An integration-side object becomes visible to the hub by implementing
//! [`PlatformEntity`]. Platform-specific behaviour is layered on top as
//! extra traits; a scene is a [`PlatformEntity`] that can also be
//! [activated](Scene::activate).

use std::collections::HashMap;
use std::future::Future;

use climahub_domain::entity::{AttributeValue, Entity, EntityState, slugify};
use climahub_domain::error::HubError;
use climahub_domain::id::EntityId;

/// Attribute key under which a snapshot carries the entity's icon.
pub const ATTR_ICON: &str = "icon";

/// Attribute key under which a snapshot carries the integration-side unique id.
pub const ATTR_UNIQUE_ID: &str = "unique_id";

/// Platform name for scenes.
pub const SCENE_PLATFORM: &str = "scene";

/// Common surface of every entity handed to the hub.
pub trait PlatformEntity: Send + Sync {
    /// Platform this entity belongs to; becomes the `domain` of its entity id.
    fn platform(&self) -> &'static str;

    /// Hub-side identifier, stable for the lifetime of the entity.
    fn id(&self) -> EntityId;

    fn name(&self) -> String;

    /// Identifier unique within the owning integration.
    fn unique_id(&self) -> String;

    fn icon(&self) -> Option<&'static str> {
        None
    }

    fn available(&self) -> bool {
        true
    }

    fn extra_state_attributes(&self) -> HashMap<String, AttributeValue> {
        HashMap::new()
    }

    /// Build the domain snapshot the hub stores and serves.
    ///
    /// The entity id is `<platform>.<slug of name>`, falling back to the
    /// unique id when the name has no usable characters.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Validation`] if the resulting snapshot is invalid
    /// (for instance an empty name).
    fn to_entity(&self) -> Result<Entity, HubError> {
        let name = self.name();
        let mut object_id = slugify(&name);
        if object_id.is_empty() {
            object_id = slugify(&self.unique_id());
        }

        let mut builder = Entity::builder()
            .id(self.id())
            .entity_id(format!("{}.{object_id}", self.platform()))
            .friendly_name(name)
            .state(EntityState::from_available(self.available()))
            .attributes(self.extra_state_attributes())
            .attribute(ATTR_UNIQUE_ID, self.unique_id());
        if let Some(icon) = self.icon() {
            builder = builder.attribute(ATTR_ICON, icon);
        }
        builder.build()
    }
}

/// A one-shot activatable entity.
pub trait Scene: PlatformEntity {
    /// Activate the scene.
    fn activate(&self) -> impl Future<Output = Result<(), HubError>> + Send;
}
