//! Automation scenes — one activatable scene per vendor automation.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use climahub_app::platform::{PlatformEntity, SCENE_PLATFORM, Scene};
use climahub_app::ports::{Automation, AutomationHome, Coordinator, Scheduler};
use climahub_domain::entity::AttributeValue;
use climahub_domain::error::HubError;
use climahub_domain::id::EntityId;

/// Icon shown for every automation scene.
pub const ICON: &str = "mdi:script-text-outline";

/// Attribute carrying the automation's description.
pub const ATTR_DESCRIPTION: &str = "description";

/// Attribute carrying the data attribution.
pub const ATTR_ATTRIBUTION: &str = "attribution";

/// Attribution text carried by every scene snapshot.
pub const ATTRIBUTION: &str = "Data provided by Trane Technologies";

/// The automation type exposed by a coordinator's home.
pub type HomeAutomation<C> = <<C as Coordinator>::Home as AutomationHome>::Automation;

/// A vendor automation surfaced as a scene.
///
/// Name and unique id are captured once at construction; the description
/// is read from the automation every time attributes are requested.
pub struct AutomationScene<C: Coordinator, S> {
    id: EntityId,
    name: String,
    unique_id: String,
    automation: Arc<HomeAutomation<C>>,
    coordinator: Arc<C>,
    scheduler: Arc<S>,
    refresh_delay: Duration,
}

impl<C, S> AutomationScene<C, S>
where
    C: Coordinator + 'static,
    S: Scheduler,
{
    /// Bind `automation` to a scene sharing `coordinator` and `scheduler`.
    pub fn new(
        automation: Arc<HomeAutomation<C>>,
        coordinator: Arc<C>,
        scheduler: Arc<S>,
        refresh_delay: Duration,
    ) -> Self {
        let unique_id = automation.automation_id().to_string();
        Self {
            id: EntityId::from_name(&format!("nexia:{unique_id}")),
            name: automation.name(),
            unique_id,
            automation,
            coordinator,
            scheduler,
            refresh_delay,
        }
    }

    #[must_use]
    pub fn automation(&self) -> &Arc<HomeAutomation<C>> {
        &self.automation
    }

    /// Trigger the automation, then refresh the account once `refresh_delay`
    /// has passed and run `after_refresh`.
    ///
    /// The refresh runs detached. `after_refresh` runs whether the refresh
    /// succeeded or not; a refresh failure is logged, not returned. When the
    /// remote call fails nothing is scheduled.
    ///
    /// # Errors
    ///
    /// Propagates the error of the remote activate call.
    pub async fn activate_then<F>(&self, after_refresh: F) -> Result<(), HubError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.automation.activate().await?;

        let automation_id = self.automation.automation_id();
        let coordinator = Arc::clone(&self.coordinator);
        self.scheduler.call_later(self.refresh_delay, async move {
            if let Err(err) = coordinator.refresh().await {
                tracing::warn!(%automation_id, error = %err, "refresh after scene activation failed");
            }
            after_refresh.await;
        });

        tracing::info!(
            %automation_id,
            delay_secs = self.refresh_delay.as_secs(),
            "automation scene activated"
        );
        Ok(())
    }
}

impl<C, S> PlatformEntity for AutomationScene<C, S>
where
    C: Coordinator + 'static,
    S: Scheduler,
{
    fn platform(&self) -> &'static str {
        SCENE_PLATFORM
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn unique_id(&self) -> String {
        self.unique_id.clone()
    }

    fn icon(&self) -> Option<&'static str> {
        Some(ICON)
    }

    fn available(&self) -> bool {
        self.coordinator.last_update_success()
    }

    fn extra_state_attributes(&self) -> HashMap<String, AttributeValue> {
        HashMap::from([
            (ATTR_ATTRIBUTION.to_string(), AttributeValue::from(ATTRIBUTION)),
            (
                ATTR_DESCRIPTION.to_string(),
                AttributeValue::from(self.automation.description()),
            ),
        ])
    }
}

impl<C, S> Scene for AutomationScene<C, S>
where
    C: Coordinator + 'static,
    S: Scheduler,
{
    async fn activate(&self) -> Result<(), HubError> {
        self.activate_then(async {}).await
    }
}

/// Build one scene per automation known to the coordinator's home.
///
/// # Errors
///
/// Propagates the first enumeration or lookup error unchanged; no scene is
/// returned in that case.
pub fn build_scenes<C, S>(
    coordinator: &Arc<C>,
    scheduler: &Arc<S>,
    refresh_delay: Duration,
) -> Result<Vec<AutomationScene<C, S>>, HubError>
where
    C: Coordinator + 'static,
    S: Scheduler,
{
    let home = coordinator.home();
    home.automation_ids()?
        .into_iter()
        .map(|id| {
            let automation = home.automation_by_id(id)?;
            Ok(AutomationScene::new(
                automation,
                Arc::clone(coordinator),
                Arc::clone(scheduler),
                refresh_delay,
            ))
        })
        .collect()
}
