//! Virtual home — the automation list of a simulated account.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use climahub_app::ports::AutomationHome;
use climahub_domain::automation::AutomationId;
use climahub_domain::error::{HubError, NotFoundError};

use crate::automation::VirtualAutomation;
use crate::config::VirtualAutomationConfig;

/// A simulated vendor home holding automations in id order.
pub struct VirtualHome {
    automations: RwLock<BTreeMap<AutomationId, Arc<VirtualAutomation>>>,
    online: Arc<AtomicBool>,
}

impl Default for VirtualHome {
    fn default() -> Self {
        Self {
            automations: RwLock::new(BTreeMap::new()),
            online: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl VirtualHome {
    /// Build a home seeded with the given automations.
    #[must_use]
    pub fn new(seed: &[VirtualAutomationConfig]) -> Self {
        let home = Self::default();
        for item in seed {
            home.add_automation(AutomationId::new(item.id), &item.name, &item.description);
        }
        home
    }

    /// Add (or replace) an automation and return a handle to it.
    pub fn add_automation(
        &self,
        id: AutomationId,
        name: &str,
        description: &str,
    ) -> Arc<VirtualAutomation> {
        let automation = Arc::new(VirtualAutomation::new(
            id,
            name,
            description,
            Arc::clone(&self.online),
        ));
        self.automations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::clone(&automation));
        automation
    }

    /// Take the simulated cloud on- or offline.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

impl AutomationHome for VirtualHome {
    type Automation = VirtualAutomation;

    fn automation_ids(&self) -> Result<Vec<AutomationId>, HubError> {
        Ok(self
            .automations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect())
    }

    fn automation_by_id(&self, id: AutomationId) -> Result<Arc<VirtualAutomation>, HubError> {
        self.automations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Automation",
                    id: id.to_string(),
                }
                .into()
            })
    }
}
