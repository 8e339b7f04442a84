//! Virtual automation — records activations instead of calling a cloud.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use climahub_app::ports::Automation;
use climahub_domain::automation::AutomationId;
use climahub_domain::error::HubError;

use crate::error::VirtualError;

/// A simulated vendor automation.
pub struct VirtualAutomation {
    id: AutomationId,
    name: String,
    description: RwLock<String>,
    activations: AtomicUsize,
    online: Arc<AtomicBool>,
}

impl VirtualAutomation {
    /// Create an automation that shares the `online` flag of its home.
    pub(crate) fn new(
        id: AutomationId,
        name: impl Into<String>,
        description: impl Into<String>,
        online: Arc<AtomicBool>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: RwLock::new(description.into()),
            activations: AtomicUsize::new(0),
            online,
        }
    }

    /// How many times [`activate`](Automation::activate) succeeded.
    #[must_use]
    pub fn activation_count(&self) -> usize {
        self.activations.load(Ordering::SeqCst)
    }

    /// Change the description, as an edit in the vendor app would.
    pub fn set_description(&self, description: impl Into<String>) {
        *self
            .description
            .write()
            .unwrap_or_else(PoisonError::into_inner) = description.into();
    }
}

impl Automation for VirtualAutomation {
    fn automation_id(&self) -> AutomationId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn description(&self) -> String {
        self.description
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn activate(&self) -> Result<(), HubError> {
        if !self.online.load(Ordering::SeqCst) {
            return Err(VirtualError::Offline.into());
        }
        let count = self.activations.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(automation_id = %self.id, count, "virtual automation activated");
        Ok(())
    }
}
