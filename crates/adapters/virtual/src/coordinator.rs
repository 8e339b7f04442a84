//! Virtual coordinator — refreshes the simulated account on demand.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use climahub_app::ports::Coordinator;
use climahub_domain::error::HubError;

use crate::error::VirtualError;
use crate::home::VirtualHome;

/// Coordinator over a [`VirtualHome`].
///
/// A refresh fails while the home is offline, which flips
/// [`last_update_success`](Coordinator::last_update_success) to `false`.
pub struct VirtualCoordinator {
    home: VirtualHome,
    refreshes: AtomicUsize,
    last_update_success: AtomicBool,
}

impl VirtualCoordinator {
    #[must_use]
    pub fn new(home: VirtualHome) -> Self {
        Self {
            home,
            refreshes: AtomicUsize::new(0),
            last_update_success: AtomicBool::new(true),
        }
    }

    /// How many refreshes were requested, successful or not.
    #[must_use]
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl Coordinator for VirtualCoordinator {
    type Home = VirtualHome;

    fn home(&self) -> &VirtualHome {
        &self.home
    }

    fn last_update_success(&self) -> bool {
        self.last_update_success.load(Ordering::SeqCst)
    }

    async fn refresh(&self) -> Result<(), HubError> {
        let count = self.refreshes.fetch_add(1, Ordering::SeqCst) + 1;
        let online = self.home.is_online();
        self.last_update_success.store(online, Ordering::SeqCst);

        if !online {
            tracing::warn!(count, "virtual account refresh failed");
            return Err(VirtualError::Offline.into());
        }
        tracing::debug!(count, "virtual account refreshed");
        Ok(())
    }
}
