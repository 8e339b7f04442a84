//! Nexia integration configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the Nexia integration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NexiaConfig {
    /// Seconds to wait after activating a scene before refreshing the account.
    pub scene_activation_secs: u64,
}

impl NexiaConfig {
    /// Delay between a scene activation and the follow-up refresh.
    #[must_use]
    pub fn scene_activation_time(&self) -> Duration {
        Duration::from_secs(self.scene_activation_secs)
    }
}

impl Default for NexiaConfig {
    fn default() -> Self {
        Self {
            scene_activation_secs: 5,
        }
    }
}
