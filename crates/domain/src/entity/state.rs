//! Entity state — the current operational state of an entity.

use serde::{Deserialize, Serialize};

/// Discrete operational state of an entity.
///
/// Scenes are stateless on the vendor side, so a reachable scene reports
/// [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityState {
    #[default]
    Unknown,
    Unavailable,
}

impl EntityState {
    /// Map an availability flag onto a state.
    #[must_use]
    pub fn from_available(available: bool) -> Self {
        if available {
            Self::Unknown
        } else {
            Self::Unavailable
        }
    }
}

impl std::fmt::Display for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}
