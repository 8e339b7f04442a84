//! Vendor automation identifiers.
//!
//! Automations themselves live in the vendor cloud; the hub only ever sees
//! them through the account ports in `climahub-app`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the vendor assigns to an automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutomationId(u64);

impl AutomationId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AutomationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
