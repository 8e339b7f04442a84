//! Seed data for the virtual account.

use serde::Deserialize;

/// One automation the virtual account starts with.
#[derive(Debug, Clone, Deserialize)]
pub struct VirtualAutomationConfig {
    /// Vendor-side automation id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Free-text description shown as an entity attribute.
    #[serde(default)]
    pub description: String,
}
