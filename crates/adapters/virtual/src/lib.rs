//! # climahub-adapter-virtual
//!
//! Virtual vendor account that stands in for a real climate-control cloud
//! account, for demonstration and testing.
//!
//! ## Provided pieces
//!
//! | Type | Port | Behaviour |
//! |------|------|-----------|
//! | [`VirtualAutomation`] | `Automation` | Counts activations, can be taken offline |
//! | [`VirtualHome`] | `AutomationHome` | Automations keyed by id, listed in id order |
//! | [`VirtualCoordinator`] | `Coordinator` | Counts refreshes, tracks the last outcome |
//!
//! ## Dependency rule
//!
//! Depends on `climahub-app` (port traits) and `climahub-domain` only.

mod automation;
mod config;
mod coordinator;
mod error;
mod home;

pub use automation::VirtualAutomation;
pub use config::VirtualAutomationConfig;
pub use coordinator::VirtualCoordinator;
pub use error::VirtualError;
pub use home::VirtualHome;
