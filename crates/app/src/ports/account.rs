//! Vendor account ports — the shared coordinator, the home it exposes, and
//! the remote automations inside that home.
//!
//! The real vendor session client lives outside this workspace; adapters
//! such as `climahub-adapter-virtual` implement these traits.

use std::future::Future;
use std::sync::Arc;

use climahub_domain::automation::AutomationId;
use climahub_domain::error::HubError;

/// A vendor-defined automation that can be triggered remotely.
///
/// `name` and `description` return owned values because the vendor object
/// may be updated in place by a coordinator refresh.
pub trait Automation: Send + Sync {
    fn automation_id(&self) -> AutomationId;

    fn name(&self) -> String;

    fn description(&self) -> String;

    /// Ask the vendor cloud to run this automation.
    fn activate(&self) -> impl Future<Output = Result<(), HubError>> + Send;
}

/// The vendor "home": the set of automations configured on the account.
pub trait AutomationHome: Send + Sync {
    type Automation: Automation + 'static;

    /// Identifiers of every automation known at the last refresh.
    ///
    /// # Errors
    ///
    /// Returns whatever the vendor client reports when the list cannot be read.
    fn automation_ids(&self) -> Result<Vec<AutomationId>, HubError>;

    /// Resolve one identifier to its automation.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::NotFound`] when the identifier is unknown.
    fn automation_by_id(&self, id: AutomationId) -> Result<Arc<Self::Automation>, HubError>;
}

/// Shared object mediating polling/refresh of the remote account state.
///
/// One coordinator is shared (via `Arc`) by every entity of an account.
pub trait Coordinator: Send + Sync {
    type Home: AutomationHome;

    fn home(&self) -> &Self::Home;

    /// Whether the most recent refresh succeeded.
    fn last_update_success(&self) -> bool;

    /// Re-fetch the whole account state from the vendor.
    fn refresh(&self) -> impl Future<Output = Result<(), HubError>> + Send;
}
