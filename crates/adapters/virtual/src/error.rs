//! Virtual account error types.

use climahub_domain::error::HubError;

/// Failures the simulated vendor cloud can report.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    /// The simulated cloud was switched offline.
    #[error("vendor cloud unreachable")]
    Offline,
}

impl From<VirtualError> for HubError {
    fn from(err: VirtualError) -> Self {
        Self::upstream(err)
    }
}
