//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HubError`]
//! via `From` when crossing a port boundary.

use std::error::Error as StdError;

/// Top-level error shared by every port in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// A failure reported by an external system (vendor cloud, storage, …).
    #[error("upstream error")]
    Upstream(#[source] Box<dyn StdError + Send + Sync>),
}

impl HubError {
    /// Wrap any error raised outside the domain.
    pub fn upstream(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Upstream(Box::new(err))
    }
}

/// Invariant violations detected by domain builders and services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("entity id must not be empty")]
    EmptyEntityId,

    #[error("entity id {0:?} must have the form `domain.object_id`")]
    MalformedEntityId(String),

    #[error("{0:?} is not a valid identifier")]
    InvalidId(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("service {0:?} is not supported by this entity")]
    UnsupportedService(String),
}

/// A lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of item that was looked up (e.g. `"Entity"`, `"Automation"`).
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_hub_error() {
        let err: HubError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            HubError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_display_not_found_with_kind_and_id() {
        let err = NotFoundError {
            entity: "Automation",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Automation 42 not found");
    }

    #[test]
    fn should_keep_source_when_wrapping_upstream_error() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "vendor timed out");
        let err = HubError::upstream(io);
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("vendor timed out"));
    }

    #[test]
    fn should_quote_unsupported_service_name() {
        let err = ValidationError::UnsupportedService("toggle".to_string());
        assert_eq!(err.to_string(), "service \"toggle\" is not supported by this entity");
    }
}
