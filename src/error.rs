// src/error.rs
//! Error taxonomy for portal operations

use thiserror::Error;

/// Errors raised by portal operations.
///
/// Every error is terminal for the operation that produced it: callers render
/// it into view state or raise a notice. Nothing is retried automatically;
/// the user re-triggers the operation instead.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Required configuration absent; no request was attempted
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    /// Non-2xx response from the portal API
    #[error("server error: {status}")]
    Server { status: u16 },

    /// Network or body-decoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Repository URL rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// 2xx response whose acknowledgement flag was missing or false
    #[error("server did not acknowledge the application")]
    Rejected,
}

/// Type alias for portal results
pub type PortalResult<T> = Result<T, PortalError>;

impl PortalError {
    pub fn missing_config(names: impl Into<String>) -> Self {
        Self::MissingConfig(names.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True for draft-level failures that block a submission up front
    pub fn is_validation(&self) -> bool {
        matches!(self, PortalError::Validation(_))
    }

    /// True when the error was produced without any request being issued
    pub fn is_config(&self) -> bool {
        matches!(self, PortalError::MissingConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_carries_status() {
        let err = PortalError::Server { status: 502 };
        assert_eq!(err.to_string(), "server error: 502");
    }

    #[test]
    fn validation_predicate() {
        assert!(PortalError::validation("empty URL").is_validation());
        assert!(!PortalError::Rejected.is_validation());
        assert!(!PortalError::Server { status: 500 }.is_validation());
    }

    #[test]
    fn config_predicate() {
        assert!(PortalError::missing_config("PORTAL_BASE_URL").is_config());
        assert!(!PortalError::Rejected.is_config());
    }
}
