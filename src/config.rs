// src/config.rs
//! Portal configuration, resolved once at startup and injected into the views

use std::env;

/// Environment variable holding the portal API base address
pub const BASE_URL_VAR: &str = "PORTAL_BASE_URL";
/// Environment variable holding the candidate email to look up
pub const EMAIL_VAR: &str = "PORTAL_EMAIL_ADDR";

/// Startup configuration for a portal session.
///
/// Either value may be absent; the views report that as an error state
/// instead of panicking. Component logic never reads the environment itself.
#[derive(Debug, Clone, Default)]
pub struct PortalConfig {
    pub base_url: Option<String>,
    pub candidate_email: Option<String>,
}

impl PortalConfig {
    pub fn new(base_url: impl Into<String>, candidate_email: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            candidate_email: Some(candidate_email.into()),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// An unset or empty variable counts as absent.
    pub fn from_env() -> Self {
        Self {
            base_url: read_var(BASE_URL_VAR),
            candidate_email: read_var(EMAIL_VAR),
        }
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
