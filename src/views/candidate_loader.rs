// src/views/candidate_loader.rs
//! Candidate lookup screen

use std::sync::Arc;

use crate::config::{PortalConfig, BASE_URL_VAR, EMAIL_VAR};
use crate::core::PortalClient;
use crate::error::{PortalError, PortalResult};
use crate::types::Candidate;
use crate::views::notify::{Notice, Notifier};

/// Lookup screen state.
///
/// `Failed` and `Loaded` are terminal; there is no retry transition, the
/// user reopens the session instead.
#[derive(Debug)]
pub enum CandidateState {
    Loading,
    Failed(PortalError),
    Loaded(Candidate),
}

pub struct CandidateLoader {
    config: PortalConfig,
    notifier: Arc<dyn Notifier>,
    state: CandidateState,
}

impl CandidateLoader {
    pub fn new(config: PortalConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            notifier,
            state: CandidateState::Loading,
        }
    }

    /// Resolve the configured candidate, transitioning out of `Loading`.
    ///
    /// With incomplete configuration the loader fails up front without
    /// issuing any request.
    pub async fn mount(&mut self) {
        let (base_url, email) = match (&self.config.base_url, &self.config.candidate_email) {
            (Some(base_url), Some(email)) => (base_url.clone(), email.clone()),
            _ => {
                self.fail(PortalError::missing_config(format!(
                    "{} and/or {}",
                    BASE_URL_VAR, EMAIL_VAR
                )));
                return;
            }
        };

        match Self::lookup(&base_url, &email).await {
            Ok(candidate) => self.state = CandidateState::Loaded(candidate),
            Err(err) => self.fail(err),
        }
    }

    async fn lookup(base_url: &str, email: &str) -> PortalResult<Candidate> {
        let client = PortalClient::new(base_url)?;
        client.candidate_by_email(email).await
    }

    fn fail(&mut self, err: PortalError) {
        self.notifier.notify(Notice::persistent(format!("Error: {}", err)));
        self.state = CandidateState::Failed(err);
    }

    pub fn state(&self) -> &CandidateState {
        &self.state
    }

    /// The resolved candidate, once loaded
    pub fn candidate(&self) -> Option<&Candidate> {
        match &self.state {
            CandidateState::Loaded(candidate) => Some(candidate),
            _ => None,
        }
    }

    /// Render the screen for the current state
    pub fn render(&self) -> String {
        match &self.state {
            CandidateState::Loading => "Loading candidate data...".to_string(),
            CandidateState::Failed(err) => format!("Error: {}", err),
            CandidateState::Loaded(candidate) => format!(
                "Welcome, {}\nEmail: {}",
                candidate.full_name(),
                candidate.email
            ),
        }
    }
}
