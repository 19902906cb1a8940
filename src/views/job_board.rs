// src/views/job_board.rs
//! Job listing screen and per-job application forms

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::{PortalConfig, BASE_URL_VAR};
use crate::core::PortalClient;
use crate::error::{PortalError, PortalResult};
use crate::types::{ApplyRequest, Candidate, Job};
use crate::views::notify::{Notice, Notifier};

/// Accepted repository URL prefix
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

const SUCCESS_MESSAGE: &str = "Application submitted successfully";

/// Board-level state; `Loaded` holds the listing in server order
#[derive(Debug)]
pub enum BoardState {
    Loading,
    Failed(PortalError),
    Empty,
    Loaded(Vec<Job>),
}

/// Per-job application form state.
///
/// Created implicitly on first interaction with a job's form. The URL is
/// reset to empty on a successful submission and kept on a failed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub repo_url: String,
    pub in_flight: bool,
    pub success: Option<String>,
}

/// Job listing plus one independent draft per job.
///
/// Requires a resolved candidate: the listing itself does not use it, but
/// every submission carries the candidate's identifiers.
pub struct JobBoard {
    config: PortalConfig,
    candidate: Candidate,
    notifier: Arc<dyn Notifier>,
    state: BoardState,
    drafts: BTreeMap<i64, ApplicationDraft>,
    client: Option<PortalClient>,
}

impl JobBoard {
    pub fn new(config: PortalConfig, candidate: Candidate, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            candidate,
            notifier,
            state: BoardState::Loading,
            drafts: BTreeMap::new(),
            client: None,
        }
    }

    /// Fetch the job listing, transitioning out of `Loading`.
    ///
    /// An empty listing becomes the explicit `Empty` state, distinct from
    /// `Failed`. Without a base address no request is issued.
    pub async fn mount(&mut self) {
        let base_url = match &self.config.base_url {
            Some(base_url) => base_url.clone(),
            None => {
                self.fail(PortalError::missing_config(BASE_URL_VAR));
                return;
            }
        };

        match Self::fetch(&base_url).await {
            Ok((client, jobs)) => {
                self.client = Some(client);
                self.state = if jobs.is_empty() {
                    BoardState::Empty
                } else {
                    BoardState::Loaded(jobs)
                };
            }
            Err(err) => self.fail(err),
        }
    }

    async fn fetch(base_url: &str) -> PortalResult<(PortalClient, Vec<Job>)> {
        let client = PortalClient::new(base_url)?;
        let jobs = client.open_jobs().await?;
        Ok((client, jobs))
    }

    fn fail(&mut self, err: PortalError) {
        self.notifier
            .notify(Notice::persistent(format!("Error fetching positions: {}", err)));
        self.state = BoardState::Failed(err);
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// The listing in server order; empty unless the board is `Loaded`
    pub fn jobs(&self) -> &[Job] {
        match &self.state {
            BoardState::Loaded(jobs) => jobs,
            _ => &[],
        }
    }

    pub fn client(&self) -> Option<&PortalClient> {
        self.client.as_ref()
    }

    /// Snapshot of one job's draft; a job never touched reads as default
    pub fn draft(&self, job_id: i64) -> ApplicationDraft {
        self.drafts.get(&job_id).cloned().unwrap_or_default()
    }

    /// Update one job's draft URL; other drafts are untouched
    pub fn edit_repo_url(&mut self, job_id: i64, value: impl Into<String>) {
        self.drafts.entry(job_id).or_default().repo_url = value.into();
    }

    /// Validate job `job_id`'s draft and mark it in flight.
    ///
    /// Checks in order: a submission is not already running, the URL is
    /// non-empty, the URL starts with the GitHub prefix. A failed check
    /// raises a transient notice and blocks the submission before any
    /// request exists; the in-flight flag stays untouched. On success the
    /// prior success message is cleared and the request to send is returned.
    pub fn begin_submission(&mut self, job_id: i64) -> PortalResult<ApplyRequest> {
        let current = self.draft(job_id);
        if current.in_flight {
            return Err(self.reject("A submission for this job is still in progress"));
        }
        if current.repo_url.is_empty() {
            return Err(self.reject("Please enter a repository URL"));
        }
        if !current.repo_url.starts_with(GITHUB_URL_PREFIX) {
            return Err(self.reject(format!(
                "Please enter a valid GitHub URL ({}...)",
                GITHUB_URL_PREFIX
            )));
        }

        let draft = self.drafts.entry(job_id).or_default();
        draft.in_flight = true;
        draft.success = None;

        Ok(ApplyRequest {
            uuid: self.candidate.uuid.clone(),
            job_id,
            candidate_id: self.candidate.candidate_id.clone(),
            repo_url: current.repo_url,
        })
    }

    /// Apply a settled submission outcome to job `job_id`'s draft.
    ///
    /// The in-flight flag clears regardless of the outcome. Success sets the
    /// job's message and empties its URL; failure raises a transient notice
    /// and leaves the draft URL as entered.
    pub fn finish_submission(&mut self, job_id: i64, outcome: PortalResult<()>) {
        let draft = self.drafts.entry(job_id).or_default();
        draft.in_flight = false;

        match outcome {
            Ok(()) => {
                draft.success = Some(SUCCESS_MESSAGE.to_string());
                draft.repo_url.clear();
            }
            Err(err) => {
                self.notifier
                    .notify(Notice::transient(format!("Failed to submit application: {}", err)));
            }
        }
    }

    fn reject(&self, message: impl Into<String>) -> PortalError {
        let err = PortalError::validation(message);
        self.notifier.notify(Notice::transient(err.to_string()));
        err
    }

    /// Render the board for the current state
    pub fn render(&self) -> String {
        match &self.state {
            BoardState::Loading => "Loading open positions...".to_string(),
            BoardState::Failed(err) => format!("Error fetching positions: {}", err),
            BoardState::Empty => "No open positions at the moment".to_string(),
            BoardState::Loaded(jobs) => {
                let mut out = String::from("Open positions:\n");
                for job in jobs {
                    let draft = self.draft(job.id);
                    out.push_str(&format!("- {} (ID: {})\n", job.title, job.id));
                    if !draft.repo_url.is_empty() {
                        out.push_str(&format!("    Repository: {}\n", draft.repo_url));
                    }
                    if draft.in_flight {
                        out.push_str("    Submitting...\n");
                    }
                    if let Some(message) = &draft.success {
                        out.push_str(&format!("    {}\n", message));
                    }
                }
                out
            }
        }
    }
}
