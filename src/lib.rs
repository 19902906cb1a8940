use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod views;

pub use config::PortalConfig;
pub use error::{PortalError, PortalResult};

use crate::views::{CandidateLoader, JobBoard, Notifier};

struct SettledSubmission {
    job_id: i64,
    outcome: PortalResult<()>,
}

/// One portal page session: candidate lookup, job listing, and any number of
/// concurrent application submissions.
///
/// Submissions run as detached tasks posting their outcome to a channel;
/// `settle` applies them one at a time, so every piece of view state is
/// mutated on a single loop. Dropping the session aborts anything still in
/// flight, which keeps a late completion from touching discarded state.
pub struct PortalSession {
    config: PortalConfig,
    notifier: Arc<dyn Notifier>,
    loader: CandidateLoader,
    board: Option<JobBoard>,
    events: mpsc::UnboundedSender<SettledSubmission>,
    settled: mpsc::UnboundedReceiver<SettledSubmission>,
    pending: HashMap<i64, JoinHandle<()>>,
}

impl PortalSession {
    pub fn new(config: PortalConfig, notifier: Arc<dyn Notifier>) -> Self {
        let (events, settled) = mpsc::unbounded_channel();
        let loader = CandidateLoader::new(config.clone(), Arc::clone(&notifier));

        Self {
            config,
            notifier,
            loader,
            board: None,
            events,
            settled,
            pending: HashMap::new(),
        }
    }

    /// Resolve the candidate without mounting the job board
    pub async fn lookup(&mut self) {
        self.loader.mount().await;
    }

    /// Resolve the candidate and, on success, mount the job board.
    ///
    /// Job data is never requested before the candidate is loaded.
    pub async fn open(&mut self) {
        self.lookup().await;

        if let Some(candidate) = self.loader.candidate() {
            let mut board = JobBoard::new(
                self.config.clone(),
                candidate.clone(),
                Arc::clone(&self.notifier),
            );
            board.mount().await;
            self.board = Some(board);
        }
    }

    pub fn loader(&self) -> &CandidateLoader {
        &self.loader
    }

    pub fn board(&self) -> Option<&JobBoard> {
        self.board.as_ref()
    }

    pub fn board_mut(&mut self) -> Option<&mut JobBoard> {
        self.board.as_mut()
    }

    /// Start a submission for `job_id` from its current draft.
    ///
    /// A draft that fails validation never spawns a task; a passing one is
    /// posted in the background and settles through `settle`. Submissions
    /// for different jobs may run at the same time.
    pub fn submit(&mut self, job_id: i64) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let Some(client) = board.client().cloned() else {
            return;
        };
        let request = match board.begin_submission(job_id) {
            Ok(request) => request,
            // already surfaced as a transient notice
            Err(_) => return,
        };

        debug!("Spawning submission for job {}", job_id);
        let events = self.events.clone();
        let handle = tokio::spawn(async move {
            let outcome = client.apply_to_job(&request).await;
            let _ = events.send(SettledSubmission { job_id, outcome });
        });
        self.pending.insert(job_id, handle);
    }

    /// Apply settled submissions until nothing is left in flight
    pub async fn settle(&mut self) {
        while !self.pending.is_empty() {
            let Some(settled) = self.settled.recv().await else {
                break;
            };
            self.pending.remove(&settled.job_id);
            if let Some(board) = self.board.as_mut() {
                board.finish_submission(settled.job_id, settled.outcome);
            }
        }
    }

    /// Submissions spawned but not yet settled
    pub fn pending_submissions(&self) -> usize {
        self.pending.len()
    }

    /// Render both screens for the current states
    pub fn render(&self) -> String {
        match &self.board {
            Some(board) => format!("{}\n\n{}", self.loader.render(), board.render()),
            None => self.loader.render(),
        }
    }
}

impl Drop for PortalSession {
    fn drop(&mut self) {
        for handle in self.pending.values() {
            handle.abort();
        }
    }
}
