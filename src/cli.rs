// src/cli.rs
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::PortalConfig;
use crate::views::{LogNotifier, Notice, Notifier};
use crate::PortalSession;

#[derive(Parser)]
#[command(name = "jobport")]
#[command(about = "Candidate portal for browsing and applying to open positions")]
pub struct PortalCli {
    #[command(subcommand)]
    pub command: PortalCommand,

    /// Portal API base address (overrides PORTAL_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Candidate email to look up (overrides PORTAL_EMAIL_ADDR)
    #[arg(long, global = true)]
    pub email: Option<String>,
}

#[derive(Subcommand)]
pub enum PortalCommand {
    /// Look up the configured candidate and print the welcome header
    Candidate,
    /// List open positions for the configured candidate
    Jobs,
    /// Submit applications as JOB_ID=REPO_URL pairs
    Apply {
        #[arg(required = true, value_parser = parse_submission)]
        submissions: Vec<(i64, String)>,
    },
}

fn parse_submission(raw: &str) -> Result<(i64, String), String> {
    let (job_id, repo_url) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected JOB_ID=REPO_URL, got '{}'", raw))?;
    let job_id = job_id
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid job id '{}'", job_id))?;
    Ok((job_id, repo_url.to_string()))
}

/// Run one portal command.
///
/// Failures are rendered to the user, not propagated: every command leaves
/// its view in a displayable state and returns `Ok`.
pub async fn handle_portal_command(cli: PortalCli) -> Result<()> {
    let mut config = PortalConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = Some(base_url);
    }
    if let Some(email) = cli.email {
        config.candidate_email = Some(email);
    }

    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
    let mut session = PortalSession::new(config, Arc::clone(&notifier));

    match cli.command {
        PortalCommand::Candidate => {
            session.lookup().await;
            println!("{}", session.render());
        }

        PortalCommand::Jobs => {
            session.open().await;
            println!("{}", session.render());
        }

        PortalCommand::Apply { submissions } => {
            session.open().await;

            for (job_id, repo_url) in submissions {
                let listed = session
                    .board()
                    .map(|board| board.jobs().iter().any(|job| job.id == job_id))
                    .unwrap_or(false);
                if !listed {
                    notifier.notify(Notice::transient(format!(
                        "No open position with id {}",
                        job_id
                    )));
                    continue;
                }

                if let Some(board) = session.board_mut() {
                    board.edit_repo_url(job_id, repo_url);
                }
                session.submit(job_id);
            }

            session.settle().await;
            println!("{}", session.render());
        }
    }

    Ok(())
}
