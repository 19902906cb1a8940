// src/core/service_client.rs
//! HTTP client for the candidate portal API

use reqwest::Client;
use tracing::{debug, error};

use crate::error::{PortalError, PortalResult};
use crate::types::{ApplyRequest, ApplyResponse, Candidate, Job};

const CANDIDATE_BY_EMAIL_ENDPOINT: &str = "/api/candidate/get-by-email";
const JOB_LIST_ENDPOINT: &str = "/api/jobs/get-list";
const APPLY_ENDPOINT: &str = "/api/candidate/apply-to-job";

/// Client for the three portal endpoints.
///
/// No request timeout is configured; a request that never settles leaves its
/// owning view slot in the loading or submitting state.
#[derive(Clone)]
pub struct PortalClient {
    client: Client,
    base_url: String,
}

impl PortalClient {
    /// Create a client for the given base address
    pub fn new(base_url: impl Into<String>) -> PortalResult<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Look up the candidate registered under `email`
    pub async fn candidate_by_email(&self, email: &str) -> PortalResult<Candidate> {
        let url = format!("{}{}", self.base_url, CANDIDATE_BY_EMAIL_ENDPOINT);
        debug!("Fetching candidate: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("email", email)])
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Fetch the list of open positions, in server order
    pub async fn open_jobs(&self) -> PortalResult<Vec<Job>> {
        let url = format!("{}{}", self.base_url, JOB_LIST_ENDPOINT);
        debug!("Fetching job list: {}", url);

        let response = self.client.get(&url).send().await?;

        Self::decode(response).await
    }

    /// Submit an application.
    ///
    /// Succeeds only when the server acknowledges with `ok: true`; a missing
    /// or false flag is a rejection.
    pub async fn apply_to_job(&self, request: &ApplyRequest) -> PortalResult<()> {
        let url = format!("{}{}", self.base_url, APPLY_ENDPOINT);
        debug!("Submitting application for job {}: {}", request.job_id, url);

        let response = self.client.post(&url).json(request).send().await?;

        let ack: ApplyResponse = Self::decode(response).await?;
        if ack.ok {
            Ok(())
        } else {
            error!("Application for job {} was not acknowledged", request.job_id);
            Err(PortalError::Rejected)
        }
    }

    async fn decode<T>(response: reqwest::Response) -> PortalResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            error!("Portal API returned {}", status);
            Err(PortalError::Server {
                status: status.as_u16(),
            })
        }
    }
}
