// src/types/response.rs
use serde::{Deserialize, Serialize};

/// Submission body for `/api/candidate/apply-to-job`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub uuid: String,
    pub job_id: i64,
    pub candidate_id: String,
    pub repo_url: String,
}

/// Submission acknowledgement.
///
/// A missing `ok` field decodes as `false` and is treated as a rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResponse {
    #[serde(default)]
    pub ok: bool,
}
