// src/types/job.rs
use serde::{Deserialize, Serialize};

/// Open position listed by `/api/jobs/get-list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
}
