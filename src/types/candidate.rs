// src/types/candidate.rs
use serde::{Deserialize, Serialize};

/// Candidate record as returned by `/api/candidate/get-by-email`.
///
/// Owned by the remote service; immutable once loaded and held for the
/// lifetime of the session only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub uuid: String,
    pub candidate_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Candidate {
    /// Display name for the welcome header
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let candidate: Candidate = serde_json::from_str(
            r#"{"firstName":"Ana","lastName":"Lopez","email":"ana@x.com","uuid":"u1","candidateId":"c1"}"#,
        )
        .unwrap();
        assert_eq!(candidate.first_name, "Ana");
        assert_eq!(candidate.candidate_id, "c1");
        assert_eq!(candidate.full_name(), "Ana Lopez");
    }
}
