// src/types/mod.rs
//! Wire types exchanged with the portal API

pub mod candidate;
pub mod job;
pub mod response;

pub use candidate::Candidate;
pub use job::Job;
pub use response::{ApplyRequest, ApplyResponse};
