//! Submission error type

use thiserror::Error;

/// Why a submission did not produce a success payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The endpoint answered with a non-2xx status
    #[error("Server responded with {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// The payload shown in the failure area
    pub fn payload(&self) -> String {
        self.to_string()
    }
}
