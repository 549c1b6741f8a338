//! Trait abstraction for the submission client to enable mocking in tests

use super::error::SubmissionError;
use crate::state::FormValues;
use async_trait::async_trait;

/// Sends form values to the remote endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Post the values; a 2xx response body is returned as the success payload
    async fn submit(&self, values: FormValues) -> Result<String, SubmissionError>;
}
