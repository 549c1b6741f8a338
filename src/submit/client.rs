//! HTTP client for posting the form
//!
//! Sends the current values as a JSON body in a single POST. There is no
//! retry and no timeout beyond what the transport imposes.

use super::error::SubmissionError;
use super::traits::Submitter;
use crate::state::FormValues;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

/// Client for submitting the form to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    /// The HTTP client
    client: Client,
    /// The endpoint URL
    endpoint: String,
}

impl HttpSubmitter {
    /// Create a new submitter for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))?;

        Self::with_client(client, endpoint)
    }

    /// Create a submitter around an already configured client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        reqwest::Url::parse(&endpoint)
            .map_err(|e| anyhow!("Invalid endpoint {endpoint:?}: {e}"))?;

        Ok(Self { client, endpoint })
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, values: FormValues) -> Result<String, SubmissionError> {
        info!(endpoint = %self.endpoint, "posting form");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&values)
            .send()
            .await
            .map_err(|e| {
                warn!("form submission transport error: {e}");
                SubmissionError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if status.is_success() {
            info!(status = status.as_u16(), "form accepted");
            Ok(body)
        } else {
            warn!(status = status.as_u16(), "form rejected");
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
