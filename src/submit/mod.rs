//! Submission client module for posting the form over HTTP

mod client;
mod error;
mod traits;

pub use client::HttpSubmitter;
pub use error::SubmissionError;
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
