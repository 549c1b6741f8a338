//! Form domain layer
//!
//! Values, per-field rules and the controller that ties them to submission.

mod controller;
mod field;
mod schema;

pub use controller::{FormController, Phase, SubmissionOutcome};
pub use field::{FieldChange, FieldName, FormValues};

#[cfg(test)]
pub use schema::{PASSWORD_PATTERN_WRONG, TERMS_INCORRECT};
