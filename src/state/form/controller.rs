//! Form controller: values, inline errors, enablement and submission outcome

use super::field::{FieldChange, FieldName, FormValues};
use super::schema::{self, ValidationError};
use crate::submit::SubmissionError;
use tracing::{debug, info, warn};

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Inline error message per field; an empty slot means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    password: String,
    accept: String,
}

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Password => &self.password,
            FieldName::Accept => &self.accept,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Password => &mut self.password,
            FieldName::Accept => &mut self.accept,
        }
    }

    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        *self.slot_mut(field) = message.into();
    }

    pub fn clear(&mut self, field: FieldName) {
        self.slot_mut(field).clear();
    }

    /// True when no field has an error
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.password.is_empty() && self.accept.is_empty()
    }
}

/// Result of the last completed submission
///
/// Success and failure are exclusive: storing one drops the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    None,
    Success(String),
    Failure(String),
}

#[cfg(test)]
impl SubmissionOutcome {
    pub fn success(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Failure(payload) => Some(payload),
            _ => None,
        }
    }
}

/// A single-field validation result tagged with the input revision it saw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub revision: u64,
    pub field: FieldName,
    pub result: Result<(), ValidationError>,
}

/// An aggregate validation result tagged with the input revision it saw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateCheck {
    pub revision: u64,
    pub valid: bool,
}

/// Owns every piece of form state; the only writer of that state
#[derive(Debug, Clone, Default)]
pub struct FormController {
    values: FormValues,
    errors: FieldErrors,
    enabled: bool,
    outcome: SubmissionOutcome,
    phase: Phase,
    /// Bumped on every value change
    revision: u64,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the last aggregate validation passed
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an edit from the UI
    ///
    /// Replaces the values, then re-validates the edited field and the whole
    /// set against the new snapshot.
    pub fn on_change(&mut self, change: FieldChange) {
        self.values = self.values.with_change(&change);
        self.revision += 1;
        if matches!(self.phase, Phase::Succeeded | Phase::Failed) {
            self.phase = Phase::Editing;
        }

        let field_check = self.check_field(change.field());
        let aggregate_check = self.check_all();
        self.apply_field_check(field_check);
        self.apply_aggregate_check(aggregate_check);
    }

    /// Validate one field against the current values
    pub fn check_field(&self, field: FieldName) -> FieldCheck {
        FieldCheck {
            revision: self.revision,
            field,
            result: schema::validate_one(field, &self.values.get(field)),
        }
    }

    /// Validate the whole value set
    pub fn check_all(&self) -> AggregateCheck {
        AggregateCheck {
            revision: self.revision,
            valid: schema::validate_all(&self.values),
        }
    }

    /// Store a field result unless it was computed from older input
    ///
    /// Returns whether the result was applied.
    pub fn apply_field_check(&mut self, check: FieldCheck) -> bool {
        if check.revision != self.revision {
            debug!(
                field = check.field.as_str(),
                stale = check.revision,
                current = self.revision,
                "dropping stale field validation"
            );
            return false;
        }
        match check.result {
            Ok(()) => self.errors.clear(check.field),
            Err(err) => self.errors.set(check.field, err.message),
        }
        true
    }

    /// Store an aggregate result unless it was computed from older input
    ///
    /// Returns whether the result was applied.
    pub fn apply_aggregate_check(&mut self, check: AggregateCheck) -> bool {
        if check.revision != self.revision {
            debug!(
                stale = check.revision,
                current = self.revision,
                "dropping stale aggregate validation"
            );
            return false;
        }
        self.enabled = check.valid;
        true
    }

    /// Enter the submitting phase and snapshot the values to send
    ///
    /// Validity is not re-checked here; callers gate on [`Self::is_enabled`].
    pub fn begin_submit(&mut self) -> FormValues {
        info!(revision = self.revision, "submitting form");
        self.phase = Phase::Submitting;
        self.values.clone()
    }

    /// Record the result of a submission
    ///
    /// Field errors are left as they are.
    pub fn finish_submit(&mut self, result: Result<String, SubmissionError>) {
        match result {
            Ok(payload) => {
                info!("form submission succeeded");
                self.outcome = SubmissionOutcome::Success(payload);
                self.phase = Phase::Succeeded;
            }
            Err(err) => {
                warn!("form submission failed: {err}");
                self.outcome = SubmissionOutcome::Failure(err.payload());
                self.phase = Phase::Failed;
            }
        }
    }
}
