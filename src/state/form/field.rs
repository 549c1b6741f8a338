//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the form's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Password,
    Accept,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 2] = [FieldName::Password, FieldName::Accept];

    /// Wire name used in the submitted JSON body
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Password => "password",
            FieldName::Accept => "accept",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Password => "Password",
            FieldName::Accept => "Accept terms",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type-safe field values
///
/// Checkbox fields carry their checked flag, everything else carries text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

/// A single edit coming from the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Password(String),
    Accept(bool),
}

impl FieldChange {
    /// The field this change targets
    pub fn field(&self) -> FieldName {
        match self {
            FieldChange::Password(_) => FieldName::Password,
            FieldChange::Accept(_) => FieldName::Accept,
        }
    }
}

/// Current values of every field, serialized as the request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub password: String,
    pub accept: bool,
}

impl FormValues {
    #[cfg(test)]
    pub fn new(password: impl Into<String>, accept: bool) -> Self {
        Self {
            password: password.into(),
            accept,
        }
    }

    /// Return a copy with `change` applied; `self` is left untouched
    pub fn with_change(&self, change: &FieldChange) -> Self {
        match change {
            FieldChange::Password(text) => Self {
                password: text.clone(),
                ..self.clone()
            },
            FieldChange::Accept(checked) => Self {
                accept: *checked,
                ..self.clone()
            },
        }
    }

    /// Get the value of a single field
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::Password => FieldValue::Text(self.password.clone()),
            FieldName::Accept => FieldValue::Checked(self.accept),
        }
    }
}
