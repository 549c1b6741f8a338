//! Application state definitions

use super::form::{FieldChange, FormController, Phase};

/// Which control on the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Password,
    Accept,
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 3] = [FormFocus::Password, FormFocus::Accept, FormFocus::Submit];

    fn index(&self) -> usize {
        match self {
            FormFocus::Password => 0,
            FormFocus::Accept => 1,
            FormFocus::Submit => 2,
        }
    }

    /// Next control, wrapping around
    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping around
    pub fn prev(&self) -> Self {
        let count = Self::ORDER.len();
        Self::ORDER[(self.index() + count - 1) % count]
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: FormController,
    pub focus: FormFocus,
    /// Endpoint shown in the status bar
    pub endpoint: String,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            form: FormController::new(),
            focus: FormFocus::default(),
            endpoint: endpoint.into(),
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused text field
    pub fn form_input_char(&mut self, c: char) {
        if self.focus == FormFocus::Password {
            let mut password = self.form.values().password.clone();
            password.push(c);
            self.form.on_change(FieldChange::Password(password));
        }
    }

    /// Delete the last character of the focused text field
    pub fn form_backspace(&mut self) {
        if self.focus == FormFocus::Password {
            let mut password = self.form.values().password.clone();
            if password.pop().is_some() {
                self.form.on_change(FieldChange::Password(password));
            }
        }
    }

    /// Flip the terms checkbox
    pub fn toggle_accept(&mut self) {
        let checked = !self.form.values().accept;
        self.form.on_change(FieldChange::Accept(checked));
    }

    /// Whether the submit control is active
    pub fn can_submit(&self) -> bool {
        self.form.is_enabled() && self.form.phase() != Phase::Submitting
    }
}
