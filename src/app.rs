//! Application state and core logic

use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, FormFocus};
use crate::submit::{SubmissionError, Submitter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

type SubmissionResult = Result<String, SubmissionError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client that posts the form
    submitter: Arc<dyn Submitter>,
    /// Completed submissions travel back to the event loop through here
    outcome_tx: UnboundedSender<SubmissionResult>,
    outcome_rx: UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(submitter: Arc<dyn Submitter>, endpoint: impl Into<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(endpoint),
            submitter,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let focus = self.state.focus;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if is_control_chord(key.modifiers) => {
                self.submit();
            }
            KeyCode::Enter if key.modifiers.contains(SUBMIT_MODIFIER) => self.submit(),
            KeyCode::Tab => self.state.next_focus(),
            KeyCode::BackTab => self.state.prev_focus(),
            KeyCode::Char(' ') | KeyCode::Enter if focus == FormFocus::Accept => {
                self.state.toggle_accept();
            }
            KeyCode::Enter if focus == FormFocus::Submit => self.submit(),
            KeyCode::Enter => self.state.next_focus(),
            KeyCode::Char(_) if is_control_chord(key.modifiers) => {}
            KeyCode::Char(c) => self.state.form_input_char(c),
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Dispatch a submission if the submit control is active
    ///
    /// The request runs on its own task; its result is applied by
    /// [`Self::poll_submissions`].
    pub fn submit(&mut self) {
        if !self.state.can_submit() {
            debug!("submit ignored: form not submittable");
            return;
        }

        let values = self.state.form.begin_submit();
        let submitter = Arc::clone(&self.submitter);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = submitter.submit(values).await;
            if tx.send(result).is_err() {
                debug!("submission finished after the app shut down");
            }
        });
    }

    /// Apply any submissions that have completed since the last call
    ///
    /// Returns how many were applied.
    pub fn poll_submissions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(result) = self.outcome_rx.try_recv() {
            self.state.form.finish_submit(result);
            applied += 1;
        }
        applied
    }
}

/// Ctrl held without Alt
///
/// AltGr arrives as Ctrl+Alt on Windows and produces printable characters.
fn is_control_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}
