//! Application core: key handling and the submit flow

use crate::state::{AppState, Focus, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event for the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Form => self.handle_form_key(key)?,
            View::Submitted => self.handle_submitted_key(key),
        }
        Ok(())
    }

    /// Handle keys on the form view
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let focus = self.state.form.focus;

        match key.code {
            KeyCode::Tab => self.state.form.next_focus(),
            KeyCode::BackTab => self.state.form.prev_focus(),

            // Arrows cycle the radio value while the education group is
            // focused; elsewhere Up/Down move focus
            KeyCode::Right | KeyCode::Down if focus == Focus::EducationLevel => {
                let next = self.state.form.record.education_level.next();
                self.state.form.set_education_level(next);
            }
            KeyCode::Left | KeyCode::Up if focus == Focus::EducationLevel => {
                let prev = self.state.form.record.education_level.prev();
                self.state.form.set_education_level(prev);
            }
            KeyCode::Down => self.state.form.next_focus(),
            KeyCode::Up => self.state.form.prev_focus(),

            // Space toggles checkboxes and cycles the radio; otherwise it
            // is ordinary text input
            KeyCode::Char(' ') => match focus {
                Focus::HasWorkExperience => self.state.form.toggle_has_work_experience(),
                Focus::KnowsOtherLanguages => self.state.form.toggle_knows_other_languages(),
                Focus::EducationLevel => {
                    let next = self.state.form.record.education_level.next();
                    self.state.form.set_education_level(next);
                }
                _ => self.state.form.input_char(' '),
            },

            KeyCode::Enter => match focus {
                Focus::HasWorkExperience => self.state.form.toggle_has_work_experience(),
                Focus::KnowsOtherLanguages => self.state.form.toggle_knows_other_languages(),
                Focus::LanguageAdd => self.state.form.append_language(),
                Focus::LanguageRemove(index) => {
                    if !self.state.form.remove_language(index) {
                        self.status_message =
                            Some("At least one language entry must remain".to_string());
                    }
                }
                Focus::Submit => self.submit()?,
                // Enter on a field advances to the next one
                _ => self.state.form.next_focus(),
            },

            KeyCode::Char(c) => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the submitted-payload view
    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n') => {
                self.state.reset_form();
                self.status_message = None;
            }
            _ => {}
        }
    }

    /// Run validation and, on acceptance, hand the record to the display
    /// collaborator (the submitted-payload view)
    fn submit(&mut self) -> Result<()> {
        match self.state.form.submit() {
            Some(record) => {
                tracing::info!(full_name = %record.full_name, "application accepted");
                self.state.submitted_payload = Some(serde_json::to_string_pretty(&record)?);
                self.state.current_view = View::Submitted;
                self.status_message = None;
            }
            None => {
                let count = self.state.form.error_count();
                for error in self.state.form.field_errors() {
                    tracing::debug!(%error, "validation failure");
                }
                tracing::debug!(errors = count, "application rejected");
                self.status_message = Some(if count == 1 {
                    "1 field needs attention".to_string()
                } else {
                    format!("{count} fields need attention")
                });
            }
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
