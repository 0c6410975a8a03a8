//! Application state definitions

use super::form_state::FormState;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The applicant intake form
    #[default]
    Form,
    /// Accepted payload display
    Submitted,
}

/// Top-level application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: FormState,
    /// Pretty-printed JSON of the last accepted record
    pub submitted_payload: Option<String>,
}

impl AppState {
    /// Discard the current record and start over with a fresh form
    pub fn reset_form(&mut self) {
        self.form = FormState::new();
        self.submitted_payload = None;
        self.current_view = View::Form;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Focus;

    #[test]
    fn test_default_view_is_form() {
        let state = AppState::default();
        assert!(matches!(state.current_view, View::Form));
        assert!(state.submitted_payload.is_none());
    }

    #[test]
    fn test_reset_form_discards_record() {
        let mut state = AppState::default();
        state.form.input_char('A');
        state.current_view = View::Submitted;
        state.submitted_payload = Some("{}".to_string());

        state.reset_form();
        assert!(matches!(state.current_view, View::Form));
        assert!(state.submitted_payload.is_none());
        assert_eq!(state.form.record.full_name, "");
        assert_eq!(state.form.focus, Focus::FullName);
    }
}
