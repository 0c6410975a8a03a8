//! Form state management
//!
//! Owns the application record, the current validation errors, and the
//! focus position. Every mutation revalidates the whole record, so errors
//! for paths whose controlling condition no longer applies are cleared.

use super::record::{ApplicationRecord, EducationLevel, LanguageEntry};
use super::validation::{validate, FieldError, FieldPath, ValidationErrors};
use std::collections::BTreeSet;

/// One interactive element of the form, in the order fields appear on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FullName,
    HasWorkExperience,
    CompanyName,
    KnowsOtherLanguages,
    LanguageName(usize),
    LanguageRemove(usize),
    LanguageAdd,
    EducationLevel,
    SchoolName,
    UniversityName,
    Submit,
}

impl Focus {
    /// The error path for this element, if it is a text field
    pub fn field_path(&self) -> Option<FieldPath> {
        match self {
            Self::FullName => Some(FieldPath::FullName),
            Self::CompanyName => Some(FieldPath::CompanyName),
            Self::LanguageName(index) => Some(FieldPath::LanguageName(*index)),
            Self::SchoolName => Some(FieldPath::SchoolName),
            Self::UniversityName => Some(FieldPath::UniversityName),
            _ => None,
        }
    }
}

/// Current state of the single form screen
#[derive(Debug, Clone)]
pub struct FormState {
    pub record: ApplicationRecord,
    errors: ValidationErrors,
    touched: BTreeSet<FieldPath>,
    submit_attempted: bool,
    pub focus: Focus,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let record = ApplicationRecord::default();
        let errors = validate(&record).err().unwrap_or_default();
        Self {
            record,
            errors,
            touched: BTreeSet::new(),
            submit_attempted: false,
            focus: Focus::FullName,
        }
    }

    /// All currently visible interactive elements, derived from the record
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::FullName, Focus::HasWorkExperience];
        if self.record.has_work_experience {
            order.push(Focus::CompanyName);
        }
        order.push(Focus::KnowsOtherLanguages);
        if self.record.knows_other_languages {
            for index in 0..self.record.languages.len() {
                order.push(Focus::LanguageName(index));
                order.push(Focus::LanguageRemove(index));
            }
            order.push(Focus::LanguageAdd);
        }
        order.push(Focus::EducationLevel);
        match self.record.education_level {
            EducationLevel::NoFormalEducation => {}
            EducationLevel::HighSchoolDiploma => order.push(Focus::SchoolName),
            EducationLevel::BachelorsDegree => order.push(Focus::UniversityName),
        }
        order.push(Focus::Submit);
        order
    }

    pub fn next_focus(&mut self) {
        let order = self.focus_order();
        let position = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(position + 1) % order.len()];
    }

    pub fn prev_focus(&mut self) {
        let order = self.focus_order();
        let position = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(position + order.len() - 1) % order.len()];
    }

    /// Snap focus to the nearest surviving element after a mutation hid it
    fn normalize_focus(&mut self) {
        let order = self.focus_order();
        if order.contains(&self.focus) {
            return;
        }
        let last_language = self.record.languages.len().checked_sub(1);
        self.focus = match (self.focus, last_language) {
            (Focus::LanguageName(_), Some(last)) if self.record.knows_other_languages => {
                Focus::LanguageName(last)
            }
            (Focus::LanguageRemove(_), Some(last)) if self.record.knows_other_languages => {
                Focus::LanguageRemove(last)
            }
            // Editor hidden entirely: land on its controlling checkbox
            (Focus::LanguageName(_) | Focus::LanguageRemove(_) | Focus::LanguageAdd, _) => {
                Focus::KnowsOtherLanguages
            }
            (Focus::CompanyName, _) => Focus::HasWorkExperience,
            (Focus::SchoolName | Focus::UniversityName, _) => Focus::EducationLevel,
            _ => order[0],
        };
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.record).err().unwrap_or_default();
    }

    /// Text of the focused field, if focus is on a text field
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::FullName => Some(&mut self.record.full_name),
            Focus::CompanyName => Some(&mut self.record.company_name),
            Focus::LanguageName(index) => {
                self.record.languages.get_mut(index).map(|e| &mut e.name)
            }
            Focus::SchoolName => Some(&mut self.record.school_name),
            Focus::UniversityName => Some(&mut self.record.university_name),
            _ => None,
        }
    }

    /// Type one character into the focused text field
    pub fn input_char(&mut self, c: char) {
        let path = self.focus.field_path();
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
            if let Some(path) = path {
                self.touched.insert(path);
            }
            self.revalidate();
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        let path = self.focus.field_path();
        if let Some(text) = self.focused_text_mut() {
            text.pop();
            if let Some(path) = path {
                self.touched.insert(path);
            }
            self.revalidate();
        }
    }

    pub fn toggle_has_work_experience(&mut self) {
        self.record.has_work_experience = !self.record.has_work_experience;
        self.revalidate();
        self.normalize_focus();
    }

    /// Set the knows-other-languages flag.
    ///
    /// Whenever the flag is set to true the list is replaced with a single
    /// empty entry, discarding prior entries. This happens on every
    /// transition to true, so unchecking and re-checking clears history
    /// (kept for compatibility with the reference behavior).
    pub fn set_knows_other_languages(&mut self, value: bool) {
        self.record.knows_other_languages = value;
        if value {
            self.record.languages = vec![LanguageEntry::default()];
        }
        self.revalidate();
        self.normalize_focus();
    }

    pub fn toggle_knows_other_languages(&mut self) {
        self.set_knows_other_languages(!self.record.knows_other_languages);
    }

    /// Append one empty language entry; always allowed while the list is shown
    pub fn append_language(&mut self) {
        self.record.languages.push(LanguageEntry::default());
        self.revalidate();
    }

    /// Remove the language entry at `index`.
    ///
    /// Removal below a length of 1 is a hard floor: the call is rejected
    /// and returns false. Remaining entries keep their relative order.
    pub fn remove_language(&mut self, index: usize) -> bool {
        if self.record.languages.len() <= 1 || index >= self.record.languages.len() {
            return false;
        }
        self.record.languages.remove(index);
        // Touched indices above the removed entry shift down with it
        self.touched = self
            .touched
            .iter()
            .filter_map(|path| match *path {
                FieldPath::LanguageName(i) if i == index => None,
                FieldPath::LanguageName(i) if i > index => Some(FieldPath::LanguageName(i - 1)),
                other => Some(other),
            })
            .collect();
        self.revalidate();
        self.normalize_focus();
        true
    }

    pub fn set_education_level(&mut self, level: EducationLevel) {
        self.record.education_level = level;
        self.revalidate();
        self.normalize_focus();
    }

    /// Run validation and store the resulting error map
    pub fn validate(&mut self) -> Result<ApplicationRecord, ValidationErrors> {
        let result = validate(&self.record);
        self.errors = result.as_ref().err().cloned().unwrap_or_default();
        result
    }

    /// Attempt submission: on acceptance the record is handed back for the
    /// submission collaborator; on rejection errors are stored for display
    /// and no external effect occurs.
    pub fn submit(&mut self) -> Option<ApplicationRecord> {
        self.submit_attempted = true;
        match self.validate() {
            Ok(record) => Some(record),
            Err(_) => None,
        }
    }

    /// Error message to display for a path, gated on touched/submit status
    pub fn shown_error(&self, path: FieldPath) -> Option<&str> {
        if self.submit_attempted || self.touched.contains(&path) {
            self.errors.get(path)
        } else {
            None
        }
    }

    /// Current error count, regardless of display gating
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Current errors as owned values, in path order
    pub fn field_errors(&self) -> Vec<FieldError> {
        self.errors
            .iter()
            .map(|(path, message)| FieldError {
                path,
                message: message.to_string(),
            })
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }
}
