//! Applicant form rendering
//!
//! The rendered field set is derived from the current record on every
//! frame: conditional fields appear only while their controlling flag or
//! enum value selects them.

use super::components::{
    draw_checkbox, draw_radio_group, draw_text_field, render_button, BUTTON_HEIGHT, FIELD_HEIGHT,
};
use crate::app::App;
use crate::state::{FieldPath, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// One visible row of the form
enum Row {
    Text {
        label: &'static str,
        path: FieldPath,
        focus: Focus,
    },
    Checkbox {
        label: &'static str,
        focus: Focus,
    },
    Language {
        index: usize,
    },
    AddLanguage,
    Education,
    Submit,
}

impl Row {
    fn height(&self, app: &App) -> u16 {
        match self {
            Row::Text { path, .. } => {
                let error_row = u16::from(app.state.form.shown_error(*path).is_some());
                FIELD_HEIGHT + error_row
            }
            Row::Checkbox { .. } => 1,
            Row::Language { index } => {
                let error_row = u16::from(
                    app.state
                        .form
                        .shown_error(FieldPath::LanguageName(*index))
                        .is_some(),
                );
                FIELD_HEIGHT + error_row
            }
            Row::AddLanguage | Row::Submit => BUTTON_HEIGHT,
            // border rows plus one line per education level
            Row::Education => 5,
        }
    }
}

/// Rows to render, derived from the record's controlling fields
fn visible_rows(app: &App) -> Vec<Row> {
    let record = &app.state.form.record;
    let mut rows = vec![
        Row::Text {
            label: "Full Name",
            path: FieldPath::FullName,
            focus: Focus::FullName,
        },
        Row::Checkbox {
            label: "Work Experience?",
            focus: Focus::HasWorkExperience,
        },
    ];
    if record.has_work_experience {
        rows.push(Row::Text {
            label: "Company Name",
            path: FieldPath::CompanyName,
            focus: Focus::CompanyName,
        });
    }
    rows.push(Row::Checkbox {
        label: "Know Other Languages?",
        focus: Focus::KnowsOtherLanguages,
    });
    if record.knows_other_languages {
        for index in 0..record.languages.len() {
            rows.push(Row::Language { index });
        }
        rows.push(Row::AddLanguage);
    }
    rows.push(Row::Education);
    if let Some((label, path, focus)) = match record.education_level {
        crate::state::EducationLevel::NoFormalEducation => None,
        crate::state::EducationLevel::HighSchoolDiploma => {
            Some(("School Name", FieldPath::SchoolName, Focus::SchoolName))
        }
        crate::state::EducationLevel::BachelorsDegree => Some((
            "University Name",
            FieldPath::UniversityName,
            Focus::UniversityName,
        )),
    } {
        rows.push(Row::Text { label, path, focus });
    }
    rows.push(Row::Submit);
    rows
}

/// Draw the form view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Applicant Intake Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let rows = visible_rows(app);
    let mut constraints: Vec<Constraint> =
        rows.iter().map(|row| Constraint::Length(row.height(app))).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (row, chunk) in rows.iter().zip(chunks.iter()) {
        draw_row(frame, *chunk, app, row);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: &Row) {
    let form = &app.state.form;
    let record = &form.record;

    match row {
        Row::Text { label, path, focus } => {
            let value = match path {
                FieldPath::FullName => record.full_name.as_str(),
                FieldPath::CompanyName => record.company_name.as_str(),
                FieldPath::SchoolName => record.school_name.as_str(),
                FieldPath::UniversityName => record.university_name.as_str(),
                _ => "",
            };
            draw_text_field(
                frame,
                area,
                label,
                value,
                form.focus == *focus,
                form.shown_error(*path),
            );
        }
        Row::Checkbox { label, focus } => {
            let checked = match focus {
                Focus::HasWorkExperience => record.has_work_experience,
                _ => record.knows_other_languages,
            };
            draw_checkbox(frame, area, label, checked, form.focus == *focus);
        }
        Row::Language { index } => draw_language_row(frame, area, app, *index),
        Row::AddLanguage => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(20), Constraint::Min(0)])
                .split(area);
            render_button(
                frame,
                chunks[0],
                "+ Add Language",
                form.focus == Focus::LanguageAdd,
                true,
                Some(Color::Green),
            );
        }
        Row::Education => {
            let options: Vec<(&str, bool)> = crate::state::EducationLevel::ALL
                .iter()
                .map(|level| (level.label(), *level == record.education_level))
                .collect();
            draw_radio_group(
                frame,
                area,
                "Education Level",
                &options,
                form.focus == Focus::EducationLevel,
            );
        }
        Row::Submit => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(14), Constraint::Min(0)])
                .split(area);
            render_button(
                frame,
                chunks[0],
                "Submit",
                form.focus == Focus::Submit,
                true,
                Some(Color::Green),
            );
        }
    }
}

fn draw_language_row(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let form = &app.state.form;
    let record = &form.record;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(12)])
        .split(area);

    let name = record
        .languages
        .get(index)
        .map(|entry| entry.name.as_str())
        .unwrap_or_default();

    draw_text_field(
        frame,
        chunks[0],
        "Language Name",
        name,
        form.focus == Focus::LanguageName(index),
        form.shown_error(FieldPath::LanguageName(index)),
    );

    // The remove control is disabled while only one entry remains
    let removable = record.languages.len() > 1;
    let button_area = Rect {
        height: BUTTON_HEIGHT.min(chunks[1].height),
        ..chunks[1]
    };
    render_button(
        frame,
        button_area,
        "Remove",
        form.focus == Focus::LanguageRemove(index),
        removable,
        Some(Color::Red),
    );
}
