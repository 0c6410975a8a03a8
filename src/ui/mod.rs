//! UI module for rendering the TUI

mod components;
mod form;
mod submitted;

use crate::app::App;
use crate::state::{Focus, View};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Reserve the bottom line for the status bar
    let content_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };

    match app.state.current_view {
        View::Form => form::draw(frame, content_area, app),
        View::Submitted => submitted::draw(frame, content_area, app),
    }

    draw_status_bar(frame, app);
}

/// Draw the status bar with key hints and validation status
fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    } else if matches!(app.state.current_view, View::Form)
        && app.state.form.submit_attempted()
        && !app.state.form.is_valid()
    {
        let count = app.state.form.error_count();
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{count} invalid"),
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current focus
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Submitted => " Enter:new application".to_string(),
        View::Form => match app.state.form.focus {
            Focus::HasWorkExperience | Focus::KnowsOtherLanguages => {
                " Tab:next  Space:toggle".to_string()
            }
            Focus::EducationLevel => " Tab:next  ↑/↓/←/→:select".to_string(),
            Focus::LanguageAdd | Focus::LanguageRemove(_) | Focus::Submit => {
                " Tab:next  Enter:activate".to_string()
            }
            _ => " Tab:next  Enter:next field".to_string(),
        },
    }
}
