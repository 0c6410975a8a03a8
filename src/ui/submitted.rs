//! Submitted-payload view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the accepted application payload as pretty JSON
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let payload = app.state.submitted_payload.as_deref().unwrap_or("{}");

    let block = Block::default()
        .title(" Application Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let body = Paragraph::new(payload)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(body, chunks[0]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": new application  "),
        Span::styled("^C", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[1]);
}
