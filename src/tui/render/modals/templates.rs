//! Language templates overlay rendering.
//!
//! The template manager itself (monologue/dialogue bodies, versions) lives on
//! the server side and has no UI yet; this overlay is the placeholder surface
//! the rest of the panel toggles.

use super::centered_rect_absolute;
use crate::tui::render::colors;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the language templates overlay.
pub fn render_templates_overlay(frame: &mut Frame<'_>) {
    let area = centered_rect_absolute(60, 9, frame.area());

    let lines = vec![
        Line::from(Span::styled(
            "Language Templates",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Template manager will go here (monologue/dialogue, versions)",
            Style::default().fg(colors::TEXT_MUTED),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc close",
            Style::default().fg(colors::TEXT_MUTED),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Language Config ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
