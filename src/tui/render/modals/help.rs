//! Key binding help overlay rendering.

use super::centered_rect_absolute;
use crate::tui::render::colors;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BINDINGS: &[(&str, &str)] = &[
    ("m", "Open the model picker"),
    ("r", "Refresh the model catalog"),
    ("t", "Open the language templates"),
    ("?", "Show this help"),
    ("q", "Quit"),
];

/// Render the help overlay listing key bindings.
pub fn render_help_overlay(frame: &mut Frame<'_>) {
    let height = u16::try_from(BINDINGS.len()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect_absolute(50, height, frame.area());

    let mut lines: Vec<Line<'_>> = vec![
        Line::from(Span::styled(
            "Key Bindings",
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (key, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<4}"), Style::default().fg(colors::ACCENT_POSITIVE)),
            Span::styled(*description, Style::default().fg(colors::TEXT_PRIMARY)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
