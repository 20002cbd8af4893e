//! Model picker overlay rendering.

use super::centered_rect_absolute;
use crate::app::App;
use crate::tui::render::colors;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the model picker overlay.
pub fn render_model_picker_overlay(frame: &mut Frame<'_>, app: &App) {
    let filtered = app.picker.filtered(&app.models);
    // header + filter + rows + footer, padded to 2 borders
    let height = u16::try_from(filtered.len().max(1)).unwrap_or(u16::MAX).saturating_add(8);
    let area = centered_rect_absolute(55, height.min(frame.area().height), frame.area());

    let selected_idx = app.picker.selected;

    let mut lines: Vec<Line<'_>> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Current: ", Style::default().fg(colors::TEXT_DIM)),
        app.selected_model_label().map_or_else(
            || Span::styled("none", Style::default().fg(colors::TEXT_MUTED)),
            |label| {
                Span::styled(
                    label,
                    Style::default()
                        .fg(colors::ACCENT_POSITIVE)
                        .add_modifier(Modifier::BOLD),
                )
            },
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(colors::TEXT_DIM)),
        Span::styled(
            format!("{}_", &app.picker.filter),
            Style::default().fg(colors::TEXT_PRIMARY),
        ),
    ]));
    lines.push(Line::from(""));

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "No matching models",
            Style::default().fg(colors::TEXT_MUTED),
        )));
    } else {
        for (idx, model) in filtered.iter().enumerate() {
            let is_cursor = idx == selected_idx;
            let is_current = model.id == app.selected_model;

            let row_style = if is_cursor {
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .bg(colors::SURFACE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::TEXT_PRIMARY)
            };

            let cursor = if is_cursor { "> " } else { "  " };
            let check = if is_current { "* " } else { "  " };

            lines.push(Line::from(Span::styled(
                format!("{cursor}{check}{}", model.display_name),
                row_style,
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down select | Enter confirm | Esc cancel | Type to filter",
        Style::default().fg(colors::TEXT_MUTED),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Models ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
