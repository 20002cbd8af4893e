//! Main layout rendering: speakers panel, control bar, chat and audio panels,
//! and the status bar.

use super::colors;
use crate::app::{App, CatalogPhase};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the main panel grid into the given area.
pub fn render_main(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(33), Constraint::Percentage(67)])
        .split(area);

    render_speakers_panel(frame, columns[0]);

    let center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);

    render_control_bar(frame, app, center[0]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(center[1]);

    render_chat_panel(frame, lower[0]);
    render_audio_panel(frame, lower[1]);
}

fn placeholder_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
}

fn render_speakers_panel(frame: &mut Frame<'_>, area: Rect) {
    let body = Paragraph::new(Line::from(Span::styled(
        "Coming soon",
        Style::default().fg(colors::TEXT_MUTED),
    )))
    .block(placeholder_block("Speakers & Voice Settings"));
    frame.render_widget(body, area);
}

fn render_chat_panel(frame: &mut Frame<'_>, area: Rect) {
    let body = Paragraph::new(Line::from(Span::styled(
        "Agent chat and prompts go here",
        Style::default().fg(colors::TEXT_MUTED),
    )))
    .block(placeholder_block("Chat"));
    frame.render_widget(body, area);
}

fn render_audio_panel(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Conversation script here...",
            Style::default().fg(colors::TEXT_MUTED),
        )),
        Line::from(Span::styled(
            "Streaming player & waveform here",
            Style::default().fg(colors::TEXT_MUTED),
        )),
    ];
    let body = Paragraph::new(lines).block(placeholder_block("VibeVoice Audio"));
    frame.render_widget(body, area);
}

fn render_control_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let model_span = match &app.catalog {
        CatalogPhase::Loading => {
            Span::styled("loading...", Style::default().fg(colors::ACCENT_WARNING))
        }
        CatalogPhase::Failed(_) if app.models.is_empty() => {
            Span::styled("unavailable", Style::default().fg(colors::ACCENT_NEGATIVE))
        }
        CatalogPhase::Ready | CatalogPhase::Failed(_) => app.selected_model_label().map_or_else(
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
    };

    let line = Line::from(vec![
        Span::styled("Model: ", Style::default().fg(colors::TEXT_DIM)),
        model_span,
        Span::raw("   "),
        Span::styled(
            "[ Start New Conversation ]",
            Style::default().fg(colors::TEXT_DIM),
        ),
        Span::raw("   "),
        Span::styled("[ Language Config ]", Style::default().fg(colors::TEXT_DIM)),
    ]);

    let bar = Paragraph::new(line).block(placeholder_block("Controls"));
    frame.render_widget(bar, area);
}

/// Render the one-line status bar.
pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let span = match (&app.catalog, &app.status_message) {
        (CatalogPhase::Failed(reason), _) => Span::styled(
            format!(" Models: {reason} "),
            Style::default()
                .fg(colors::ACCENT_NEGATIVE)
                .add_modifier(Modifier::BOLD),
        ),
        (_, Some(message)) => Span::styled(
            format!(" {message} "),
            Style::default().fg(colors::ACCENT_POSITIVE),
        ),
        (_, None) => Span::styled(
            format!(
                " {} models | [m]odels [r]efresh [t]emplates [?]help [q]uit ",
                app.models.len()
            ),
            Style::default().fg(colors::TEXT_DIM),
        ),
    };

    let bar = Paragraph::new(Line::from(span)).style(Style::default().bg(colors::STATUS_BG));
    frame.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Model;
    use crate::config::Config;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)])
                    .split(frame.area());
                render_main(frame, app, chunks[0]);
                render_status_bar(frame, app, chunks[1]);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_placeholder_panels_render() {
        let app = App::new(Config::default());
        let text = buffer_text(&draw(&app));

        assert!(text.contains("Speakers & Voice Settings"));
        assert!(text.contains("Chat"));
        assert!(text.contains("VibeVoice Audio"));
        assert!(text.contains("Coming soon"));
    }

    #[test]
    fn test_control_bar_shows_loading_then_selection() {
        let mut app = App::new(Config::default());
        let text = buffer_text(&draw(&app));
        assert!(text.contains("loading..."));

        app.apply_catalog(Ok(vec![Model {
            id: "a".to_string(),
            display_name: "Alpha".to_string(),
        }]));
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Alpha"));
    }

    #[test]
    fn test_status_bar_surfaces_fetch_failure() {
        let mut app = App::new(Config::default());
        app.apply_catalog(Err(crate::catalog::CatalogError::Status(500)));
        let text = buffer_text(&draw(&app));

        assert!(text.contains("server returned HTTP 500"));
        assert!(text.contains("unavailable"));
    }

    #[test]
    fn test_status_bar_shows_model_count_and_hints() {
        let mut app = App::new(Config::default());
        app.apply_catalog(Ok(vec![
            Model {
                id: "a".to_string(),
                display_name: "Alpha".to_string(),
            },
            Model {
                id: "b".to_string(),
                display_name: "Beta".to_string(),
            },
        ]));
        let text = buffer_text(&draw(&app));

        assert!(text.contains("2 models"));
        assert!(text.contains("[m]odels"));
    }
}
