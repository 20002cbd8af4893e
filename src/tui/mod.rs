//! Terminal User Interface for the panel.

pub mod render;

use crate::app::{App, Event, Handler, Mode, spawn_fetch};
use crate::catalog::Client;
use anyhow::Result;
use ratatui::crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run the TUI application until the user quits.
///
/// The first catalog fetch is kicked off immediately; its result is applied
/// from the event loop, never from the worker thread.
///
/// # Errors
///
/// Returns an error if terminal setup, rendering, or event polling fails.
pub fn run(mut app: App, client: Client) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);

    let result = run_loop(&mut terminal, &mut app, &event_handler, &client);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
    client: &Client,
) -> Result<()> {
    let mut catalog_rx = spawn_fetch(client.clone());

    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        match event_handler.next()? {
            Event::Tick => {
                while let Ok(result) = catalog_rx.try_recv() {
                    app.apply_catalog(result);
                }
            }
            Event::Key(key) => {
                if handle_key_event(app, key) {
                    app.begin_refresh();
                    catalog_rx = spawn_fetch(client.clone());
                }
            }
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Dispatch one key event according to the current mode.
///
/// Returns `true` when the key requested a catalog refresh, which the caller
/// services by spawning a new fetch worker.
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match app.mode {
        Mode::ModelPicker => handle_picker_key(app, key.code),
        Mode::Templates => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                app.close_overlay();
            }
            false
        }
        Mode::Help => {
            app.close_overlay();
            false
        }
        Mode::Normal => handle_normal_key(app, key.code, key.modifiers),
    }
}

fn handle_picker_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Up => app.picker.select_prev(&app.models),
        KeyCode::Down => app.picker.select_next(&app.models),
        KeyCode::Enter => app.confirm_model_selection(),
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Char(c) => app.picker.handle_filter_char(c),
        KeyCode::Backspace => app.picker.handle_filter_backspace(),
        _ => {}
    }
    false
}

fn handle_normal_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return false;
    }

    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('m') => app.open_model_picker(),
        KeyCode::Char('t') => app.open_templates(),
        KeyCode::Char('?') => app.open_help(),
        KeyCode::Char('r') => return true,
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
    false
}
