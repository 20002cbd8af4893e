//! Core application state: catalog, selection, and UI mode.

use super::ModelPickerState;
use crate::catalog::{CatalogError, Model};
use crate::config::Config;
use tracing::{info, warn};

/// Which surface currently owns keyboard input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Main panel layout, no overlay
    #[default]
    Normal,
    /// Model picker overlay
    ModelPicker,
    /// Language templates overlay
    Templates,
    /// Key binding help overlay
    Help,
}

/// Observable outcome of the most recent catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogPhase {
    /// A fetch is in flight and no result has been applied yet
    Loading,
    /// The last fetch succeeded
    Ready,
    /// The last fetch failed; the message names the failure kind
    Failed(String),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,
    /// Model catalog as last received from the server, in server order
    pub models: Vec<Model>,
    /// Id of the committed model selection; empty means no selection
    pub selected_model: String,
    /// Outcome of the most recent fetch, rendered in the status line
    pub catalog: CatalogPhase,
    /// Current input mode
    pub mode: Mode,
    /// Model picker overlay state
    pub picker: ModelPickerState,
    /// Transient status message shown in the status bar
    pub status_message: Option<String>,
    /// Whether the application should exit on the next loop iteration
    pub should_quit: bool,
}

impl App {
    /// Create a new application with an empty catalog, awaiting the first fetch.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            models: Vec::new(),
            selected_model: String::new(),
            catalog: CatalogPhase::Loading,
            mode: Mode::Normal,
            picker: ModelPickerState::new(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Apply the result of a catalog fetch.
    ///
    /// On success the stored list is replaced wholesale and the selection is
    /// re-validated: a selection that no longer names a member falls back to
    /// the new first entry, or to unset when the list is empty. Applying the
    /// same payload twice is a no-op beyond the first.
    ///
    /// On failure the previous list (possibly empty) is kept untouched and
    /// only the phase changes, so the rest of the panel is unaffected.
    pub fn apply_catalog(&mut self, result: Result<Vec<Model>, CatalogError>) {
        match result {
            Ok(models) => {
                info!("Catalog fetch succeeded with {} models", models.len());
                self.models = models;
                if !self.models.iter().any(|m| m.id == self.selected_model) {
                    self.selected_model = self
                        .models
                        .first()
                        .map_or_else(String::new, |m| m.id.clone());
                }
                self.catalog = CatalogPhase::Ready;
            }
            Err(err) => {
                warn!("Catalog fetch failed: {err}");
                self.catalog = CatalogPhase::Failed(err.to_string());
            }
        }
    }

    /// Mark a new fetch as in flight, keeping the current (stale) list visible.
    pub fn begin_refresh(&mut self) {
        self.catalog = CatalogPhase::Loading;
        self.set_status("Refreshing models...");
    }

    /// Overwrite the committed selection unconditionally.
    ///
    /// Callers feed this ids taken from the rendered list; membership is
    /// re-checked on the next catalog refresh rather than here.
    pub fn select_model(&mut self, id: impl Into<String>) {
        self.selected_model = id.into();
    }

    /// Display name of the committed selection, if it names a catalog member.
    #[must_use]
    pub fn selected_model_label(&self) -> Option<&str> {
        self.models
            .iter()
            .find(|m| m.id == self.selected_model)
            .map(|m| m.display_name.as_str())
    }

    /// Open the model picker overlay with the cursor on the current selection.
    pub fn open_model_picker(&mut self) {
        self.picker.start(&self.models, &self.selected_model);
        self.mode = Mode::ModelPicker;
    }

    /// Commit the picker's highlighted model and close the overlay.
    pub fn confirm_model_selection(&mut self) {
        if let Some(chosen) = self.picker.selected_entry(&self.models) {
            let label = chosen.display_name.clone();
            let id = chosen.id.clone();
            self.select_model(id);
            self.set_status(format!("Model set to {label}"));
        }
        self.close_overlay();
    }

    /// Open the language templates overlay.
    pub const fn open_templates(&mut self) {
        self.mode = Mode::Templates;
    }

    /// Open the help overlay.
    pub const fn open_help(&mut self) {
        self.mode = Mode::Help;
    }

    /// Close any overlay and return to the main layout.
    pub fn close_overlay(&mut self) {
        self.picker.clear();
        self.mode = Mode::Normal;
    }

    /// Set the transient status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the transient status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Request application exit.
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}
