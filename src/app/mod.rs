//! Application state and logic

mod event;
mod fetch;
mod picker;
mod state;

pub use event::{Event, Handler};
pub use fetch::{CatalogResult, spawn_fetch};
pub use picker::ModelPickerState;
pub use state::{App, CatalogPhase, Mode};
