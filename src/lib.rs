//! Terminal control panel for a local voice-conversation lab
//!
//! The panel talks to a locally running lab server, presents the catalog of
//! models the server can run, and hosts the (placeholder) surfaces for
//! speakers, chat, and audio generation that will grow real behavior as the
//! server does.

pub mod app;
pub mod catalog;
pub mod config;
pub mod paths;
pub mod tui;

pub use app::{App, CatalogPhase, Mode};
pub use catalog::{CatalogError, Client, Model};
pub use config::Config;
