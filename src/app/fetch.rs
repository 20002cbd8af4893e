//! Background catalog fetch worker.
//!
//! The fetch runs on a plain thread and hands its result back over a channel
//! that the UI drains on its tick. If the UI exits while the request is still
//! in flight, the receiver is gone and the send fails; the late result is
//! dropped instead of being applied to torn-down state.

use crate::catalog::{CatalogError, Client, Model};
use std::sync::mpsc::{self, Receiver};
use tracing::debug;

/// Outcome of one catalog fetch, as delivered by the worker.
pub type CatalogResult = Result<Vec<Model>, CatalogError>;

/// Spawn a worker thread that fetches the catalog once.
///
/// Returns the receiving end of a one-shot channel carrying the result.
#[must_use]
pub fn spawn_fetch(client: Client) -> Receiver<CatalogResult> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        debug!("Fetching model catalog from {}", client.base_url());
        let result = client.fetch_models();
        if tx.send(result).is_err() {
            debug!("Catalog result arrived after the UI exited; dropping");
        }
    });
    rx
}
