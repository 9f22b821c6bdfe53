//! Autosave des Sitzungszustands nach jeder Mutation.

use crate::app::AppState;
use crate::persistence;

/// Schreibt den aktuellen Zustand unter `clema_<N>` in den lokalen Speicher.
///
/// Fehler brechen die Bearbeitung nicht ab; sie landen im Log und in der
/// Statuszeile.
pub fn autosave(state: &mut AppState) {
    let doc = state.document();
    match persistence::save(state.store.as_mut(), state.block_count, &doc) {
        Ok(()) => log::debug!(
            "Autosave: {} Verbindungen, {} Beschriftungen",
            doc.connections.len(),
            doc.labels.len()
        ),
        Err(e) => {
            log::error!("Autosave fehlgeschlagen: {:#}", e);
            state.ui.status_message = Some(format!("Speichern fehlgeschlagen: {}", e));
        }
    }
}
