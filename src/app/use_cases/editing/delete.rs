//! Use-Case: selektierte Verbindung löschen.

use crate::app::prompt::UserPrompt;
use crate::app::use_cases::persistence::autosave;
use crate::app::use_cases::prompt::discard_pending;
use crate::app::AppState;

/// Entfernt die selektierte Verbindung und hebt die Selektion auf.
///
/// Ohne Selektion passiert nichts. Offene Nachfragen werden verworfen,
/// weil sich die Indizes der folgenden Verbindungen verschieben.
pub fn delete_selected_connection(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    let Some(index) = state.selection.selected_connection.take() else {
        log::debug!("Löschen ohne Selektion ignoriert");
        return;
    };
    state.interaction.reset();
    discard_pending(state, prompt);
    match state.graph.delete(index) {
        Some(conn) => {
            log::info!("Verbindung {}→{} gelöscht", conn.a, conn.b);
            autosave(state);
        }
        None => log::warn!("Verbindung {} existiert nicht", index),
    }
}
