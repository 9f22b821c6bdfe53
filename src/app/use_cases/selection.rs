//! Use-Case-Funktionen für die Selektion einer Verbindung.

use crate::app::state::DragMode;
use crate::app::AppState;

/// Selektiert die Verbindung `connection` (höchstens eine gleichzeitig).
pub fn select_connection(state: &mut AppState, connection: usize) {
    if state.graph.get(connection).is_none() {
        log::warn!("Verbindung {} existiert nicht", connection);
        return;
    }
    state.selection.selected_connection = Some(connection);
    state.interaction.mode = DragMode::Idle;
    log::debug!("Verbindung {} selektiert", connection);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    if state.selection.selected_connection.take().is_some() {
        log::debug!("Selektion aufgehoben");
    }
}
