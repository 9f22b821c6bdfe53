//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert eine Verbindung.
pub fn select_connection(state: &mut AppState, connection: usize) {
    use_cases::selection::select_connection(state, connection);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
