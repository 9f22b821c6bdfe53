//! Handler für Dialog- und Panel-State.

use crate::app::AppState;

/// Öffnet die "Alles löschen"-Bestätigung.
pub fn open_clear_confirm(state: &mut AppState) {
    state.ui.show_clear_confirm = true;
}

/// Schließt die "Alles löschen"-Bestätigung.
pub fn close_clear_confirm(state: &mut AppState) {
    state.ui.show_clear_confirm = false;
}

/// Blendet die JSON-Ansicht ein oder aus.
pub fn toggle_json_view(state: &mut AppState) {
    state.ui.show_json_view = !state.ui.show_json_view;
}
