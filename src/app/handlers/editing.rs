//! Handler für Verbindungs- und Beschriftungs-Editing.

use crate::app::prompt::UserPrompt;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ConnectionEnd;
use glam::Vec2;

/// Setzt den Kontrollpunkt einer Verbindung.
pub fn move_control_point(state: &mut AppState, connection: usize, position: Vec2) {
    use_cases::editing::move_control_point(state, connection, position);
}

/// Hängt ein Ende einer Verbindung um.
pub fn retarget_endpoint(
    state: &mut AppState,
    connection: usize,
    end: ConnectionEnd,
    connector: u32,
) {
    use_cases::editing::retarget_endpoint(state, connection, end, connector);
}

/// Fragt eine neue Farbe für die Verbindung ab.
pub fn request_connection_color(
    state: &mut AppState,
    prompt: &mut dyn UserPrompt,
    connection: usize,
) {
    use_cases::editing::request_connection_color(state, prompt, connection);
}

/// Setzt die Farbe einer Verbindung.
pub fn set_connection_color(state: &mut AppState, connection: usize, color: &str) {
    use_cases::editing::set_connection_color(state, connection, color);
}

/// Löscht die selektierte Verbindung.
pub fn delete_selected(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    use_cases::editing::delete_selected_connection(state, prompt);
}

/// Fragt den Text einer neuen Beschriftung ab.
pub fn request_new_label(state: &mut AppState, prompt: &mut dyn UserPrompt, position: Vec2) {
    use_cases::editing::request_new_label(state, prompt, position);
}

/// Legt eine Beschriftung an.
pub fn add_label(state: &mut AppState, prompt: &mut dyn UserPrompt, position: Vec2, text: &str) {
    use_cases::editing::add_label(state, prompt, position, text);
}

/// Fragt neuen Text für eine Beschriftung ab.
pub fn request_label_edit(state: &mut AppState, prompt: &mut dyn UserPrompt, label: usize) {
    use_cases::editing::request_label_edit(state, prompt, label);
}

/// Ersetzt den Text einer Beschriftung.
pub fn set_label_text(state: &mut AppState, label: usize, text: &str) {
    use_cases::editing::set_label_text(state, label, text);
}

/// Verschiebt eine Beschriftung.
pub fn move_label(state: &mut AppState, label: usize, position: Vec2) {
    use_cases::editing::move_label(state, label, position);
}

/// Entfernt alle Verbindungen und Beschriftungen.
pub fn clear_all(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    use_cases::editing::clear_all(state, prompt);
}
