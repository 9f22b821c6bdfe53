//! Handler für die Pointer-Zustandsmaschine (Drag-Modi, Start-Anschluss).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ConnectionEnd;
use glam::Vec2;
use std::time::Duration;

/// Merkt den Zeitpunkt des letzten Taps.
pub fn record_tap(state: &mut AppState, at: Option<Duration>) {
    use_cases::interaction::record_tap(state, at);
}

/// Merkt die logische Pointer-Position.
pub fn update_pointer(state: &mut AppState, position: Vec2) {
    use_cases::interaction::update_pointer(state, position);
}

/// Setzt den hervorgehobenen Anschluss.
pub fn set_pressed_connector(state: &mut AppState, connector: Option<u32>) {
    use_cases::interaction::set_pressed_connector(state, connector);
}

/// Wählt den Start-Anschluss einer neuen Verbindung.
pub fn begin_arc(state: &mut AppState, start: u32) {
    use_cases::interaction::begin_arc(state, start);
}

/// Verbindet den Start-Anschluss mit `target`.
pub fn complete_arc(state: &mut AppState, target: u32) {
    use_cases::interaction::complete_arc(state, target);
}

/// Verwirft den offenen Start-Anschluss.
pub fn cancel_pending_arc(state: &mut AppState) {
    use_cases::interaction::cancel_pending_arc(state);
}

/// Greift das Krümmungs-Handle.
pub fn begin_control_point_drag(state: &mut AppState, connection: usize) {
    use_cases::interaction::begin_control_point_drag(state, connection);
}

/// Greift ein Ende der Verbindung.
pub fn begin_endpoint_drag(state: &mut AppState, connection: usize, end: ConnectionEnd) {
    use_cases::interaction::begin_endpoint_drag(state, connection, end);
}

/// Greift eine Beschriftung.
pub fn begin_label_drag(state: &mut AppState, label: usize, grab_offset: Vec2) {
    use_cases::interaction::begin_label_drag(state, label, grab_offset);
}

/// Beendet jeden Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::interaction::end_drag(state);
}
