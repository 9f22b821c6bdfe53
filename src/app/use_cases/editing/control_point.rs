//! Use-Case: Krümmungs-Handle frei verschieben.

use crate::app::use_cases::persistence::autosave;
use crate::app::AppState;
use glam::Vec2;

/// Setzt den Kontrollpunkt und speichert sofort (fortlaufend beim Ziehen).
pub fn move_control_point(state: &mut AppState, connection: usize, position: Vec2) {
    match state.graph.set_control_point(connection, position) {
        Ok(()) => autosave(state),
        Err(e) => log::warn!("Kontrollpunkt nicht gesetzt: {}", e),
    }
}
