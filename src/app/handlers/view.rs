//! Handler für Zoom und Pan der Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::WheelDirection;
use glam::Vec2;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::viewport::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::viewport::zoom_out(state);
}

/// Setzt Zoom und Verschiebung zurück.
pub fn reset_zoom(state: &mut AppState) {
    use_cases::viewport::reset_zoom(state);
}

/// Mausrad-Zoom um den Cursor.
pub fn zoom_wheel(state: &mut AppState, cursor: Vec2, direction: WheelDirection) {
    use_cases::viewport::zoom_wheel(state, cursor, direction);
}

/// Beginnt einen Pan-Drag.
pub fn begin_pan(state: &mut AppState, pointer: Vec2) {
    use_cases::viewport::begin_pan(state, pointer);
}

/// Setzt den Pan-Drag fort.
pub fn pan_to(state: &mut AppState, pointer: Vec2) {
    use_cases::viewport::pan_to(state, pointer);
}

/// Beendet den Pan-Drag.
pub fn end_pan(state: &mut AppState) {
    use_cases::viewport::end_pan(state);
}
