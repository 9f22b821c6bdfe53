//! Use-Case-Funktionen für Zoom und Pan der Zeichenfläche.

use crate::app::AppState;
use crate::core::{PanGrab, WheelDirection};
use glam::Vec2;

/// Zoomt um einen Button-Schritt hinein (ohne Pivot).
pub fn zoom_in(state: &mut AppState) {
    let limits = state.zoom_limits();
    let step = state.options.viewport_zoom_step;
    state.view.viewport.zoom_in(step, limits);
    log::debug!("Zoom: {:.3}", state.view.viewport.scale);
}

/// Zoomt um einen Button-Schritt heraus (ohne Pivot).
pub fn zoom_out(state: &mut AppState) {
    let limits = state.zoom_limits();
    let step = state.options.viewport_zoom_step;
    state.view.viewport.zoom_out(step, limits);
    log::debug!("Zoom: {:.3}", state.view.viewport.scale);
}

/// Setzt Zoom und Verschiebung auf den Ausgangszustand.
pub fn reset_zoom(state: &mut AppState) {
    state.view.viewport.reset();
    state.view.pan_grab = None;
}

/// Mausrad-Zoom: der Punkt unter dem Cursor bleibt fix.
pub fn zoom_wheel(state: &mut AppState, cursor: Vec2, direction: WheelDirection) {
    let limits = state.zoom_limits();
    let intensity = state.options.viewport_wheel_intensity;
    if !state
        .view
        .viewport
        .zoom_wheel(cursor, direction, intensity, limits)
    {
        log::debug!("Mausrad-Zoom außerhalb der Grenzen ignoriert");
    }
}

/// Beginnt einen Pan-Drag an der Geräteposition `pointer`.
pub fn begin_pan(state: &mut AppState, pointer: Vec2) {
    state.view.pan_grab = Some(PanGrab::begin(pointer, &state.view.viewport));
}

/// Verschiebt die Ansicht, solange ein Pan-Drag läuft.
pub fn pan_to(state: &mut AppState, pointer: Vec2) {
    if let Some(grab) = state.view.pan_grab {
        grab.apply(pointer, &mut state.view.viewport);
    }
}

/// Beendet den Pan-Drag.
pub fn end_pan(state: &mut AppState) {
    state.view.pan_grab = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BlockCount;
    use approx::assert_relative_eq;

    fn state() -> AppState {
        AppState::new(BlockCount::new(2).expect("gültige Anzahl"))
    }

    #[test]
    fn zoom_in_is_clamped_to_maximum() {
        let mut state = state();

        for _ in 0..20 {
            zoom_in(&mut state);
        }

        assert_relative_eq!(state.view.viewport.scale, 3.0);
    }

    #[test]
    fn zoom_out_is_clamped_to_minimum() {
        let mut state = state();

        for _ in 0..20 {
            zoom_out(&mut state);
        }

        assert_relative_eq!(state.view.viewport.scale, 0.5);
    }

    #[test]
    fn wheel_zoom_keeps_point_under_cursor() {
        let mut state = state();
        let cursor = Vec2::new(300.0, 200.0);
        let before = state.view.viewport.to_logical(cursor);

        zoom_wheel(&mut state, cursor, WheelDirection::In);

        let after = state.view.viewport.to_logical(cursor);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
        assert!(state.view.viewport.scale > 1.0);
    }

    #[test]
    fn pan_follows_pointer_until_released() {
        let mut state = state();

        begin_pan(&mut state, Vec2::new(10.0, 10.0));
        pan_to(&mut state, Vec2::new(40.0, 30.0));
        end_pan(&mut state);
        pan_to(&mut state, Vec2::new(500.0, 500.0));

        assert_eq!(state.view.viewport.pan, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn reset_restores_identity() {
        let mut state = state();
        zoom_in(&mut state);
        begin_pan(&mut state, Vec2::ZERO);
        pan_to(&mut state, Vec2::new(5.0, 5.0));

        reset_zoom(&mut state);

        assert_relative_eq!(state.view.viewport.scale, 1.0);
        assert_eq!(state.view.viewport.pan, Vec2::ZERO);
        assert!(state.view.pan_grab.is_none());
    }
}
