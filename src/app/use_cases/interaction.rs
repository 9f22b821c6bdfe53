//! Use-Case-Funktionen der Pointer-Zustandsmaschine.
//!
//! Die Entscheidung, welcher Übergang greift, fällt im Intent-Mapping; hier
//! werden nur die Zustände gesetzt.

use crate::app::state::DragMode;
use crate::app::AppState;
use crate::core::ConnectionEnd;
use glam::Vec2;
use std::time::Duration;

use super::editing;

/// Merkt den Zeitpunkt des letzten Taps (`None` nach einem Doppel-Tap).
pub fn record_tap(state: &mut AppState, at: Option<Duration>) {
    state.interaction.last_tap = at;
}

/// Merkt die logische Pointer-Position für Vorschauen.
pub fn update_pointer(state: &mut AppState, position: Vec2) {
    state.interaction.pointer = Some(position);
}

/// Setzt den hervorgehobenen Anschluss (bleibt bis zum nächsten Drücken).
pub fn set_pressed_connector(state: &mut AppState, connector: Option<u32>) {
    state.interaction.pressed_connector = connector;
}

/// Wählt `start` als Start-Anschluss und beginnt die Vorschau.
pub fn begin_arc(state: &mut AppState, start: u32) {
    if !state.connectors.contains(start) {
        log::warn!("Anschluss {} existiert nicht", start);
        return;
    }
    state.interaction.pending_start = Some(start);
    state.interaction.mode = DragMode::DrawingArc { start };
    log::debug!("Start-Anschluss {} gewählt", start);
}

/// Verbindet den Start-Anschluss mit `target`.
///
/// Der Start-Anschluss wird in jedem Fall verworfen, auch wenn die
/// Verbindung abgelehnt wird.
pub fn complete_arc(state: &mut AppState, target: u32) {
    let Some(start) = state.interaction.pending_start.take() else {
        log::debug!("Kein Start-Anschluss für Ziel {}", target);
        return;
    };
    state.interaction.mode = DragMode::Idle;
    editing::create_connection(state, start, target);
}

/// Verwirft einen offenen Start-Anschluss.
pub fn cancel_pending_arc(state: &mut AppState) {
    if let Some(start) = state.interaction.pending_start.take() {
        log::debug!("Start-Anschluss {} verworfen", start);
    }
    state.interaction.mode = DragMode::Idle;
}

/// Beginnt das Ziehen des Krümmungs-Handles.
pub fn begin_control_point_drag(state: &mut AppState, connection: usize) {
    if state.graph.get(connection).is_some() {
        state.interaction.mode = DragMode::DraggingControlPoint { connection };
    }
}

/// Beginnt das Umhängen eines Verbindungsendes.
pub fn begin_endpoint_drag(state: &mut AppState, connection: usize, end: ConnectionEnd) {
    if state.graph.get(connection).is_some() {
        state.interaction.mode = DragMode::DraggingEndpoint { connection, end };
    }
}

/// Beginnt das Verschieben einer Beschriftung.
pub fn begin_label_drag(state: &mut AppState, label: usize, grab_offset: Vec2) {
    if state.labels.get(label).is_some() {
        state.interaction.mode = DragMode::DraggingLabel { label, grab_offset };
    }
}

/// Loslassen: jeder Modus kehrt in den Ruhezustand zurück.
///
/// Ein Start-Anschluss bleibt erhalten, damit Tap-Tap funktioniert.
pub fn end_drag(state: &mut AppState) {
    state.interaction.mode = DragMode::Idle;
}
