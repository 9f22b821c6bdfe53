//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::DragMode;
use crate::app::AppState;
use crate::core::{default_control_point, Viewport};
use crate::shared::{Preview, RenderScene};

/// Deckender Hintergrund des Bild-Exports
const EXPORT_BACKGROUND: &str = "#FFFFFF";

/// Baut die Szene der Live-Zeichenfläche (mit Handles und Vorschau).
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        layout: *state.connectors.layout(),
        connectors: state.connectors.iter().copied().collect(),
        connections: state.graph.as_slice().to_vec(),
        labels: state.labels.as_slice().to_vec(),
        viewport: state.view.viewport,
        selected: state.selection.selected_connection,
        pressed_connector: state.interaction.pressed_connector,
        preview: preview(state),
        background: None,
        options: state.options.clone(),
    }
}

/// Baut die Szene für den Bild-Export: weißer Hintergrund, Identitäts-Viewport,
/// keine Handles, keine Hervorhebung, keine Vorschau.
pub fn build_export(state: &AppState) -> RenderScene {
    RenderScene {
        viewport: Viewport::new(),
        selected: None,
        pressed_connector: None,
        preview: None,
        background: Some(EXPORT_BACKGROUND.to_string()),
        ..build(state)
    }
}

fn preview(state: &AppState) -> Option<Preview> {
    let pointer = state.interaction.pointer?;
    match state.interaction.mode {
        DragMode::DrawingArc { start } => {
            let from = state.connectors.position(start)?;
            let top_y = state.connectors.layout().top_y();
            let cp = default_control_point(from, pointer, top_y, state.options.curvature);
            Some(Preview::Curve {
                from,
                cp,
                to: pointer,
            })
        }
        DragMode::DraggingEndpoint { connection, end } => {
            let fixed = state.graph.get(connection)?.endpoint(end.opposite());
            let from = state.connectors.position(fixed)?;
            Some(Preview::Line { from, to: pointer })
        }
        DragMode::Idle | DragMode::DraggingControlPoint { .. } | DragMode::DraggingLabel { .. } => {
            None
        }
    }
}
