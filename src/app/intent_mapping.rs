//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier fällt die Entscheidung der Pointer-Zustandsmaschine: Gerätekoordinaten
//! werden umgerechnet, Hit-Tests ausgewertet und in Commands übersetzt.

use super::state::{DragMode, PromptTarget};
use super::{AppCommand, AppIntent, AppState};
use glam::Vec2;
use std::time::Duration;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { device_pos, at } => {
            map_pointer_pressed(state, device_pos, at)
        }
        AppIntent::PointerMoved { device_pos } => map_pointer_moved(state, device_pos),
        AppIntent::PointerReleased { device_pos } => map_pointer_released(state, device_pos),

        AppIntent::PanStarted { device_pos } => vec![AppCommand::BeginPan {
            pointer: device_pos,
        }],
        AppIntent::PanMoved { device_pos } => vec![AppCommand::PanTo {
            pointer: device_pos,
        }],
        AppIntent::PanEnded => vec![AppCommand::EndPan],
        AppIntent::WheelZoom {
            device_pos,
            direction,
        } => vec![AppCommand::ZoomWheel {
            cursor: device_pos,
            direction,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetZoomRequested => vec![AppCommand::ResetZoom],

        AppIntent::DeleteConnectionRequested => vec![AppCommand::DeleteSelectedConnection],
        AppIntent::CancelRequested => {
            vec![AppCommand::CancelPendingArc, AppCommand::ClearSelection]
        }
        AppIntent::ClearAllRequested => vec![AppCommand::OpenClearConfirm],
        AppIntent::ClearAllConfirmed => vec![AppCommand::ClearAll, AppCommand::CloseClearConfirm],
        AppIntent::ClearAllCancelled => vec![AppCommand::CloseClearConfirm],
        AppIntent::ToggleJsonViewRequested => vec![AppCommand::ToggleJsonView],

        AppIntent::LabelTextEntered { position, text } => {
            vec![AppCommand::AddLabel { position, text }]
        }
        // Späte Antworten gelten nur, solange ihr Ziel noch vorgemerkt ist
        AppIntent::LabelTextEdited { index, text } => {
            if state.ui.prompt_target == Some(PromptTarget::LabelText { label: index }) {
                vec![AppCommand::SetLabelText { label: index, text }]
            } else {
                log::debug!("Veraltete Textantwort für Beschriftung {} verworfen", index);
                Vec::new()
            }
        }
        AppIntent::ConnectionColorChosen { index, color } => {
            if state.ui.prompt_target == Some(PromptTarget::ConnectionColor { connection: index }) {
                vec![AppCommand::SetConnectionColor {
                    connection: index,
                    color,
                }]
            } else {
                log::debug!("Veraltete Farbantwort für Verbindung {} verworfen", index);
                Vec::new()
            }
        }

        AppIntent::ImportJsonRequested => vec![AppCommand::RequestImportDialog],
        AppIntent::ImportJsonFileSelected { path } => vec![AppCommand::ImportJsonFile { path }],
        AppIntent::ExportJsonRequested => vec![AppCommand::RequestExportJsonDialog],
        AppIntent::ExportJsonFileSelected { path } => vec![AppCommand::ExportJsonFile { path }],
        AppIntent::ExportImageRequested { format } => {
            vec![AppCommand::RequestExportImageDialog { format }]
        }
        AppIntent::ExportImageFileSelected { path, format } => {
            vec![AppCommand::ExportImageFile { path, format }]
        }
    }
}

/// Pointer-Down: Entscheidung in fester Prioritätsreihenfolge.
fn map_pointer_pressed(state: &AppState, device_pos: Vec2, at: Duration) -> Vec<AppCommand> {
    let pos = state.view.viewport.to_logical(device_pos);
    let hits = state.hit_tester();
    let selected = state.selection.selected_connection;

    // 1) Doppel-Tap: Farbe der Verbindung oder Text der Beschriftung bearbeiten
    let threshold = state.options.double_tap_threshold();
    let is_double_tap = state
        .interaction
        .last_tap
        .and_then(|last| at.checked_sub(last))
        .is_some_and(|elapsed| elapsed < threshold);
    if is_double_tap {
        let mut commands = vec![AppCommand::RecordTap { at: None }];
        if let Some(connection) = hits.arc(pos) {
            commands.push(AppCommand::RequestConnectionColor { connection });
        } else if let Some(label) = hits.label(pos) {
            commands.push(AppCommand::RequestLabelEdit { label });
        }
        return commands;
    }

    let mut commands = vec![AppCommand::RecordTap { at: Some(at) }];

    let connector = hits.connector(pos).map(|c| c.id);
    let control_point = hits.control_point(pos, selected);
    let label = hits.label(pos);
    // Anschlüsse haben Vorrang vor den Bogen-Abtastpunkten, die auf ihnen enden
    let arc = if connector.is_none() {
        hits.arc(pos)
    } else {
        None
    };

    // 2) Bogen getroffen → selektieren
    if let Some(connection) = arc {
        commands.push(AppCommand::SelectConnection { connection });
        return commands;
    }

    commands.push(AppCommand::SetPressedConnector { connector });

    // 3) Selektion aktiv, aber nichts getroffen → Selektion aufheben
    if selected.is_some() && connector.is_none() && control_point.is_none() && label.is_none() {
        commands.push(AppCommand::ClearSelection);
        return commands;
    }

    // 4) Krümmungs-Handle
    if let Some(connection) = control_point {
        commands.push(AppCommand::BeginControlPointDrag { connection });
        return commands;
    }

    // 5) Endpunkt-Handle der selektierten Verbindung
    if let (Some(connection), Some(end)) = (selected, hits.endpoint(pos, selected)) {
        commands.push(AppCommand::BeginEndpointDrag { connection, end });
        return commands;
    }

    let pending = state.interaction.pending_start;
    match (connector, pending) {
        // 6) Erster Anschluss
        (Some(start), None) => {
            commands.push(AppCommand::BeginArc { start });
            return commands;
        }
        // 7) Zweiter, anderer Anschluss
        (Some(target), Some(start)) if target != start => {
            commands.push(AppCommand::CompleteArc { target });
            return commands;
        }
        _ => {}
    }

    // 8) Beschriftung greifen
    if let Some(index) = label {
        let grab_offset = state
            .labels
            .get(index)
            .map_or(Vec2::ZERO, |l| pos - l.position());
        commands.push(AppCommand::BeginLabelDrag {
            label: index,
            grab_offset,
        });
        return commands;
    }

    // 9) Leere Fläche → neue Beschriftung
    if connector.is_none() {
        commands.push(AppCommand::RequestNewLabel { position: pos });
        return commands;
    }

    // 10) Start-Anschluss erneut angetippt
    commands.push(AppCommand::ClearSelection);
    commands
}

/// Pointer-Move: reine Verzweigung nach Drag-Modus.
fn map_pointer_moved(state: &AppState, device_pos: Vec2) -> Vec<AppCommand> {
    let pos = state.view.viewport.to_logical(device_pos);
    let mut commands = vec![AppCommand::UpdatePointer { position: pos }];
    match state.interaction.mode {
        DragMode::DraggingControlPoint { connection } => {
            commands.push(AppCommand::MoveControlPoint {
                connection,
                position: pos,
            });
        }
        DragMode::DraggingLabel { label, grab_offset } => {
            commands.push(AppCommand::MoveLabel {
                label,
                position: pos - grab_offset,
            });
        }
        DragMode::Idle | DragMode::DrawingArc { .. } | DragMode::DraggingEndpoint { .. } => {}
    }
    commands
}

/// Pointer-Up: Endpunkt-Umhängen committen, danach immer Ruhezustand.
fn map_pointer_released(state: &AppState, device_pos: Vec2) -> Vec<AppCommand> {
    let mut commands = Vec::new();
    if let DragMode::DraggingEndpoint { connection, end } = state.interaction.mode {
        let pos = state.view.viewport.to_logical(device_pos);
        if let Some(target) = state.hit_tester().connector(pos) {
            commands.push(AppCommand::RetargetEndpoint {
                connection,
                end,
                connector: target.id,
            });
        }
    }
    commands.push(AppCommand::EndDrag);
    commands
}
