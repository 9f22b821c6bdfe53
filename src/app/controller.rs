//! Application Controller für zentrale Event-Verarbeitung.

use super::prompt::{NoPrompt, UserPrompt};
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
pub struct AppController {
    prompt: Box<dyn UserPrompt>,
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

impl AppController {
    /// Erstellt einen Controller ohne Benutzer-Nachfragen.
    pub fn new() -> Self {
        Self::with_prompt(Box::new(NoPrompt))
    }

    /// Erstellt einen Controller mit der angegebenen Nachfrage-Fähigkeit.
    pub fn with_prompt(prompt: Box<dyn UserPrompt>) -> Self {
        Self { prompt }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;
        let prompt = self.prompt.as_mut();

        match command {
            // === Interaktion ===
            AppCommand::RecordTap { at } => handlers::interaction::record_tap(state, at),
            AppCommand::UpdatePointer { position } => {
                handlers::interaction::update_pointer(state, position)
            }
            AppCommand::SetPressedConnector { connector } => {
                handlers::interaction::set_pressed_connector(state, connector)
            }
            AppCommand::BeginArc { start } => handlers::interaction::begin_arc(state, start),
            AppCommand::CompleteArc { target } => {
                handlers::interaction::complete_arc(state, target)
            }
            AppCommand::CancelPendingArc => handlers::interaction::cancel_pending_arc(state),
            AppCommand::BeginControlPointDrag { connection } => {
                handlers::interaction::begin_control_point_drag(state, connection)
            }
            AppCommand::BeginEndpointDrag { connection, end } => {
                handlers::interaction::begin_endpoint_drag(state, connection, end)
            }
            AppCommand::BeginLabelDrag { label, grab_offset } => {
                handlers::interaction::begin_label_drag(state, label, grab_offset)
            }
            AppCommand::EndDrag => handlers::interaction::end_drag(state),

            // === Selektion ===
            AppCommand::SelectConnection { connection } => {
                handlers::selection::select_connection(state, connection)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Editing ===
            AppCommand::MoveControlPoint {
                connection,
                position,
            } => handlers::editing::move_control_point(state, connection, position),
            AppCommand::RetargetEndpoint {
                connection,
                end,
                connector,
            } => handlers::editing::retarget_endpoint(state, connection, end, connector),
            AppCommand::RequestConnectionColor { connection } => {
                handlers::editing::request_connection_color(state, prompt, connection)
            }
            AppCommand::SetConnectionColor { connection, color } => {
                handlers::editing::set_connection_color(state, connection, &color)
            }
            AppCommand::DeleteSelectedConnection => {
                handlers::editing::delete_selected(state, prompt)
            }
            AppCommand::RequestNewLabel { position } => {
                handlers::editing::request_new_label(state, prompt, position)
            }
            AppCommand::AddLabel { position, text } => {
                handlers::editing::add_label(state, prompt, position, &text)
            }
            AppCommand::RequestLabelEdit { label } => {
                handlers::editing::request_label_edit(state, prompt, label)
            }
            AppCommand::SetLabelText { label, text } => {
                handlers::editing::set_label_text(state, label, &text)
            }
            AppCommand::MoveLabel { label, position } => {
                handlers::editing::move_label(state, label, position)
            }
            AppCommand::ClearAll => handlers::editing::clear_all(state, prompt),

            // === Viewport ===
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetZoom => handlers::view::reset_zoom(state),
            AppCommand::ZoomWheel { cursor, direction } => {
                handlers::view::zoom_wheel(state, cursor, direction)
            }
            AppCommand::BeginPan { pointer } => handlers::view::begin_pan(state, pointer),
            AppCommand::PanTo { pointer } => handlers::view::pan_to(state, pointer),
            AppCommand::EndPan => handlers::view::end_pan(state),

            // === Dialoge & Panels ===
            AppCommand::OpenClearConfirm => handlers::dialog::open_clear_confirm(state),
            AppCommand::CloseClearConfirm => handlers::dialog::close_clear_confirm(state),
            AppCommand::ToggleJsonView => handlers::dialog::toggle_json_view(state),

            // === Datei-I/O ===
            AppCommand::RequestImportDialog => handlers::file_io::request_import(state),
            AppCommand::ImportJsonFile { path } => {
                handlers::file_io::import_json(state, prompt, &path)?
            }
            AppCommand::RequestExportJsonDialog => handlers::file_io::request_export_json(state),
            AppCommand::ExportJsonFile { path } => handlers::file_io::export_json(state, &path)?,
            AppCommand::RequestExportImageDialog { format } => {
                handlers::file_io::request_export_image(state, format)
            }
            AppCommand::ExportImageFile { path, format } => {
                handlers::file_io::export_image(state, &path, format)?
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
