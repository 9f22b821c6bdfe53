//! Toolbar mit Zoom-, Bearbeitungs- und Datei-Aktionen.

use crate::app::{AppIntent, AppState};
use crate::render::ImageFormat;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// Mit `enabled == false` (offene Nachfrage) sind alle Schaltflächen gesperrt.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState, enabled: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                // ── Ansicht ──
                if ui.button("🔍+").on_hover_text("Hineinzoomen").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                }
                if ui.button("🔍−").on_hover_text("Herauszoomen").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                }
                if ui.button("1:1").on_hover_text("Zoom zurücksetzen").clicked() {
                    events.push(AppIntent::ResetZoomRequested);
                }

                ui.separator();

                // ── Bearbeiten ──
                let has_selection = state.selected_connection().is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Verbindung löschen"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteConnectionRequested);
                }
                if ui.button("Alles löschen").clicked() {
                    events.push(AppIntent::ClearAllRequested);
                }

                ui.separator();

                // ── Daten ──
                let json_label = if state.ui.show_json_view {
                    "JSON ausblenden"
                } else {
                    "JSON anzeigen"
                };
                if ui.button(json_label).clicked() {
                    events.push(AppIntent::ToggleJsonViewRequested);
                }
                if ui.button("JSON importieren").clicked() {
                    events.push(AppIntent::ImportJsonRequested);
                }
                if ui.button("JSON exportieren").clicked() {
                    events.push(AppIntent::ExportJsonRequested);
                }

                ui.separator();

                for format in [ImageFormat::Png, ImageFormat::Jpeg] {
                    if ui.button(format!("{} exportieren", format.label())).clicked() {
                        events.push(AppIntent::ExportImageRequested { format });
                    }
                }
            });
        });
    });

    events
}
