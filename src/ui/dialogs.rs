//! Datei-Dialoge, "Alles löschen"-Bestätigung und JSON-Ansicht.

use crate::app::{AppIntent, AppState, UiState};
use crate::persistence;

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_import_dialog {
        ui_state.show_import_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Clema JSON", &["json"])
            .pick_file()
        {
            events.push(AppIntent::ImportJsonFileSelected { path });
        }
    }

    if ui_state.show_export_json_dialog {
        ui_state.show_export_json_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Clema JSON", &["json"])
            .set_file_name("clemas.json")
            .save_file()
        {
            events.push(AppIntent::ExportJsonFileSelected { path });
        }
    }

    if let Some(format) = ui_state.export_image_dialog.take() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(format.label(), &[format.extension()])
            .set_file_name(format.default_file_name())
            .save_file()
        {
            events.push(AppIntent::ExportImageFileSelected { path, format });
        }
    }

    events
}

/// Zeigt die Sicherheitsabfrage vor "Alles löschen".
pub fn show_clear_confirm(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !ui_state.show_clear_confirm {
        return events;
    }

    egui::Window::new("Alles löschen?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Alle Verbindungen und Beschriftungen werden entfernt.");
            ui.horizontal(|ui| {
                if ui.button("Löschen").clicked() {
                    events.push(AppIntent::ClearAllConfirmed);
                }
                if ui.button("Abbrechen").clicked() {
                    events.push(AppIntent::ClearAllCancelled);
                }
            });
        });

    events
}

/// Seitenpanel mit dem eingerückten JSON-Zustand.
pub fn show_json_view(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.ui.show_json_view {
        return events;
    }

    let json = match persistence::to_pretty_json(&state.document()) {
        Ok(json) => json,
        Err(e) => format!("JSON nicht erzeugbar: {}", e),
    };

    egui::SidePanel::right("json_view")
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("JSON");
                if ui.button("Herunterladen").clicked() {
                    events.push(AppIntent::ExportJsonRequested);
                }
            });
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add(
                    egui::Label::new(egui::RichText::new(json).monospace())
                        .wrap_mode(egui::TextWrapMode::Extend),
                );
            });
        });

    events
}
