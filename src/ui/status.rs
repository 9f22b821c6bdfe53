//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Klemmen: {} | Verbindungen: {} | Beschriftungen: {}/{}",
                state.block_count,
                state.connection_count(),
                state.label_count(),
                state.labels.max()
            ));

            ui.separator();

            let vp = state.view.viewport;
            ui.label(format!(
                "Zoom: {:.2}x | Pan: ({:.0}, {:.0})",
                vp.scale, vp.pan.x, vp.pan.y
            ));

            ui.separator();
            ui.label(format!("Änderungen: {}", state.command_log.document_edits()));

            if let Some(start) = state.interaction.pending_start {
                ui.separator();
                ui.label(format!("Start-Anschluss: {}", start));
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(egui::Color32::YELLOW));
            }
        });
    });
}
