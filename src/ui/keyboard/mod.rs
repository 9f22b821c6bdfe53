//! Keyboard-Shortcuts der Zeichenfläche.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld den Fokus hat, werden keine Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, has_selection: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (delete_pressed, escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Delete),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if delete_pressed && has_selection {
        events.push(AppIntent::DeleteConnectionRequested);
    }

    if escape_pressed {
        events.push(AppIntent::CancelRequested);
    }

    events
}

#[cfg(test)]
mod tests;
