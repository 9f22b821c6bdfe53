//! Startbildschirm: Abfrage der Klemmenanzahl.

use crate::core::{BlockCount, BlockCountError};

/// Eingabezustand des Startbildschirms.
#[derive(Debug, Clone, Default)]
pub struct StartupScreen {
    input: String,
    error: Option<String>,
}

impl StartupScreen {
    /// Erstellt einen leeren Startbildschirm.
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt die Eingabe; liefert die Anzahl oder merkt den Fehler.
    pub fn submit(&mut self) -> Option<BlockCount> {
        match BlockCount::parse(&self.input) {
            Ok(count) => {
                self.error = None;
                Some(count)
            }
            Err(e) => {
                log::info!("Klemmenanzahl abgelehnt: {}", e);
                self.error = Some(error_text(&e));
                None
            }
        }
    }

    /// Zeigt den Startbildschirm; liefert die gültige Anzahl bei Bestätigung.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<BlockCount> {
        let mut submitted = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.heading("Clema-Editor");
                ui.label(format!(
                    "Anzahl der Klemmen ({}–{}):",
                    BlockCount::MIN,
                    BlockCount::MAX
                ));
                let edit = ui.add(egui::TextEdit::singleline(&mut self.input).desired_width(80.0));
                let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Start").clicked() || enter {
                    submitted = true;
                }
                if let Some(ref error) = self.error {
                    ui.colored_label(egui::Color32::RED, error);
                }
            });
        });

        if submitted {
            self.submit()
        } else {
            None
        }
    }

    #[cfg(test)]
    fn with_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            error: None,
        }
    }
}

fn error_text(error: &BlockCountError) -> String {
    match error {
        BlockCountError::NotANumber(_) => "Bitte eine Zahl eingeben.".to_string(),
        BlockCountError::OutOfRange { min, max, .. } => {
            format!("Bitte eine Zahl zwischen {} und {} eingeben.", min, max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_is_accepted() {
        let mut screen = StartupScreen::with_input(" 12 ");

        assert_eq!(screen.submit().map(|c| c.get()), Some(12));
    }

    #[test]
    fn out_of_range_input_shows_error() {
        let mut screen = StartupScreen::with_input("25");

        assert_eq!(screen.submit(), None);
        assert_eq!(
            screen.error.as_deref(),
            Some("Bitte eine Zahl zwischen 1 und 24 eingeben.")
        );
    }

    #[test]
    fn non_numeric_input_shows_error() {
        let mut screen = StartupScreen::with_input("zwei");

        assert_eq!(screen.submit(), None);
        assert!(screen.error.is_some());
    }
}
