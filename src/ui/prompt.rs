//! Benutzer-Nachfragen über egui-Fenster.
//!
//! egui kann nicht blockierend warten: Anfragen werden vorgemerkt und als
//! Fenster gezeigt, die Antwort kommt im nächsten Frame als Intent zurück.

use crate::app::{AppIntent, ColorRequest, TextRequest, UserPrompt};
use std::cell::RefCell;
use std::rc::Rc;

/// Offene Texteingabe samt aktuellem Eingabepuffer
#[derive(Debug, Clone)]
struct PendingText {
    request: TextRequest,
    buffer: String,
}

/// Offene Farbwahl samt aktueller Auswahl
#[derive(Debug, Clone)]
struct PendingColor {
    index: usize,
    color: egui::Color32,
}

#[derive(Debug, Default)]
struct PromptQueue {
    text: Option<PendingText>,
    color: Option<PendingColor>,
    notices: Vec<String>,
}

/// Nachfrage-Fähigkeit des Desktop-Hosts.
///
/// Klone teilen sich dieselbe Warteschlange: ein Klon liegt im Controller,
/// der andere zeichnet die Fenster.
#[derive(Debug, Clone, Default)]
pub struct DialogPrompt {
    queue: Rc<RefCell<PromptQueue>>,
}

impl DialogPrompt {
    /// Erstellt eine leere Warteschlange.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob gerade ein Fenster offen ist (Zeichenfläche pausiert).
    pub fn is_open(&self) -> bool {
        let queue = self.queue.borrow();
        queue.text.is_some() || queue.color.is_some() || !queue.notices.is_empty()
    }

    /// Zeigt offene Fenster und liefert bestätigte Antworten als Intents.
    pub fn show(&self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let mut queue = self.queue.borrow_mut();

        if let Some(pending) = queue.text.as_mut() {
            let title = match pending.request {
                TextRequest::NewLabel { .. } => "Neue Beschriftung",
                TextRequest::EditLabel { .. } => "Beschriftung bearbeiten",
            };
            let mut close = false;
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    let edit = ui.text_edit_singleline(&mut pending.buffer);
                    edit.request_focus();
                    let enter = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() || enter {
                            events.push(text_answer(&pending.request, &pending.buffer));
                            close = true;
                        }
                        if ui.button("Abbrechen").clicked() {
                            close = true;
                        }
                    });
                });
            if close {
                queue.text = None;
            }
        }

        if let Some(pending) = queue.color.as_mut() {
            let mut close = false;
            egui::Window::new("Verbindungsfarbe")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    egui::color_picker::color_picker_color32(
                        ui,
                        &mut pending.color,
                        egui::color_picker::Alpha::Opaque,
                    );
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() {
                            let [r, g, b, _] = pending.color.to_array();
                            events.push(AppIntent::ConnectionColorChosen {
                                index: pending.index,
                                color: format!("#{:02X}{:02X}{:02X}", r, g, b),
                            });
                            close = true;
                        }
                        if ui.button("Abbrechen").clicked() {
                            close = true;
                        }
                    });
                });
            if close {
                queue.color = None;
            }
        }

        if let Some(message) = queue.notices.first().cloned() {
            let mut close = false;
            egui::Window::new("Hinweis")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            if close {
                queue.notices.remove(0);
            }
        }

        events
    }
}

fn text_answer(request: &TextRequest, text: &str) -> AppIntent {
    match request {
        TextRequest::NewLabel { position } => AppIntent::LabelTextEntered {
            position: *position,
            text: text.to_string(),
        },
        TextRequest::EditLabel { index, .. } => AppIntent::LabelTextEdited {
            index: *index,
            text: text.to_string(),
        },
    }
}

impl UserPrompt for DialogPrompt {
    fn request_text(&mut self, request: TextRequest) -> Option<String> {
        let buffer = match &request {
            TextRequest::NewLabel { .. } => String::new(),
            TextRequest::EditLabel { current, .. } => current.clone(),
        };
        self.queue.borrow_mut().text = Some(PendingText { request, buffer });
        None
    }

    fn request_color(&mut self, request: ColorRequest) -> Option<String> {
        let color = crate::render::Rgba::from_hex(&request.current)
            .map(|c| egui::Color32::from_rgb(c.r, c.g, c.b))
            .unwrap_or(egui::Color32::BLACK);
        self.queue.borrow_mut().color = Some(PendingColor {
            index: request.index,
            color,
        });
        None
    }

    fn notify(&mut self, message: &str) {
        self.queue.borrow_mut().notices.push(message.to_string());
    }

    fn cancel_pending(&mut self) {
        let mut queue = self.queue.borrow_mut();
        queue.text = None;
        queue.color = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn requests_are_deferred_and_queued() {
        let mut prompt = DialogPrompt::new();
        let other = prompt.clone();

        let answer = prompt.request_text(TextRequest::NewLabel {
            position: Vec2::ZERO,
        });

        assert_eq!(answer, None);
        assert!(other.is_open());
    }

    #[test]
    fn new_label_answer_maps_to_entered_intent() {
        let intent = text_answer(
            &TextRequest::NewLabel {
                position: Vec2::new(1.0, 2.0),
            },
            "L1",
        );

        assert_eq!(
            intent,
            AppIntent::LabelTextEntered {
                position: Vec2::new(1.0, 2.0),
                text: "L1".to_string()
            }
        );
    }

    #[test]
    fn cancel_closes_requests_but_keeps_notices() {
        let mut prompt = DialogPrompt::new();
        prompt.request_color(ColorRequest {
            index: 0,
            current: "#0074D9".to_string(),
        });
        prompt.notify("Import erfolgreich");

        prompt.cancel_pending();

        let queue = prompt.queue.borrow();
        assert!(queue.color.is_none());
        assert!(queue.text.is_none());
        assert_eq!(queue.notices.len(), 1);
    }
}
