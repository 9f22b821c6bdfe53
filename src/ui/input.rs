//! Zeichenflächen-Input: egui-Pointer und Mausrad → AppIntent.
//!
//! Gerätekoordinaten sind relativ zur linken oberen Ecke der Zeichenfläche.
//! Primärtaste bedient die Zustandsmaschine, die mittlere Taste (oder
//! Primärtaste mit gehaltener Leertaste) verschiebt die Ansicht.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::WheelDirection;
use glam::Vec2;
use std::time::Duration;

/// Verwaltet den Input-Zustand der Zeichenfläche zwischen Frames.
#[derive(Debug, Default)]
pub struct InputState {
    last_pointer: Option<Vec2>,
    primary_down: bool,
    panning: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Zeichenflächen-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        has_selection: bool,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui, has_selection);
        let origin = response.rect.min;
        let to_device = |p: egui::Pos2| Vec2::new(p.x - origin.x, p.y - origin.y);

        let (pointer, time, pressed, released, middle_pressed, middle_released, space, scroll) =
            ui.input(|i| {
                (
                    i.pointer.latest_pos(),
                    i.time,
                    i.pointer.primary_pressed(),
                    i.pointer.primary_released(),
                    i.pointer.button_pressed(egui::PointerButton::Middle),
                    i.pointer.button_released(egui::PointerButton::Middle),
                    i.key_down(egui::Key::Space),
                    i.raw_scroll_delta.y,
                )
            });
        let device = pointer.map(to_device);
        let hovered = response.hovered();

        // Pan (mittlere Taste oder Leertaste + Primärtaste)
        if let Some(pos) = device {
            if hovered && !self.panning && (middle_pressed || (pressed && space)) {
                self.panning = true;
                events.push(AppIntent::PanStarted { device_pos: pos });
            } else if self.panning && self.last_pointer != Some(pos) {
                events.push(AppIntent::PanMoved { device_pos: pos });
            }
        }
        if self.panning && (middle_released || (released && !self.primary_down)) {
            self.panning = false;
            events.push(AppIntent::PanEnded);
            self.last_pointer = device;
            return events;
        }

        if !self.panning {
            if let Some(pos) = device {
                if pressed && hovered {
                    self.primary_down = true;
                    events.push(AppIntent::PointerPressed {
                        device_pos: pos,
                        at: Duration::from_secs_f64(time.max(0.0)),
                    });
                } else if self.last_pointer != Some(pos) {
                    events.push(AppIntent::PointerMoved { device_pos: pos });
                }
                if released && self.primary_down {
                    self.primary_down = false;
                    events.push(AppIntent::PointerReleased { device_pos: pos });
                }
            }

            if hovered {
                if let (Some(pos), Some(direction)) =
                    (device, WheelDirection::from_scroll_delta(scroll))
                {
                    events.push(AppIntent::WheelZoom {
                        device_pos: pos,
                        direction,
                    });
                }
            }
        }

        self.last_pointer = device;
        events
    }
}
