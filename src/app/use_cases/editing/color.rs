//! Use-Case: Linienfarbe einer Verbindung ändern.

use crate::app::prompt::{ColorRequest, UserPrompt};
use crate::app::use_cases::persistence::autosave;
use crate::app::{AppState, PromptTarget};
use crate::render::Rgba;

/// Fragt eine neue Farbe ab und übernimmt sie bei Antwort.
///
/// Bleibt die Antwort aus, wird die Verbindung als Ziel vorgemerkt.
pub fn request_connection_color(
    state: &mut AppState,
    prompt: &mut dyn UserPrompt,
    connection: usize,
) {
    let Some(current) = state.graph.get(connection).map(|c| c.color.clone()) else {
        log::warn!("Verbindung {} existiert nicht", connection);
        return;
    };
    let answer = prompt.request_color(ColorRequest {
        index: connection,
        current,
    });
    match answer {
        Some(color) => set_connection_color(state, connection, &color),
        None => state.ui.prompt_target = Some(PromptTarget::ConnectionColor { connection }),
    }
}

/// Setzt die Farbe; nur `#RRGGBB` wird übernommen.
pub fn set_connection_color(state: &mut AppState, connection: usize, color: &str) {
    state.ui.prompt_target = None;
    let color = color.trim();
    if Rgba::from_hex(color).is_none() {
        log::warn!("Ungültige Farbe '{}' ignoriert", color);
        return;
    }
    match state.graph.set_color(connection, color) {
        Ok(()) => {
            log::info!("Verbindung {} hat Farbe {}", connection, color);
            autosave(state);
        }
        Err(e) => log::warn!("Farbe nicht gesetzt: {}", e),
    }
}
