//! Use-Case: offene Nachfragen nach Änderungen an den Listen verwerfen.
//!
//! Verbindungen und Beschriftungen werden über ihren Index angesprochen.
//! Verschiebt Löschen oder Import die Indizes, darf eine spät eintreffende
//! Antwort kein anderes Element treffen.

use crate::app::prompt::UserPrompt;
use crate::app::AppState;

/// Schließt offene Text- und Farbanfragen und vergisst deren Ziel.
pub fn discard_pending(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    if let Some(target) = state.ui.prompt_target.take() {
        log::debug!("Offene Nachfrage {:?} verworfen", target);
    }
    prompt.cancel_pending();
}
