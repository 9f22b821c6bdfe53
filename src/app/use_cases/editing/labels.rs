//! Use-Case: Beschriftungen anlegen, bearbeiten und verschieben.

use crate::app::prompt::{TextRequest, UserPrompt};
use crate::app::use_cases::persistence::autosave;
use crate::app::{AppState, PromptTarget};
use crate::core::sanitize_text;
use glam::Vec2;

/// Fragt den Text einer neuen Beschriftung an `position` ab.
///
/// Ist die Obergrenze erreicht, wird der Benutzer informiert. Ein
/// Abbruch hebt die Selektion auf.
pub fn request_new_label(state: &mut AppState, prompt: &mut dyn UserPrompt, position: Vec2) {
    if state.labels.is_full() {
        notify_limit(state, prompt);
        return;
    }
    match prompt.request_text(TextRequest::NewLabel { position }) {
        Some(text) => add_label(state, prompt, position, &text),
        None => state.selection.clear(),
    }
}

/// Legt eine Beschriftung an; leere Texte (nach Bereinigung) gelten als Abbruch.
pub fn add_label(state: &mut AppState, prompt: &mut dyn UserPrompt, position: Vec2, text: &str) {
    let text = sanitize_text(text);
    if text.is_empty() {
        log::debug!("Leere Beschriftung verworfen");
        state.selection.clear();
        return;
    }
    match state.labels.add(position, &text) {
        Ok(index) => {
            log::info!("Beschriftung {} '{}' angelegt", index, text);
            autosave(state);
        }
        Err(_) => notify_limit(state, prompt),
    }
}

/// Fragt neuen Text für die Beschriftung `label` ab.
pub fn request_label_edit(state: &mut AppState, prompt: &mut dyn UserPrompt, label: usize) {
    let Some(current) = state.labels.get(label).map(|l| l.text.clone()) else {
        log::warn!("Beschriftung {} existiert nicht", label);
        return;
    };
    match prompt.request_text(TextRequest::EditLabel {
        index: label,
        current,
    }) {
        Some(text) => set_label_text(state, label, &text),
        None => state.ui.prompt_target = Some(PromptTarget::LabelText { label }),
    }
}

/// Ersetzt den Text; leere Texte (nach Bereinigung) gelten als Abbruch.
pub fn set_label_text(state: &mut AppState, label: usize, text: &str) {
    state.ui.prompt_target = None;
    let text = sanitize_text(text);
    if text.is_empty() {
        log::debug!("Leerer Text für Beschriftung {} verworfen", label);
        return;
    }
    if state.labels.set_text(label, &text) {
        log::info!("Beschriftung {} heißt jetzt '{}'", label, text);
        autosave(state);
    } else {
        log::warn!("Beschriftung {} existiert nicht", label);
    }
}

/// Verschiebt den Anker und speichert sofort (fortlaufend beim Ziehen).
pub fn move_label(state: &mut AppState, label: usize, position: Vec2) {
    if state.labels.move_to(label, position) {
        autosave(state);
    }
}

fn notify_limit(state: &AppState, prompt: &mut dyn UserPrompt) {
    let message = format!("Maximal {} Beschriftungen erlaubt", state.labels.max());
    log::info!("{}", message);
    prompt.notify(&message);
}
