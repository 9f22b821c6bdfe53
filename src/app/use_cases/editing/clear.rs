//! Use-Case: Zeichnung vollständig leeren.

use crate::app::prompt::UserPrompt;
use crate::app::use_cases::persistence::autosave;
use crate::app::use_cases::prompt::discard_pending;
use crate::app::AppState;

/// Entfernt alle Verbindungen und Beschriftungen samt Selektion.
pub fn clear_all(state: &mut AppState, prompt: &mut dyn UserPrompt) {
    let connections = state.graph.len();
    let labels = state.labels.len();
    state.graph.clear();
    state.labels.clear();
    state.selection.clear();
    state.interaction.reset();
    discard_pending(state, prompt);
    log::info!(
        "Alles gelöscht ({} Verbindungen, {} Beschriftungen)",
        connections,
        labels
    );
    autosave(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prompt::ScriptedPrompt;
    use crate::app::use_cases::editing::create_connection;
    use crate::app::PromptTarget;
    use crate::core::BlockCount;
    use glam::Vec2;

    #[test]
    fn clear_all_empties_both_stores_and_open_requests() {
        let mut state = AppState::new(BlockCount::new(2).expect("gültige Anzahl"));
        create_connection(&mut state, 1, 4);
        state.labels.add(Vec2::new(10.0, 10.0), "L1").expect("Platz");
        state.ui.prompt_target = Some(PromptTarget::LabelText { label: 0 });
        let mut prompt = ScriptedPrompt::new();

        clear_all(&mut state, &mut prompt);

        assert!(state.graph.is_empty());
        assert!(state.labels.is_empty());
        assert_eq!(state.ui.prompt_target, None);
        assert_eq!(prompt.cancellations(), 1);
    }
}
