//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::prompt::UserPrompt;
use crate::app::AppState;
use crate::persistence::{self, document};
use crate::render::{self, ImageFormat};
use anyhow::Context;
use std::path::Path;

use super::persistence::autosave;
use super::prompt::discard_pending;

/// Öffnet den Import-Dialog über UI-State.
pub fn request_import(state: &mut AppState) {
    state.ui.show_import_dialog = true;
}

/// Öffnet den JSON-Export-Dialog über UI-State.
pub fn request_export_json(state: &mut AppState) {
    state.ui.show_export_json_dialog = true;
}

/// Öffnet den Bild-Export-Dialog für `format`.
pub fn request_export_image(state: &mut AppState, format: ImageFormat) {
    state.ui.export_image_dialog = Some(format);
}

/// Liest eine JSON-Datei und importiert sie.
pub fn import_json_file(
    state: &mut AppState,
    prompt: &mut dyn UserPrompt,
    path: &Path,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
    import_json_text(state, prompt, &text)
}

/// Importiert einen JSON-Text `{connections?, labels?}`.
///
/// Vorhandene Felder ersetzen den jeweiligen Bestand vollständig (nach
/// Normalisierung), fehlende lassen ihn unverändert. Ungültiges JSON wird
/// gemeldet, ohne den Zustand anzutasten.
pub fn import_json_text(
    state: &mut AppState,
    prompt: &mut dyn UserPrompt,
    text: &str,
) -> anyhow::Result<()> {
    let import = match persistence::parse_import(text) {
        Ok(import) => import,
        Err(e) => {
            log::warn!("Import fehlgeschlagen: {:#}", e);
            prompt.notify("Ungültige JSON-Datei");
            return Err(e);
        }
    };

    discard_pending(state, prompt);
    if let Some(connections) = import.connections {
        let connections = document::normalize_connections(connections, &state.connectors);
        state.graph = crate::core::ConnectionGraph::from_connections(connections);
    }
    if let Some(labels) = import.labels {
        let max = state.options.max_labels;
        state.labels =
            crate::core::LabelStore::from_labels(document::normalize_labels(labels, max), max);
    }
    state.selection.clear();
    state.interaction.reset();

    log::info!(
        "Import: {} Verbindungen, {} Beschriftungen",
        state.graph.len(),
        state.labels.len()
    );
    autosave(state);
    prompt.notify("Import erfolgreich");
    state.ui.status_message = Some("Import erfolgreich".to_string());
    Ok(())
}

/// Schreibt den Zustand eingerückt als JSON-Datei.
pub fn export_json_file(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let json = persistence::to_pretty_json(&state.document())?;
    std::fs::write(path, json)
        .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;
    log::info!("JSON exportiert nach: {}", path.display());
    state.ui.status_message = Some(format!("Exportiert: {}", path.display()));
    Ok(())
}

/// Rendert die Zeichnung ohne Handles und Vorschau und schreibt sie als Bild.
pub fn export_image_file(
    state: &mut AppState,
    path: &Path,
    format: ImageFormat,
) -> anyhow::Result<()> {
    let scene = crate::app::render_scene::build_export(state);
    let list = render::draw(&scene);
    render::raster::export_to_file(&list, path, format)?;
    log::info!("Bild ({:?}) exportiert nach: {}", format, path.display());
    state.ui.status_message = Some(format!("Exportiert: {}", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::prompt::ScriptedPrompt;
    use crate::app::use_cases::editing::create_connection;
    use crate::core::BlockCount;
    use glam::Vec2;

    fn state() -> AppState {
        AppState::new(BlockCount::new(2).expect("gültige Anzahl"))
    }

    #[test]
    fn malformed_import_leaves_state_untouched() {
        let mut state = state();
        create_connection(&mut state, 1, 4);
        let mut prompt = ScriptedPrompt::new();

        let result = import_json_text(&mut state, &mut prompt, "{ kaputt");

        assert!(result.is_err());
        assert_eq!(state.graph.len(), 1);
        assert_eq!(prompt.notices(), vec!["Ungültige JSON-Datei"]);
        assert_eq!(prompt.cancellations(), 0);
    }

    #[test]
    fn import_replaces_only_present_fields() {
        let mut state = state();
        create_connection(&mut state, 1, 4);
        state.labels.add(Vec2::ZERO, "bleibt").expect("Platz");
        let mut prompt = ScriptedPrompt::new();

        import_json_text(
            &mut state,
            &mut prompt,
            r##"{"connections":[{"a":2,"b":3,"cp":{"x":650,"y":250},"color":"#FF4136"}]}"##,
        )
        .expect("Import sollte gelingen");

        assert_eq!(state.graph.len(), 1);
        assert!(state.graph.contains_pair(2, 3));
        assert_eq!(state.labels.get(0).map(|l| l.text.as_str()), Some("bleibt"));
        assert_eq!(prompt.notices(), vec!["Import erfolgreich"]);
        assert_eq!(prompt.cancellations(), 1);
    }

    #[test]
    fn import_drops_invalid_connections_and_saves() {
        let mut state = state();
        let mut prompt = ScriptedPrompt::new();

        import_json_text(
            &mut state,
            &mut prompt,
            r##"{"connections":[
                {"a":1,"b":1,"cp":{"x":0,"y":0},"color":"#000000"},
                {"a":1,"b":9,"cp":{"x":0,"y":0},"color":"#000000"},
                {"a":1,"b":4,"cp":{"x":0,"y":0},"color":"#000000"},
                {"a":4,"b":1,"cp":{"x":0,"y":0},"color":"#000000"}
            ],"labels":[]}"##,
        )
        .expect("Import sollte gelingen");

        assert_eq!(state.graph.len(), 1);
        let saved = state.store.get("clema_2").expect("lesbar");
        assert!(saved.is_some_and(|json| json.contains("\"b\":4")));
    }

    #[test]
    fn export_json_writes_pretty_document() {
        let mut state = state();
        create_connection(&mut state, 1, 4);
        let path = std::env::temp_dir().join("clema_export_json_test.json");

        export_json_file(&mut state, &path).expect("Export sollte gelingen");

        let written = std::fs::read_to_string(&path).expect("Datei sollte lesbar sein");
        assert!(written.contains("\n  \"connections\""));
        let _ = std::fs::remove_file(&path);
    }
}
