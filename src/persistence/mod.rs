//! JSON-Persistenz des Sitzungszustands.
//!
//! Der Zustand liegt unter dem Schlüssel `clema_<N>` (N = Klemmenanzahl) in
//! einem [`KeyValueStore`]. Import/Export verwenden dieselbe JSON-Form.

pub mod document;
pub mod store;

pub use document::{DiagramDocument, ImportDocument};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::core::BlockCount;
use anyhow::Context;

/// Speicher-Schlüssel für eine Klemmenanzahl.
pub fn session_key(count: BlockCount) -> String {
    format!("clema_{}", count.get())
}

/// Lädt den gespeicherten Zustand.
///
/// Fehlt der Schlüssel oder ist der Inhalt ungültig, wird ein leeres Dokument
/// geliefert; die Sitzung startet dann ohne Vorzustand.
pub fn load(store: &dyn KeyValueStore, count: BlockCount) -> DiagramDocument {
    let key = session_key(count);
    let raw = match store.get(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::info!("Kein gespeicherter Zustand unter '{}'", key);
            return DiagramDocument::default();
        }
        Err(e) => {
            log::warn!("Zustand '{}' nicht lesbar: {:#}", key, e);
            return DiagramDocument::default();
        }
    };
    match serde_json::from_str::<DiagramDocument>(&raw) {
        Ok(doc) => {
            log::info!(
                "Zustand '{}' geladen: {} Verbindungen, {} Beschriftungen",
                key,
                doc.connections.len(),
                doc.labels.len()
            );
            doc
        }
        Err(e) => {
            log::warn!("Zustand '{}' fehlerhaft, starte leer: {}", key, e);
            DiagramDocument::default()
        }
    }
}

/// Schreibt den Zustand kompakt unter `clema_<N>`.
pub fn save(
    store: &mut dyn KeyValueStore,
    count: BlockCount,
    doc: &DiagramDocument,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(doc)?;
    store.set(&session_key(count), &json)
}

/// Formatiert ein Dokument für Export und JSON-Ansicht (Einrückung 2).
pub fn to_pretty_json(doc: &DiagramDocument) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Parst eine Import-Datei.
pub fn parse_import(text: &str) -> anyhow::Result<ImportDocument> {
    serde_json::from_str(text).context("Ungültige JSON-Datei")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Connection, Label};
    use glam::Vec2;

    fn count(n: u32) -> BlockCount {
        BlockCount::new(n).expect("gültige Anzahl")
    }

    #[test]
    fn key_is_scoped_to_block_count() {
        assert_eq!(session_key(count(7)), "clema_7");
    }

    #[test]
    fn save_then_load_roundtrip() {
        let mut store = MemoryStore::new();
        let doc = DiagramDocument {
            connections: vec![Connection {
                a: 1,
                b: 4,
                cp: Vec2::new(605.0, 265.0),
                color: "#ff8800".to_string(),
            }],
            labels: vec![Label {
                x: 12.5,
                y: 40.0,
                text: "L1 (Phase)".to_string(),
            }],
        };
        save(&mut store, count(2), &doc).expect("Speichern");
        assert_eq!(load(&store, count(2)), doc);
        assert_eq!(load(&store, count(3)), DiagramDocument::default());
    }

    #[test]
    fn corrupt_state_loads_empty() {
        let mut store = MemoryStore::new();
        store.set("clema_2", "{not json").expect("set");
        assert_eq!(load(&store, count(2)), DiagramDocument::default());
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let json = to_pretty_json(&DiagramDocument::default()).expect("JSON");
        assert_eq!(json, "{\n  \"connections\": [],\n  \"labels\": []\n}");
    }

    #[test]
    fn parse_import_rejects_garbage() {
        assert!(parse_import("kein json").is_err());
        assert!(parse_import("{}").is_ok());
    }
}
