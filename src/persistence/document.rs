//! JSON-Dokument `{connections, labels}` und dessen Bereinigung.

use crate::core::{label::is_sanitized, sanitize_text, Connection, ConnectorModel, Label};
use serde::{Deserialize, Serialize};

/// Persistierter bzw. exportierter Zustand einer Sitzung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramDocument {
    /// Alle Verbindungen in Einfügereihenfolge
    pub connections: Vec<Connection>,
    /// Alle Beschriftungen
    pub labels: Vec<Label>,
}

/// Import-Dokument: fehlende Felder lassen den Zustand unangetastet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ImportDocument {
    /// Ersetzt die Verbindungen, falls vorhanden
    pub connections: Option<Vec<Connection>>,
    /// Ersetzt die Beschriftungen, falls vorhanden
    pub labels: Option<Vec<Label>>,
}

/// Verwirft Verbindungen mit unbekanntem Anschluss, Self-Loop oder doppeltem Paar.
pub fn normalize_connections(
    connections: Vec<Connection>,
    connectors: &ConnectorModel,
) -> Vec<Connection> {
    let mut kept: Vec<Connection> = Vec::with_capacity(connections.len());
    for conn in connections {
        if !connectors.contains(conn.a) || !connectors.contains(conn.b) {
            log::warn!(
                "Verbindung {}-{} verworfen: Anschluss existiert nicht",
                conn.a,
                conn.b
            );
        } else if conn.a == conn.b {
            log::warn!("Verbindung {}-{} verworfen: Self-Loop", conn.a, conn.b);
        } else if kept.iter().any(|k| k.joins(conn.a, conn.b)) {
            log::warn!("Verbindung {}-{} verworfen: Duplikat", conn.a, conn.b);
        } else {
            kept.push(conn);
        }
    }
    kept
}

/// Bereinigt Beschriftungstexte und verwirft Beschriftungen über dem Maximum.
pub fn normalize_labels(labels: Vec<Label>, max: usize) -> Vec<Label> {
    if labels.len() > max {
        log::warn!(
            "{} Beschriftungen verworfen (Maximum {})",
            labels.len() - max,
            max
        );
    }
    labels
        .into_iter()
        .take(max)
        .map(|label| {
            if is_sanitized(&label.text) {
                label
            } else {
                log::warn!("Beschriftung '{}' bereinigt", label.text);
                Label {
                    text: sanitize_text(&label.text),
                    ..label
                }
            }
        })
        .collect()
}

impl DiagramDocument {
    /// Wendet beide Bereinigungen an.
    pub fn normalized(self, connectors: &ConnectorModel, max_labels: usize) -> Self {
        Self {
            connections: normalize_connections(self.connections, connectors),
            labels: normalize_labels(self.labels, max_labels),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BlockCount, BlockLayout};
    use glam::Vec2;

    fn connectors() -> ConnectorModel {
        let count = BlockCount::new(2).expect("gültige Anzahl");
        ConnectorModel::generate(BlockLayout::centered(
            count,
            Vec2::new(1300.0, 500.0),
            Vec2::new(50.0, 150.0),
        ))
    }

    fn conn(a: u32, b: u32) -> Connection {
        Connection {
            a,
            b,
            cp: Vec2::ZERO,
            color: "#0074D9".to_string(),
        }
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let doc: DiagramDocument = serde_json::from_str("{}").expect("JSON");
        assert_eq!(doc, DiagramDocument::default());

        let import: ImportDocument = serde_json::from_str(r#"{"labels": []}"#).expect("JSON");
        assert_eq!(import.connections, None);
        assert_eq!(import.labels, Some(Vec::new()));
    }

    #[test]
    fn normalize_drops_invalid_connections() {
        let kept = normalize_connections(
            vec![conn(1, 4), conn(4, 1), conn(2, 2), conn(3, 9), conn(2, 3)],
            &connectors(),
        );
        let pairs: Vec<(u32, u32)> = kept.iter().map(|c| (c.a, c.b)).collect();
        assert_eq!(pairs, vec![(1, 4), (2, 3)]);
    }

    #[test]
    fn normalize_sanitizes_and_caps_labels() {
        let labels = vec![
            Label {
                x: 0.0,
                y: 0.0,
                text: "<L1>".to_string(),
            },
            Label {
                x: 1.0,
                y: 1.0,
                text: "N".to_string(),
            },
            Label {
                x: 2.0,
                y: 2.0,
                text: "PE".to_string(),
            },
        ];
        let kept = normalize_labels(labels, 2);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].text, "L1");
        assert_eq!(kept[1].text, "N");
    }
}
