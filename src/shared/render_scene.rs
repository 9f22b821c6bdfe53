//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{BlockLayout, Connection, Connector, Label, Viewport};
use glam::Vec2;

/// Live-Vorschau während eines Drags (logische Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    /// Neue Verbindung vom Start-Anschluss zum Pointer
    Curve { from: Vec2, cp: Vec2, to: Vec2 },
    /// Umhängen: Gerade vom festen Ende zum Pointer
    Line { from: Vec2, to: Vec2 },
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Klemmen-Anordnung
    pub layout: BlockLayout,
    /// Alle Anschlüsse in ID-Reihenfolge
    pub connectors: Vec<Connector>,
    /// Alle Verbindungen
    pub connections: Vec<Connection>,
    /// Alle Beschriftungen
    pub labels: Vec<Label>,
    /// Pan/Zoom für diesen Frame
    pub viewport: Viewport,
    /// Index der selektierten Verbindung (Handles werden gezeichnet)
    pub selected: Option<usize>,
    /// Hervorgehobener Anschluss
    pub pressed_connector: Option<u32>,
    /// Aktive Drag-Vorschau
    pub preview: Option<Preview>,
    /// Deckender Hintergrund (Hex); `None` = transparent
    pub background: Option<String>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Position eines Anschlusses per ID.
    pub fn connector_position(&self, id: u32) -> Option<Vec2> {
        self.connectors
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.position)
    }

    /// Selektierte Verbindung (falls vorhanden)
    pub fn selected_connection(&self) -> Option<&Connection> {
        self.selected.and_then(|i| self.connections.get(i))
    }
}
