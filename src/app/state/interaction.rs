use crate::core::ConnectionEnd;
use glam::Vec2;
use std::time::Duration;

/// Aktiver Drag-Modus der Zeichenfläche.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragMode {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Vorschau-Kurve vom Start-Anschluss zum Pointer
    DrawingArc {
        /// ID des Start-Anschlusses
        start: u32,
    },
    /// Krümmungs-Handle der Verbindung wird gezogen
    DraggingControlPoint {
        /// Index der Verbindung
        connection: usize,
    },
    /// Beschriftung wird verschoben
    DraggingLabel {
        /// Index der Beschriftung
        label: usize,
        /// Abstand Pointer → Anker beim Greifen
        grab_offset: Vec2,
    },
    /// Ende einer Verbindung wird umgehängt (Commit beim Loslassen)
    DraggingEndpoint {
        /// Index der Verbindung
        connection: usize,
        /// Gezogenes Ende
        end: ConnectionEnd,
    },
}

/// Zustand der Pointer-Interaktion
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionState {
    /// Aktueller Drag-Modus
    pub mode: DragMode,
    /// Gewählter Start-Anschluss einer neuen Verbindung (überlebt das Loslassen)
    pub pending_start: Option<u32>,
    /// Zuletzt gedrückter Anschluss (Hervorhebung)
    pub pressed_connector: Option<u32>,
    /// Zeitpunkt des letzten Taps (für Doppel-Tap)
    pub last_tap: Option<Duration>,
    /// Letzte logische Pointer-Position (für Vorschauen)
    pub pointer: Option<Vec2>,
}

impl InteractionState {
    /// Erstellt einen Ruhezustand ohne Start-Anschluss.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bricht Drag und offenen Start-Anschluss ab.
    pub fn reset(&mut self) {
        self.mode = DragMode::Idle;
        self.pending_start = None;
    }
}
