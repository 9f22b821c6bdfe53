use crate::core::{ConnectionEnd, WheelDirection};
use crate::render::ImageFormat;
use glam::Vec2;
use std::path::PathBuf;
use std::time::Duration;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
///
/// Positionen sind logische Koordinaten, außer bei Pan und Mausrad-Zoom.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Interaktion ===
    /// Zeitpunkt des letzten Taps setzen (`None` nach einem Doppel-Tap)
    RecordTap { at: Option<Duration> },
    /// Logische Pointer-Position für Vorschauen merken
    UpdatePointer { position: Vec2 },
    /// Zuletzt gedrückten Anschluss setzen
    SetPressedConnector { connector: Option<u32> },
    /// Start-Anschluss wählen und Kurven-Vorschau beginnen
    BeginArc { start: u32 },
    /// Offenen Start-Anschluss mit `target` verbinden
    CompleteArc { target: u32 },
    /// Offenen Start-Anschluss verwerfen
    CancelPendingArc,
    /// Krümmungs-Handle greifen
    BeginControlPointDrag { connection: usize },
    /// Ende einer Verbindung greifen
    BeginEndpointDrag {
        connection: usize,
        end: ConnectionEnd,
    },
    /// Beschriftung greifen
    BeginLabelDrag { label: usize, grab_offset: Vec2 },
    /// Drag beenden (alle Modi → Ruhezustand)
    EndDrag,

    // === Selektion ===
    /// Verbindung selektieren
    SelectConnection { connection: usize },
    /// Selektion aufheben
    ClearSelection,

    // === Editing ===
    /// Kontrollpunkt frei setzen
    MoveControlPoint { connection: usize, position: Vec2 },
    /// Ende einer Verbindung umhängen
    RetargetEndpoint {
        connection: usize,
        end: ConnectionEnd,
        connector: u32,
    },
    /// Farb-Nachfrage für eine Verbindung stellen
    RequestConnectionColor { connection: usize },
    /// Farbe setzen
    SetConnectionColor { connection: usize, color: String },
    /// Selektierte Verbindung löschen
    DeleteSelectedConnection,
    /// Text-Nachfrage für eine neue Beschriftung stellen
    RequestNewLabel { position: Vec2 },
    /// Beschriftung anlegen
    AddLabel { position: Vec2, text: String },
    /// Text-Nachfrage für eine bestehende Beschriftung stellen
    RequestLabelEdit { label: usize },
    /// Beschriftungstext ersetzen
    SetLabelText { label: usize, text: String },
    /// Beschriftung verschieben (Ankerposition)
    MoveLabel { label: usize, position: Vec2 },
    /// Alle Verbindungen und Beschriftungen entfernen
    ClearAll,

    // === Viewport ===
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Zoom und Verschiebung zurücksetzen
    ResetZoom,
    /// Mausrad-Zoom um den Cursor (Gerätekoordinaten)
    ZoomWheel {
        cursor: Vec2,
        direction: WheelDirection,
    },
    /// Pan-Drag beginnen (Gerätekoordinaten)
    BeginPan { pointer: Vec2 },
    /// Pan-Drag fortsetzen (Gerätekoordinaten)
    PanTo { pointer: Vec2 },
    /// Pan-Drag beenden
    EndPan,

    // === Dialoge & Panels ===
    /// Bestätigung für "Alles löschen" öffnen
    OpenClearConfirm,
    /// Bestätigung für "Alles löschen" schließen
    CloseClearConfirm,
    /// JSON-Ansicht umschalten
    ToggleJsonView,

    // === Datei-I/O ===
    /// Import-Dialog öffnen
    RequestImportDialog,
    /// JSON-Datei importieren
    ImportJsonFile { path: PathBuf },
    /// JSON-Export-Dialog öffnen
    RequestExportJsonDialog,
    /// JSON-Datei schreiben
    ExportJsonFile { path: PathBuf },
    /// Bild-Export-Dialog öffnen
    RequestExportImageDialog { format: ImageFormat },
    /// Bild-Datei schreiben
    ExportImageFile { path: PathBuf, format: ImageFormat },
}

impl AppCommand {
    /// Ob der Command selbst Verbindungen oder Beschriftungen verändert.
    pub fn edits_document(&self) -> bool {
        matches!(
            self,
            Self::CompleteArc { .. }
                | Self::MoveControlPoint { .. }
                | Self::RetargetEndpoint { .. }
                | Self::SetConnectionColor { .. }
                | Self::DeleteSelectedConnection
                | Self::AddLabel { .. }
                | Self::SetLabelText { .. }
                | Self::MoveLabel { .. }
                | Self::ClearAll
                | Self::ImportJsonFile { .. }
        )
    }
}
