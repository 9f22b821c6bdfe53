use crate::core::WheelDirection;
use crate::render::ImageFormat;
use glam::Vec2;
use std::path::PathBuf;
use std::time::Duration;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Pointer-Positionen sind Gerätekoordinaten relativ zur Zeichenfläche.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    // === Pointer ===
    /// Primäre Taste gedrückt bzw. Finger aufgesetzt
    PointerPressed { device_pos: Vec2, at: Duration },
    /// Pointer bewegt
    PointerMoved { device_pos: Vec2 },
    /// Primäre Taste losgelassen
    PointerReleased { device_pos: Vec2 },

    // === Viewport ===
    /// Pan-Drag gestartet (mittlere Taste oder Modifier + Drag)
    PanStarted { device_pos: Vec2 },
    /// Pan-Drag bewegt
    PanMoved { device_pos: Vec2 },
    /// Pan-Drag beendet
    PanEnded,
    /// Ein Mausrad-Tick über der Zeichenfläche
    WheelZoom {
        device_pos: Vec2,
        direction: WheelDirection,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Zoom und Verschiebung zurücksetzen
    ResetZoomRequested,

    // === Tastatur & Toolbar ===
    /// Selektierte Verbindung löschen (Entf-Taste oder Button)
    DeleteConnectionRequested,
    /// Offenen Start-Anschluss verwerfen und Selektion aufheben
    CancelRequested,
    /// "Alles löschen" angefragt (öffnet Bestätigung)
    ClearAllRequested,
    /// "Alles löschen" bestätigt
    ClearAllConfirmed,
    /// "Alles löschen" abgebrochen
    ClearAllCancelled,
    /// JSON-Ansicht ein-/ausblenden
    ToggleJsonViewRequested,

    // === Antworten auf Benutzer-Nachfragen ===
    /// Text für eine neue Beschriftung eingegeben
    LabelTextEntered { position: Vec2, text: String },
    /// Neuer Text für eine bestehende Beschriftung
    LabelTextEdited { index: usize, text: String },
    /// Neue Farbe für eine Verbindung gewählt
    ConnectionColorChosen { index: usize, color: String },

    // === Datei-I/O ===
    /// JSON-Import angefragt (zeigt Dateidialog)
    ImportJsonRequested,
    /// Import-Datei gewählt
    ImportJsonFileSelected { path: PathBuf },
    /// JSON-Export angefragt (zeigt Dateidialog)
    ExportJsonRequested,
    /// Export-Ziel für JSON gewählt
    ExportJsonFileSelected { path: PathBuf },
    /// Bild-Export angefragt (zeigt Dateidialog)
    ExportImageRequested { format: ImageFormat },
    /// Export-Ziel für das Bild gewählt
    ExportImageFileSelected { path: PathBuf, format: ImageFormat },
}
