use crate::render::ImageFormat;

/// Ziel einer offenen Nachfrage, deren Antwort erst in einem späteren Frame kommt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTarget {
    /// Farbwahl für die Verbindung `connection`
    ConnectionColor { connection: usize },
    /// Neuer Text für die Beschriftung `label`
    LabelText { label: usize },
}

/// UI-bezogener Anwendungszustand (Dialoge, Panels, Statuszeile)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Import-Datei-Dialog geöffnet werden soll
    pub show_import_dialog: bool,
    /// Ob der JSON-Export-Dialog geöffnet werden soll
    pub show_export_json_dialog: bool,
    /// Ob der Bild-Export-Dialog geöffnet werden soll (mit Zielformat)
    pub export_image_dialog: Option<ImageFormat>,
    /// Ob die "Alles löschen"-Bestätigung angezeigt wird
    pub show_clear_confirm: bool,
    /// Ob die JSON-Ansicht sichtbar ist
    pub show_json_view: bool,
    /// Offene Nachfrage, auf deren Antwort gewartet wird
    pub prompt_target: Option<PromptTarget>,
    /// Temporäre Statusnachricht (z.B. Import, Export, Speicherfehler)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self::default()
    }
}
