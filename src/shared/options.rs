//! Zentrale Konfiguration für den Clema-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::HitParams;
use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Logische Breite der Zeichenfläche (auch Breite des Bild-Exports).
pub const CANVAS_WIDTH: f32 = 1300.0;
/// Logische Höhe der Zeichenfläche (auch Höhe des Bild-Exports).
pub const CANVAS_HEIGHT: f32 = 500.0;

// ── Klemmen ─────────────────────────────────────────────────────────

/// Breite einer Klemme in logischen Einheiten.
pub const BLOCK_WIDTH: f32 = 50.0;
/// Höhe einer Klemme in logischen Einheiten.
pub const BLOCK_HEIGHT: f32 = 150.0;
/// Radius der Polaritäts-Symbole.
pub const ICON_RADIUS: f32 = 10.0;

// ── Anschlüsse & Handles ────────────────────────────────────────────

/// Radius eines Anschlusspunkts.
pub const CONNECTOR_RADIUS: f32 = 5.0;
/// Zusätzliche Toleranz beim Anschluss-Pick.
pub const CONNECTOR_TOLERANCE: f32 = 4.0;
/// Radius des Krümmungs-Handles.
pub const CONTROL_POINT_RADIUS: f32 = 6.0;
/// Zusätzliche Toleranz beim Krümmungs-Handle-Pick.
pub const CONTROL_POINT_TOLERANCE: f32 = 4.0;
/// Radius der Endpunkt-Handles der selektierten Verbindung.
pub const ENDPOINT_RADIUS: f32 = 8.0;

// ── Verbindungen ────────────────────────────────────────────────────

/// Krümmungskonstante der Standard-Kontrollpunkt-Heuristik.
pub const CURVATURE: f32 = 0.3;
/// Pick-Toleranz für Bögen.
pub const ARC_TOLERANCE: f32 = 8.0;
/// Basis-Schrittweite der Bogen-Abtastung im Kurvenparameter.
pub const ARC_SAMPLE_STEP: f32 = 0.02;
/// Standardfarbe neuer Verbindungen.
pub const CONNECTION_COLOR_DEFAULT: &str = "#0074D9";
/// Linienstärke der Verbindungen.
pub const CONNECTION_WIDTH: f32 = 3.0;

// ── Beschriftungen ──────────────────────────────────────────────────

/// Maximale Anzahl an Beschriftungen pro Sitzung.
pub const MAX_LABELS: usize = 20;
/// Schriftgröße für Beschriftungen und Klemmennummern.
pub const LABEL_FONT_SIZE: f32 = 14.0;
/// Zeilenhöhe der Beschriftungs-Hitbox.
pub const LABEL_LINE_HEIGHT: f32 = 14.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Maximaler Abstand zweier Taps für einen Doppel-Tap (Millisekunden).
pub const DOUBLE_TAP_MS: u64 = 300;

// ── Viewport ────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const VIEWPORT_SCALE_MIN: f32 = 0.5;
/// Maximaler Zoom-Faktor.
pub const VIEWPORT_SCALE_MAX: f32 = 3.0;
/// Zoom-Schritt der Buttons.
pub const VIEWPORT_ZOOM_STEP: f32 = 1.2;
/// Intensität pro Mausrad-Tick (Faktor = exp(±Intensität)).
pub const VIEWPORT_WHEEL_INTENSITY: f32 = 0.1;

// ── Farben (Hex) ────────────────────────────────────────────────────

/// Umrissfarbe der Klemmen.
pub const BLOCK_OUTLINE_COLOR: &str = "#444444";
/// Farbe von Text und Symbolen.
pub const INK_COLOR: &str = "#000000";
/// Füllfarbe der Anschlüsse.
pub const CONNECTOR_COLOR: &str = "#FF4136";
/// Füllfarbe des zuletzt gedrückten Anschlusses.
pub const CONNECTOR_ACTIVE_COLOR: &str = "#FFD700";
/// Farbe des Krümmungs-Handles.
pub const CONTROL_POINT_COLOR: &str = "#2ECC40";
/// Farbe der Endpunkt-Handles.
pub const ENDPOINT_COLOR: &str = "#FFDC00";
/// Farbe der Endpunkt-Hervorhebung.
pub const ENDPOINT_HIGHLIGHT_COLOR: &str = "#FFD700";
/// Farbe der Live-Vorschau (RGBA).
pub const PREVIEW_COLOR: [u8; 4] = [0, 116, 217, 102];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `clema_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Zeichenfläche ───────────────────────────────────────────
    /// Logische Breite der Zeichenfläche
    pub canvas_width: f32,
    /// Logische Höhe der Zeichenfläche
    pub canvas_height: f32,

    // ── Klemmen ─────────────────────────────────────────────────
    /// Klemmenbreite
    pub block_width: f32,
    /// Klemmenhöhe
    pub block_height: f32,
    /// Radius der Polaritäts-Symbole
    pub icon_radius: f32,

    // ── Anschlüsse & Handles ────────────────────────────────────
    /// Radius eines Anschlusspunkts
    pub connector_radius: f32,
    /// Zusätzliche Pick-Toleranz für Anschlüsse
    pub connector_tolerance: f32,
    /// Radius des Krümmungs-Handles
    pub control_point_radius: f32,
    /// Zusätzliche Pick-Toleranz für das Krümmungs-Handle
    pub control_point_tolerance: f32,
    /// Radius der Endpunkt-Handles
    pub endpoint_radius: f32,

    // ── Verbindungen ────────────────────────────────────────────
    /// Krümmungskonstante k der Standard-Heuristik
    pub curvature: f32,
    /// Pick-Toleranz für Bögen
    pub arc_tolerance: f32,
    /// Basis-Schrittweite der Bogen-Abtastung
    pub arc_sample_step: f32,
    /// Standardfarbe neuer Verbindungen (Hex)
    pub connection_color_default: String,
    /// Linienstärke der Verbindungen
    pub connection_width: f32,

    // ── Beschriftungen ──────────────────────────────────────────
    /// Maximale Anzahl an Beschriftungen
    pub max_labels: usize,
    /// Schriftgröße
    pub label_font_size: f32,
    /// Zeilenhöhe der Beschriftungs-Hitbox
    pub label_line_height: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Doppel-Tap-Schwelle in Millisekunden
    pub double_tap_ms: u64,

    // ── Viewport ────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub viewport_scale_min: f32,
    /// Maximaler Zoom-Faktor
    pub viewport_scale_max: f32,
    /// Zoom-Schritt der Buttons
    pub viewport_zoom_step: f32,
    /// Intensität pro Mausrad-Tick
    pub viewport_wheel_intensity: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Umrissfarbe der Klemmen
    pub block_outline_color: String,
    /// Farbe von Text und Symbolen
    pub ink_color: String,
    /// Füllfarbe der Anschlüsse
    pub connector_color: String,
    /// Füllfarbe des zuletzt gedrückten Anschlusses
    pub connector_active_color: String,
    /// Farbe des Krümmungs-Handles
    pub control_point_color: String,
    /// Farbe der Endpunkt-Handles
    pub endpoint_color: String,
    /// Farbe der Endpunkt-Hervorhebung
    pub endpoint_highlight_color: String,
    /// Farbe der Live-Vorschau (RGBA)
    pub preview_color: [u8; 4],

    // ── Speicher ────────────────────────────────────────────────
    /// Verzeichnisname des lokalen Key-Value-Speichers (neben der Binary)
    pub store_dir_name: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            icon_radius: ICON_RADIUS,

            connector_radius: CONNECTOR_RADIUS,
            connector_tolerance: CONNECTOR_TOLERANCE,
            control_point_radius: CONTROL_POINT_RADIUS,
            control_point_tolerance: CONTROL_POINT_TOLERANCE,
            endpoint_radius: ENDPOINT_RADIUS,

            curvature: CURVATURE,
            arc_tolerance: ARC_TOLERANCE,
            arc_sample_step: ARC_SAMPLE_STEP,
            connection_color_default: CONNECTION_COLOR_DEFAULT.to_string(),
            connection_width: CONNECTION_WIDTH,

            max_labels: MAX_LABELS,
            label_font_size: LABEL_FONT_SIZE,
            label_line_height: LABEL_LINE_HEIGHT,

            double_tap_ms: DOUBLE_TAP_MS,

            viewport_scale_min: VIEWPORT_SCALE_MIN,
            viewport_scale_max: VIEWPORT_SCALE_MAX,
            viewport_zoom_step: VIEWPORT_ZOOM_STEP,
            viewport_wheel_intensity: VIEWPORT_WHEEL_INTENSITY,

            block_outline_color: BLOCK_OUTLINE_COLOR.to_string(),
            ink_color: INK_COLOR.to_string(),
            connector_color: CONNECTOR_COLOR.to_string(),
            connector_active_color: CONNECTOR_ACTIVE_COLOR.to_string(),
            control_point_color: CONTROL_POINT_COLOR.to_string(),
            endpoint_color: ENDPOINT_COLOR.to_string(),
            endpoint_highlight_color: ENDPOINT_HIGHLIGHT_COLOR.to_string(),
            preview_color: PREVIEW_COLOR,

            store_dir_name: "clema_store".to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Lädt Optionen; fehlt die Datei, werden die Standardwerte dort abgelegt.
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_from_file(path);
        }
        let options = Self::default();
        if let Err(e) = options.save_to_file(path) {
            log::warn!("Standard-Optionen nicht geschrieben: {:#}", e);
        }
        options
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        Self::binary_dir().join("clema_editor.toml")
    }

    /// Verzeichnis des lokalen Key-Value-Speichers neben der Binary.
    pub fn store_dir(&self) -> std::path::PathBuf {
        Self::binary_dir().join(&self.store_dir_name)
    }

    fn binary_dir() -> std::path::PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf))
            .unwrap_or_else(|| std::path::PathBuf::from("."))
    }

    /// Pick-Parameter für die Hit-Tests.
    pub fn hit_params(&self) -> HitParams {
        HitParams {
            connector_radius: self.connector_radius + self.connector_tolerance,
            control_point_radius: self.control_point_radius + self.control_point_tolerance,
            endpoint_radius: self.endpoint_radius,
            arc_tolerance: self.arc_tolerance,
            arc_sample_step: self.arc_sample_step,
            label_font_size: self.label_font_size,
            label_line_height: self.label_line_height,
        }
    }

    /// Doppel-Tap-Schwelle als `Duration`.
    pub fn double_tap_threshold(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.double_tap_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_survive_toml_roundtrip() {
        let options = EditorOptions::default();
        let text = toml::to_string_pretty(&options).expect("TOML-Serialisierung");
        let parsed: EditorOptions = toml::from_str(&text).expect("TOML-Parsing");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: EditorOptions = toml::from_str("max_labels = 5\n").expect("TOML-Parsing");
        assert_eq!(parsed.max_labels, 5);
        assert_eq!(parsed.curvature, CURVATURE);
        assert_eq!(parsed.double_tap_ms, DOUBLE_TAP_MS);
    }

    #[test]
    fn first_start_writes_default_file() {
        let path = std::env::temp_dir().join(format!(
            "clema_editor_options_{}.toml",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let created = EditorOptions::load_or_create(&path);
        let reloaded = EditorOptions::load_or_create(&path);

        assert!(path.exists());
        assert_eq!(created, EditorOptions::default());
        assert_eq!(reloaded, created);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn hit_params_include_tolerances() {
        let params = EditorOptions::default().hit_params();
        assert_eq!(params.connector_radius, CONNECTOR_RADIUS + CONNECTOR_TOLERANCE);
        assert_eq!(
            params.control_point_radius,
            CONTROL_POINT_RADIUS + CONTROL_POINT_TOLERANCE
        );
    }
}
