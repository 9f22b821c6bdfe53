//! Verschiebbare Text-Beschriftungen auf der Zeichenfläche.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wortzeichen, Leerraum und `. , ; : + - = ( )`.
///
/// Leerraum folgt der Regex-Klasse `\s`: Unicode-Leerraum ohne NEL, dazu BOM.
fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || is_space(c) || ".,;:+-=()".contains(c)
}

fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Entfernt alle nicht erlaubten Zeichen aus einem Beschriftungstext.
pub fn sanitize_text(text: &str) -> String {
    text.chars().filter(|&c| is_allowed_char(c)).collect()
}

/// Prüft, ob ein Text nur erlaubte Zeichen enthält.
pub fn is_sanitized(text: &str) -> bool {
    text.chars().all(is_allowed_char)
}

/// Deterministische Textbreite (Zeichenanzahl × Schriftgröße × 0.6).
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.6
}

/// Die maximale Anzahl an Beschriftungen ist erreicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Maximal {max} Beschriftungen erlaubt")]
pub struct LabelLimitReached {
    /// Obergrenze
    pub max: usize,
}

/// Eine Beschriftung, verankert an ihrer linken oberen Ecke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Anker x
    pub x: f32,
    /// Anker y
    pub y: f32,
    /// Bereinigter Text
    pub text: String,
}

impl Label {
    /// Ankerposition
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Alle Beschriftungen der Sitzung, begrenzt auf `max` Stück.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStore {
    labels: Vec<Label>,
    max: usize,
}

impl LabelStore {
    /// Erstellt einen leeren Speicher mit Obergrenze
    pub fn new(max: usize) -> Self {
        Self {
            labels: Vec::new(),
            max,
        }
    }

    /// Übernimmt Beschriftungen; Texte werden bereinigt, Überzählige verworfen.
    pub fn from_labels(labels: Vec<Label>, max: usize) -> Self {
        let mut store = Self::new(max);
        for label in labels.into_iter().take(max) {
            store.labels.push(Label {
                text: sanitize_text(&label.text),
                ..label
            });
        }
        store
    }

    /// Obergrenze
    pub fn max(&self) -> usize {
        self.max
    }

    /// Anzahl der Beschriftungen
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Gibt `true` zurück, wenn keine Beschriftung existiert
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Obergrenze erreicht?
    pub fn is_full(&self) -> bool {
        self.labels.len() >= self.max
    }

    /// Beschriftung per Index
    pub fn get(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    /// Alle Beschriftungen
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    /// Beschriftungen als Slice
    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    /// Fügt eine Beschriftung hinzu; der Text wird bereinigt.
    pub fn add(&mut self, position: Vec2, text: &str) -> Result<usize, LabelLimitReached> {
        if self.is_full() {
            return Err(LabelLimitReached { max: self.max });
        }
        self.labels.push(Label {
            x: position.x,
            y: position.y,
            text: sanitize_text(text),
        });
        Ok(self.labels.len() - 1)
    }

    /// Ersetzt den Text; gibt `false` bei unbekanntem Index zurück.
    pub fn set_text(&mut self, index: usize, text: &str) -> bool {
        match self.labels.get_mut(index) {
            Some(label) => {
                label.text = sanitize_text(text);
                true
            }
            None => false,
        }
    }

    /// Verschiebt den Anker; gibt `false` bei unbekanntem Index zurück.
    pub fn move_to(&mut self, index: usize, position: Vec2) -> bool {
        match self.labels.get_mut(index) {
            Some(label) => {
                label.x = position.x;
                label.y = position.y;
                true
            }
            None => false,
        }
    }

    /// Entfernt alle Beschriftungen.
    pub fn clear(&mut self) {
        self.labels.clear();
    }
}
