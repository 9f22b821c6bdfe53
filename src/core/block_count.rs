//! Validierte Anzahl an Klemmen einer Sitzung.

use std::fmt;
use thiserror::Error;

/// Fehler beim Einlesen der Klemmenanzahl.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockCountError {
    /// Eingabe ist keine ganze Zahl
    #[error("'{0}' ist keine ganze Zahl")]
    NotANumber(String),
    /// Zahl liegt außerhalb des erlaubten Bereichs
    #[error("Anzahl {value} liegt außerhalb von {min}..={max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
}

/// Anzahl der Klemmen (1..=24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockCount(u32);

impl BlockCount {
    /// Kleinste erlaubte Anzahl.
    pub const MIN: u32 = 1;
    /// Größte erlaubte Anzahl.
    pub const MAX: u32 = 24;

    /// Prüft einen Zahlenwert.
    pub fn new(value: u32) -> Result<Self, BlockCountError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(BlockCountError::OutOfRange {
                value: i64::from(value),
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Liest eine Benutzereingabe (Leerraum wird ignoriert).
    pub fn parse(input: &str) -> Result<Self, BlockCountError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| BlockCountError::NotANumber(trimmed.to_string()))?;
        u32::try_from(value)
            .map_err(|_| BlockCountError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
            .and_then(Self::new)
    }

    /// Rohwert
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BlockCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
