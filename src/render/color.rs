//! Farben als 8-Bit-RGBA mit Hex-Parsing.

/// Farbe mit 8 Bit pro Kanal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opakes Schwarz
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opakes Weiß
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Erstellt eine opake Farbe.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Erstellt eine Farbe aus einem `[r, g, b, a]`-Array.
    pub const fn from_array(c: [u8; 4]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
            a: c[3],
        }
    }

    /// Parst `#RGB` oder `#RRGGBB` (Groß-/Kleinschreibung egal).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, i) in out.iter_mut().zip(0..3) {
                    *slot = channel(&digits[i..i + 1])? * 17;
                }
                Some(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => None,
        }
    }

    /// Wie [`Rgba::from_hex`], aber mit Ersatzfarbe für ungültige Eingaben.
    pub fn from_hex_or(hex: &str, fallback: Self) -> Self {
        Self::from_hex(hex).unwrap_or(fallback)
    }

    /// `#rrggbb` ohne Alpha.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Deckkraft im Bereich 0..=1.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }
}
