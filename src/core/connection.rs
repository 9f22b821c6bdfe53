//! Gekrümmte Verbindung zwischen zwei Anschlüssen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ende einer Verbindung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionEnd {
    /// Anschluss `a`
    A,
    /// Anschluss `b`
    B,
}

impl ConnectionEnd {
    /// Das jeweils andere Ende
    pub fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Quadratische Bézier-Verbindung zwischen den Anschlüssen `a` und `b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// ID des ersten Anschlusses
    pub a: u32,
    /// ID des zweiten Anschlusses
    pub b: u32,
    /// Kontrollpunkt der Kurve
    #[serde(with = "point_xy")]
    pub cp: Vec2,
    /// Linienfarbe (CSS-Hex, z.B. `#0074D9`)
    pub color: String,
}

impl Connection {
    /// ID am angegebenen Ende
    pub fn endpoint(&self, end: ConnectionEnd) -> u32 {
        match end {
            ConnectionEnd::A => self.a,
            ConnectionEnd::B => self.b,
        }
    }

    /// Prüft, ob die Verbindung das ungeordnete Paar `{p, q}` verbindet.
    pub fn joins(&self, p: u32, q: u32) -> bool {
        (self.a == p && self.b == q) || (self.a == q && self.b == p)
    }
}

/// Standard-Kontrollpunkt für eine Kurve von `p0` nach `p1`.
///
/// Liegen beide Punkte auf der oberen Schiene (`top_y`), wölbt sich die Kurve
/// nach oben, sonst nach unten bzw. zur Seite.
pub fn default_control_point(p0: Vec2, p1: Vec2, top_y: f32, curvature: f32) -> Vec2 {
    let d = p1 - p0;
    let mid = (p0 + p1) * 0.5;
    let dir = if p0.y == top_y && p1.y == top_y {
        -1.0
    } else {
        1.0
    };
    Vec2::new(
        mid.x - d.y * curvature * dir,
        mid.y + d.x * curvature * dir,
    )
}

/// Serde-Darstellung eines `Vec2` als `{ "x": .., "y": .. }`.
pub mod point_xy {
    use glam::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Point {
        x: f32,
        y: f32,
    }

    pub fn serialize<S: Serializer>(value: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
        Point {
            x: value.x,
            y: value.y,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
        let p = Point::deserialize(deserializer)?;
        Ok(Vec2::new(p.x, p.y))
    }
}
