//! Viewport für Pan und Zoom der Zeichenfläche.
//!
//! Gerätekoordinaten (Pointer relativ zur linken oberen Ecke der Zeichenfläche)
//! werden über `scale` und `pan` in logische Zeichenkoordinaten umgerechnet.

use glam::Vec2;

/// Erlaubter Bereich des Zoom-Faktors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    /// Minimaler Zoom-Faktor
    pub min: f32,
    /// Maximaler Zoom-Faktor
    pub max: f32,
}

impl ZoomLimits {
    /// Erstellt Zoom-Grenzen
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Prüft, ob ein Zoom-Faktor innerhalb der Grenzen liegt.
    pub fn contains(&self, scale: f32) -> bool {
        scale >= self.min && scale <= self.max
    }
}

/// Richtung eines Mausrad-Ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// Hineinzoomen (Rad nach vorne)
    In,
    /// Herauszoomen (Rad nach hinten)
    Out,
}

impl WheelDirection {
    /// Leitet die Richtung aus einem vertikalen Scroll-Delta ab.
    ///
    /// Positives Delta (egui: Rad nach vorne) zoomt hinein.
    pub fn from_scroll_delta(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::In)
        } else if delta_y < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    fn sign(self) -> f32 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// Pan/Zoom-Zustand der Sitzung (wird nicht persistiert).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Zoom-Faktor (1.0 = unskaliert)
    pub scale: f32,
    /// Verschiebung in Gerätekoordinaten
    pub pan: Vec2,
}

impl Viewport {
    /// Erstellt einen Viewport ohne Zoom und Verschiebung
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
        }
    }

    /// Gerätekoordinate → logische Koordinate.
    pub fn to_logical(&self, device: Vec2) -> Vec2 {
        (device - self.pan) / self.scale
    }

    /// Logische Koordinate → Gerätekoordinate.
    pub fn to_device(&self, logical: Vec2) -> Vec2 {
        logical * self.scale + self.pan
    }

    /// Zoomt stufenweise hinein (ohne Pivot).
    pub fn zoom_in(&mut self, step: f32, limits: ZoomLimits) {
        self.scale = (self.scale * step).min(limits.max);
    }

    /// Zoomt stufenweise heraus (ohne Pivot).
    pub fn zoom_out(&mut self, step: f32, limits: ZoomLimits) {
        self.scale = (self.scale / step).max(limits.min);
    }

    /// Zoomt um `exp(±intensity)` auf den Cursor zu.
    ///
    /// Der Punkt unter dem Cursor bleibt fix. Liegt der neue Faktor außerhalb
    /// der Grenzen, bleibt der Viewport unverändert und `false` wird geliefert.
    pub fn zoom_wheel(
        &mut self,
        cursor: Vec2,
        direction: WheelDirection,
        intensity: f32,
        limits: ZoomLimits,
    ) -> bool {
        let factor = (direction.sign() * intensity).exp();
        let new_scale = self.scale * factor;
        if !limits.contains(new_scale) {
            return false;
        }
        self.pan = cursor - factor * (cursor - self.pan);
        self.scale = new_scale;
        true
    }

    /// Setzt Zoom und Verschiebung zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

/// Greifpunkt eines laufenden Pan-Drags.
///
/// `anchor = pointer_start - pan_start`, danach `pan = pointer - anchor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGrab {
    anchor: Vec2,
}

impl PanGrab {
    /// Beginnt einen Pan-Drag an der Geräteposition `pointer`.
    pub fn begin(pointer: Vec2, viewport: &Viewport) -> Self {
        Self {
            anchor: pointer - viewport.pan,
        }
    }

    /// Setzt die Verschiebung für die aktuelle Pointer-Position.
    pub fn apply(&self, pointer: Vec2, viewport: &mut Viewport) {
        viewport.pan = pointer - self.anchor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn limits() -> ZoomLimits {
        ZoomLimits::new(0.5, 3.0)
    }

    #[test]
    fn test_to_logical_inverts_to_device() {
        let viewport = Viewport {
            scale: 2.0,
            pan: Vec2::new(30.0, -10.0),
        };
        let logical = viewport.to_logical(Vec2::new(130.0, 90.0));
        assert_relative_eq!(logical.x, 50.0);
        assert_relative_eq!(logical.y, 50.0);

        let device = viewport.to_device(logical);
        assert_relative_eq!(device.x, 130.0);
        assert_relative_eq!(device.y, 90.0);
    }

    #[test]
    fn test_zoom_buttons_clamp() {
        let mut viewport = Viewport::new();
        for _ in 0..20 {
            viewport.zoom_in(1.2, limits());
        }
        assert_relative_eq!(viewport.scale, 3.0);

        for _ in 0..20 {
            viewport.zoom_out(1.2, limits());
        }
        assert_relative_eq!(viewport.scale, 0.5);
    }

    #[test]
    fn test_wheel_keeps_point_under_cursor() {
        let mut viewport = Viewport {
            scale: 1.3,
            pan: Vec2::new(12.0, 40.0),
        };
        let cursor = Vec2::new(400.0, 220.0);
        let before = viewport.to_logical(cursor);

        assert!(viewport.zoom_wheel(cursor, WheelDirection::In, 0.1, limits()));

        let after = viewport.to_logical(cursor);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
        assert_relative_eq!(viewport.scale, 1.3 * 0.1_f32.exp(), epsilon = 1e-5);
    }

    #[test]
    fn test_wheel_out_of_range_is_rejected() {
        let mut viewport = Viewport {
            scale: 2.9,
            pan: Vec2::new(5.0, 5.0),
        };
        let before = viewport;
        assert!(!viewport.zoom_wheel(Vec2::new(100.0, 100.0), WheelDirection::In, 0.1, limits()));
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_any_zoom_sequence_stays_in_bounds() {
        let mut viewport = Viewport::new();
        let cursor = Vec2::new(321.0, 123.0);
        for i in 0..200 {
            match i % 7 {
                0 | 1 | 2 => {
                    viewport.zoom_wheel(cursor, WheelDirection::In, 0.1, limits());
                }
                3 => viewport.zoom_in(1.2, limits()),
                4 | 5 => {
                    viewport.zoom_wheel(cursor, WheelDirection::Out, 0.1, limits());
                }
                _ => viewport.zoom_out(1.2, limits()),
            }
            assert!(limits().contains(viewport.scale), "scale {}", viewport.scale);
        }
    }

    #[test]
    fn test_pan_grab_follows_pointer() {
        let mut viewport = Viewport {
            scale: 1.0,
            pan: Vec2::new(10.0, 20.0),
        };
        let grab = PanGrab::begin(Vec2::new(100.0, 100.0), &viewport);
        grab.apply(Vec2::new(150.0, 80.0), &mut viewport);
        assert_relative_eq!(viewport.pan.x, 60.0);
        assert_relative_eq!(viewport.pan.y, 0.0);
    }

    #[test]
    fn test_reset() {
        let mut viewport = Viewport {
            scale: 2.5,
            pan: Vec2::new(-3.0, 7.0),
        };
        viewport.reset();
        assert_eq!(viewport, Viewport::new());
    }

    #[test]
    fn test_wheel_direction_from_delta() {
        assert_eq!(WheelDirection::from_scroll_delta(3.0), Some(WheelDirection::In));
        assert_eq!(WheelDirection::from_scroll_delta(-1.0), Some(WheelDirection::Out));
        assert_eq!(WheelDirection::from_scroll_delta(0.0), None);
    }
}
