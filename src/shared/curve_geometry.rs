//! Reine Geometrie-Funktionen für quadratische Bézier-Kurven.
//!
//! Layer-neutral: wird von `core::hit_test`, vom Renderer und vom
//! egui-Canvas gemeinsam verwendet.

use glam::Vec2;

/// Obergrenze der Abtastpunkte pro Kurve.
const MAX_SEGMENTS: usize = 4096;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Maximale Parametergeschwindigkeit |B'(t)| auf [0, 1].
///
/// B' ist linear in t, das Maximum liegt daher an einem der Enden.
pub fn quadratic_max_speed(p0: Vec2, p1: Vec2, p2: Vec2) -> f32 {
    (2.0 * (p1 - p0).length()).max(2.0 * (p2 - p1).length())
}

/// Anzahl der Parameter-Intervalle für die Abtastung.
///
/// Mindestens `1 / base_step`; feiner, falls benachbarte Abtastpunkte sonst
/// weiter als `max_spacing` auseinander lägen.
pub fn segment_count(p0: Vec2, p1: Vec2, p2: Vec2, base_step: f32, max_spacing: f32) -> usize {
    let base = if base_step > 0.0 {
        ((1.0 / base_step).round() as usize).max(1)
    } else {
        1
    };
    let refined = if max_spacing > 0.0 {
        (quadratic_max_speed(p0, p1, p2) / max_spacing).ceil() as usize
    } else {
        base
    };
    base.max(refined).clamp(1, MAX_SEGMENTS)
}

/// Abtastpunkte strikt innerhalb von (0, 1), gleichmäßig im Parameter.
pub fn interior_samples(
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    segments: usize,
) -> impl Iterator<Item = Vec2> {
    let n = segments.max(1);
    (1..n).map(move |k| quadratic_bezier(p0, p1, p2, k as f32 / n as f32))
}

/// Polylinie inklusive beider Endpunkte (für Zeichenpfade).
pub fn polyline(p0: Vec2, p1: Vec2, p2: Vec2, segments: usize) -> Vec<Vec2> {
    let n = segments.max(1);
    (0..=n)
        .map(|k| quadratic_bezier(p0, p1, p2, k as f32 / n as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quadratic_bezier_endpoints_and_mid() {
        let p0 = Vec2::new(0.0, 0.0);
        let p1 = Vec2::new(50.0, 100.0);
        let p2 = Vec2::new(100.0, 0.0);
        assert_relative_eq!(quadratic_bezier(p0, p1, p2, 0.0).x, 0.0);
        assert_relative_eq!(quadratic_bezier(p0, p1, p2, 1.0).x, 100.0);
        let mid = quadratic_bezier(p0, p1, p2, 0.5);
        assert_relative_eq!(mid.x, 50.0);
        assert_relative_eq!(mid.y, 50.0);
    }

    #[test]
    fn test_segment_count_refines_long_curves() {
        let short = segment_count(Vec2::ZERO, Vec2::new(5.0, 5.0), Vec2::new(10.0, 0.0), 0.02, 4.0);
        assert_eq!(short, 50);

        // Geschwindigkeit 2·1000 → 2000 / 4 = 500 Intervalle
        let long =
            segment_count(Vec2::ZERO, Vec2::new(1000.0, 0.0), Vec2::new(1000.0, 0.0), 0.02, 4.0);
        assert_eq!(long, 500);
    }

    #[test]
    fn test_interior_samples_exclude_endpoints() {
        let samples: Vec<Vec2> =
            interior_samples(Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0), 4).collect();
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|p| p.x > 0.0 && p.x < 2.0));
    }

    #[test]
    fn test_polyline_includes_endpoints() {
        let line = polyline(Vec2::ZERO, Vec2::new(1.0, 1.0), Vec2::new(2.0, 0.0), 8);
        assert_eq!(line.len(), 9);
        assert_eq!(line[0], Vec2::ZERO);
        assert_eq!(line[8], Vec2::new(2.0, 0.0));
    }
}
