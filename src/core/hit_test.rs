//! Geometrische Pick-Abfragen in logischen Koordinaten.
//!
//! Alle Abfragen sind rein lesend und liefern bei Fehlschlag `None`.

use super::label::text_width;
use super::{ConnectionEnd, ConnectionGraph, Connector, ConnectorModel, LabelStore};
use crate::shared::curve_geometry::{interior_samples, segment_count};
use glam::Vec2;

/// Radien und Toleranzen der Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitParams {
    /// Pick-Radius der Anschlüsse (Radius + Toleranz)
    pub connector_radius: f32,
    /// Pick-Radius des Krümmungs-Handles (Radius + Toleranz)
    pub control_point_radius: f32,
    /// Pick-Radius der Endpunkt-Handles
    pub endpoint_radius: f32,
    /// Maximaler Abstand zu einem Bogen-Abtastpunkt
    pub arc_tolerance: f32,
    /// Basis-Schrittweite der Bogen-Abtastung
    pub arc_sample_step: f32,
    /// Schriftgröße für die Textbreite
    pub label_font_size: f32,
    /// Höhe der Beschriftungs-Hitbox
    pub label_line_height: f32,
}

/// Hit-Tests gegen den aktuellen Sitzungszustand.
#[derive(Debug, Clone, Copy)]
pub struct HitTester<'a> {
    connectors: &'a ConnectorModel,
    graph: &'a ConnectionGraph,
    labels: &'a LabelStore,
    params: HitParams,
}

impl<'a> HitTester<'a> {
    /// Bündelt die Daten für eine Abfrage-Runde
    pub fn new(
        connectors: &'a ConnectorModel,
        graph: &'a ConnectionGraph,
        labels: &'a LabelStore,
        params: HitParams,
    ) -> Self {
        Self {
            connectors,
            graph,
            labels,
            params,
        }
    }

    /// Erster Anschluss mit Abstand `< connector_radius`.
    pub fn connector(&self, pos: Vec2) -> Option<&'a Connector> {
        self.connectors
            .iter()
            .find(|c| c.position.distance(pos) < self.params.connector_radius)
    }

    /// Krümmungs-Handle der selektierten Verbindung.
    pub fn control_point(&self, pos: Vec2, selected: Option<usize>) -> Option<usize> {
        let index = selected?;
        let conn = self.graph.get(index)?;
        (conn.cp.distance(pos) < self.params.control_point_radius).then_some(index)
    }

    /// Erste Verbindung, deren Bogen in Toleranz zu `pos` liegt.
    pub fn arc(&self, pos: Vec2) -> Option<usize> {
        let tolerance = self.params.arc_tolerance;
        self.graph.iter().position(|conn| {
            let (Some(p0), Some(p1)) =
                (self.connectors.position(conn.a), self.connectors.position(conn.b))
            else {
                return false;
            };
            let segments =
                segment_count(p0, conn.cp, p1, self.params.arc_sample_step, tolerance / 2.0);
            interior_samples(p0, conn.cp, p1, segments).any(|s| s.distance(pos) < tolerance)
        })
    }

    /// Endpunkt-Handle der selektierten Verbindung (`a` zuerst).
    pub fn endpoint(&self, pos: Vec2, selected: Option<usize>) -> Option<ConnectionEnd> {
        let conn = self.graph.get(selected?)?;
        let radius = self.params.endpoint_radius;
        [ConnectionEnd::A, ConnectionEnd::B]
            .into_iter()
            .find(|&end| {
                self.connectors
                    .position(conn.endpoint(end))
                    .is_some_and(|p| p.distance(pos) < radius)
            })
    }

    /// Erste Beschriftung, deren Textbox `pos` enthält.
    pub fn label(&self, pos: Vec2) -> Option<usize> {
        let height = self.params.label_line_height;
        self.labels.iter().position(|label| {
            let width = text_width(&label.text, self.params.label_font_size);
            pos.x >= label.x
                && pos.x <= label.x + width
                && pos.y >= label.y
                && pos.y <= label.y + height
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BlockCount, BlockLayout, CurveStyle};
    use crate::shared::curve_geometry::quadratic_bezier;

    const STYLE: CurveStyle = CurveStyle { curvature: 0.3 };

    fn params() -> HitParams {
        HitParams {
            connector_radius: 9.0,
            control_point_radius: 10.0,
            endpoint_radius: 8.0,
            arc_tolerance: 8.0,
            arc_sample_step: 0.02,
            label_font_size: 14.0,
            label_line_height: 14.0,
        }
    }

    fn connectors(count: u32) -> ConnectorModel {
        let count = BlockCount::new(count).expect("gültige Anzahl");
        ConnectorModel::generate(BlockLayout::centered(
            count,
            Vec2::new(1300.0, 500.0),
            Vec2::new(50.0, 150.0),
        ))
    }

    #[test]
    fn test_connector_hit_is_strict() {
        let connectors = connectors(2);
        let graph = ConnectionGraph::new();
        let labels = LabelStore::new(20);
        let hits = HitTester::new(&connectors, &graph, &labels, params());

        assert_eq!(hits.connector(Vec2::new(625.0, 175.0)).map(|c| c.id), Some(1));
        assert_eq!(hits.connector(Vec2::new(633.9, 175.0)).map(|c| c.id), Some(1));
        assert!(hits.connector(Vec2::new(634.0, 175.0)).is_none());
        assert_eq!(hits.connector(Vec2::new(675.0, 330.0)).map(|c| c.id), Some(4));
    }

    #[test]
    fn test_handles_require_selection() {
        let connectors = connectors(2);
        let mut graph = ConnectionGraph::new();
        graph.create(&connectors, 1, 4, STYLE, "#000").expect("1-4");
        let labels = LabelStore::new(20);
        let hits = HitTester::new(&connectors, &graph, &labels, params());
        let cp = graph.get(0).map(|c| c.cp).expect("Verbindung");

        assert_eq!(hits.control_point(cp, Some(0)), Some(0));
        assert_eq!(hits.control_point(cp, None), None);
        assert_eq!(
            hits.endpoint(Vec2::new(626.0, 176.0), Some(0)),
            Some(ConnectionEnd::A)
        );
        assert_eq!(
            hits.endpoint(Vec2::new(675.0, 320.0), Some(0)),
            Some(ConnectionEnd::B)
        );
        assert_eq!(hits.endpoint(Vec2::new(626.0, 176.0), None), None);
        assert_eq!(hits.endpoint(Vec2::new(626.0, 176.0), Some(3)), None);
    }

    #[test]
    fn test_arc_completeness_for_all_block_counts() {
        let labels = LabelStore::new(20);
        for count in [1, 2, 12, 24] {
            let connectors = connectors(count);
            let last = connectors.len() as u32;
            let mut graph = ConnectionGraph::new();
            graph.create(&connectors, 1, last, STYLE, "#000").expect("Verbindung");

            let conn = graph.get(0).expect("Verbindung").clone();
            let p0 = connectors.position(conn.a).expect("a");
            let p1 = connectors.position(conn.b).expect("b");
            let hits = HitTester::new(&connectors, &graph, &labels, params());

            for k in 1..1000 {
                let t = k as f32 / 1000.0;
                let point = quadratic_bezier(p0, conn.cp, p1, t);
                assert_eq!(hits.arc(point), Some(0), "count {count}, t {t}");
            }
        }
    }

    #[test]
    fn test_arc_miss_far_away() {
        let connectors = connectors(2);
        let mut graph = ConnectionGraph::new();
        graph.create(&connectors, 1, 4, STYLE, "#000").expect("1-4");
        let labels = LabelStore::new(20);
        let hits = HitTester::new(&connectors, &graph, &labels, params());
        assert_eq!(hits.arc(Vec2::new(100.0, 100.0)), None);
    }

    #[test]
    fn test_label_box() {
        let connectors = connectors(1);
        let graph = ConnectionGraph::new();
        let mut labels = LabelStore::new(20);
        labels.add(Vec2::new(100.0, 50.0), "L1").expect("Platz");
        let hits = HitTester::new(&connectors, &graph, &labels, params());

        // Breite = 2 · 14 · 0.6 = 16.8
        assert_eq!(hits.label(Vec2::new(100.0, 50.0)), Some(0));
        assert_eq!(hits.label(Vec2::new(116.0, 64.0)), Some(0));
        assert_eq!(hits.label(Vec2::new(117.0, 60.0)), None);
        assert_eq!(hits.label(Vec2::new(105.0, 64.5)), None);
    }
}
