//! Verbindungsgraph: geordnete Liste gekrümmter Verbindungen.
//!
//! Eine Verbindung wird über ihren Index in der Liste adressiert.
//! Jedes ungeordnete Anschluss-Paar kommt höchstens einmal vor.

use super::connection::default_control_point;
use super::{Connection, ConnectionEnd, ConnectorModel};
use glam::Vec2;
use thiserror::Error;

/// Grund, warum eine Verbindungs-Änderung abgelehnt wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectionRejected {
    /// Beide Enden am selben Anschluss
    #[error("Verbindung von Anschluss {0} zu sich selbst")]
    SelfLoop(u32),
    /// Anschluss existiert nicht
    #[error("Anschluss {0} existiert nicht")]
    UnknownConnector(u32),
    /// Das Paar ist bereits verbunden
    #[error("Anschlüsse {0} und {1} sind bereits verbunden")]
    Duplicate(u32, u32),
    /// Index außerhalb der Liste
    #[error("Verbindung {0} existiert nicht")]
    UnknownConnection(usize),
}

/// Parameter der Standard-Krümmung neuer Kurven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    /// Krümmungskonstante k
    pub curvature: f32,
}

/// Menge aller Verbindungen einer Sitzung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionGraph {
    connections: Vec<Connection>,
}

impl ConnectionGraph {
    /// Erstellt einen leeren Graphen
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt bereits geprüfte Verbindungen.
    pub fn from_connections(connections: Vec<Connection>) -> Self {
        Self { connections }
    }

    /// Anzahl der Verbindungen
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    /// Gibt `true` zurück, wenn keine Verbindung existiert
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Verbindung per Index
    pub fn get(&self, index: usize) -> Option<&Connection> {
        self.connections.get(index)
    }

    /// Alle Verbindungen in Einfügereihenfolge
    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    /// Verbindungen als Slice
    pub fn as_slice(&self) -> &[Connection] {
        &self.connections
    }

    /// Prüft das ungeordnete Paar `{p, q}`.
    pub fn contains_pair(&self, p: u32, q: u32) -> bool {
        self.connections.iter().any(|c| c.joins(p, q))
    }

    fn check_pair(
        &self,
        connectors: &ConnectorModel,
        p: u32,
        q: u32,
        ignore: Option<usize>,
    ) -> Result<(Vec2, Vec2), ConnectionRejected> {
        if p == q {
            return Err(ConnectionRejected::SelfLoop(p));
        }
        let p0 = connectors
            .position(p)
            .ok_or(ConnectionRejected::UnknownConnector(p))?;
        let p1 = connectors
            .position(q)
            .ok_or(ConnectionRejected::UnknownConnector(q))?;
        let duplicate = self
            .connections
            .iter()
            .enumerate()
            .any(|(i, c)| Some(i) != ignore && c.joins(p, q));
        if duplicate {
            return Err(ConnectionRejected::Duplicate(p, q));
        }
        Ok((p0, p1))
    }

    /// Legt eine neue Verbindung `a → b` mit Standard-Kontrollpunkt an.
    ///
    /// Gibt den Index der neuen Verbindung zurück.
    pub fn create(
        &mut self,
        connectors: &ConnectorModel,
        a: u32,
        b: u32,
        style: CurveStyle,
        color: &str,
    ) -> Result<usize, ConnectionRejected> {
        let (p0, p1) = self.check_pair(connectors, a, b, None)?;
        let cp = default_control_point(p0, p1, connectors.layout().top_y(), style.curvature);
        self.connections.push(Connection {
            a,
            b,
            cp,
            color: color.to_string(),
        });
        Ok(self.connections.len() - 1)
    }

    /// Setzt den Kontrollpunkt frei.
    pub fn set_control_point(&mut self, index: usize, cp: Vec2) -> Result<(), ConnectionRejected> {
        let conn = self
            .connections
            .get_mut(index)
            .ok_or(ConnectionRejected::UnknownConnection(index))?;
        conn.cp = cp;
        Ok(())
    }

    /// Hängt ein Ende an einen anderen Anschluss und berechnet die Krümmung neu.
    ///
    /// Manuelle Kontrollpunkt-Änderungen gehen dabei verloren.
    pub fn retarget_endpoint(
        &mut self,
        connectors: &ConnectorModel,
        index: usize,
        end: ConnectionEnd,
        connector_id: u32,
        style: CurveStyle,
    ) -> Result<(), ConnectionRejected> {
        let conn = self
            .connections
            .get(index)
            .ok_or(ConnectionRejected::UnknownConnection(index))?;
        let (a, b) = match end {
            ConnectionEnd::A => (connector_id, conn.b),
            ConnectionEnd::B => (conn.a, connector_id),
        };
        let (p0, p1) = self.check_pair(connectors, a, b, Some(index))?;
        let cp = default_control_point(p0, p1, connectors.layout().top_y(), style.curvature);

        let conn = &mut self.connections[index];
        conn.a = a;
        conn.b = b;
        conn.cp = cp;
        Ok(())
    }

    /// Setzt die Linienfarbe.
    pub fn set_color(&mut self, index: usize, color: &str) -> Result<(), ConnectionRejected> {
        let conn = self
            .connections
            .get_mut(index)
            .ok_or(ConnectionRejected::UnknownConnection(index))?;
        conn.color = color.to_string();
        Ok(())
    }

    /// Entfernt eine Verbindung; nachfolgende Indizes rücken auf.
    pub fn delete(&mut self, index: usize) -> Option<Connection> {
        (index < self.connections.len()).then(|| self.connections.remove(index))
    }

    /// Entfernt alle Verbindungen.
    pub fn clear(&mut self) {
        self.connections.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BlockCount, BlockLayout};
    use approx::assert_relative_eq;

    const STYLE: CurveStyle = CurveStyle { curvature: 0.3 };

    fn connectors(count: u32) -> ConnectorModel {
        let count = BlockCount::new(count).expect("gültige Anzahl");
        ConnectorModel::generate(BlockLayout::centered(
            count,
            Vec2::new(1300.0, 500.0),
            Vec2::new(50.0, 150.0),
        ))
    }

    #[test]
    fn test_create_rejects_duplicates_in_both_directions() {
        let connectors = connectors(2);
        let mut graph = ConnectionGraph::new();

        assert_eq!(graph.create(&connectors, 1, 4, STYLE, "#0074D9"), Ok(0));
        assert_eq!(
            graph.create(&connectors, 1, 4, STYLE, "#0074D9"),
            Err(ConnectionRejected::Duplicate(1, 4))
        );
        assert_eq!(
            graph.create(&connectors, 4, 1, STYLE, "#0074D9"),
            Err(ConnectionRejected::Duplicate(4, 1))
        );
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_create_rejects_self_loop_and_unknown() {
        let connectors = connectors(2);
        let mut graph = ConnectionGraph::new();
        for id in 1..=4 {
            assert_eq!(
                graph.create(&connectors, id, id, STYLE, "#000"),
                Err(ConnectionRejected::SelfLoop(id))
            );
        }
        assert_eq!(
            graph.create(&connectors, 1, 5, STYLE, "#000"),
            Err(ConnectionRejected::UnknownConnector(5))
        );
        assert!(graph.is_empty());
    }

    #[test]
    fn test_create_uses_heuristic_and_default_color() {
        let connectors = connectors(2);
        let mut graph = ConnectionGraph::new();
        let index = graph
            .create(&connectors, 1, 4, STYLE, "#0074D9")
            .expect("Verbindung sollte entstehen");
        let conn = graph.get(index).expect("Verbindung");
        assert_relative_eq!(conn.cp.x, 605.0);
        assert_relative_eq!(conn.cp.y, 265.0);
        assert_eq!(conn.color, "#0074D9");
    }

    #[test]
    fn test_retarget_recomputes_control_point() {
        let connectors = connectors(2);
        let mut graph = ConnectionGraph::new();
        graph
            .create(&connectors, 1, 4, STYLE, "#0074D9")
            .expect("Verbindung sollte entstehen");
        graph
            .set_control_point(0, Vec2::new(10.0, 10.0))
            .expect("Kontrollpunkt setzen");

        graph
            .retarget_endpoint(&connectors, 0, ConnectionEnd::A, 3, STYLE)
            .expect("Umhängen sollte gelingen");

        let conn = graph.get(0).expect("Verbindung");
        assert_eq!((conn.a, conn.b), (3, 4));
        // 3 und 4 liegen übereinander: d = (0, 150)
        assert_relative_eq!(conn.cp.x, 675.0 - 150.0 * 0.3);
        assert_relative_eq!(conn.cp.y, 250.0);
    }

    #[test]
    fn test_retarget_keeps_invariants() {
        let connectors = connectors(2);
        let mut graph = ConnectionGraph::new();
        graph.create(&connectors, 1, 4, STYLE, "#000").expect("1-4");
        graph.create(&connectors, 2, 3, STYLE, "#000").expect("2-3");
        let before = graph.clone();

        assert_eq!(
            graph.retarget_endpoint(&connectors, 0, ConnectionEnd::A, 4, STYLE),
            Err(ConnectionRejected::SelfLoop(4))
        );
        assert_eq!(
            graph.retarget_endpoint(&connectors, 1, ConnectionEnd::B, 1, STYLE),
            Ok(())
        );
        let before_dup = graph.clone();
        assert_eq!(
            graph.retarget_endpoint(&connectors, 1, ConnectionEnd::A, 4, STYLE),
            Err(ConnectionRejected::Duplicate(4, 1))
        );
        assert_eq!(graph, before_dup);
        assert_ne!(graph, before);
        assert_eq!(
            graph.retarget_endpoint(&connectors, 7, ConnectionEnd::A, 1, STYLE),
            Err(ConnectionRejected::UnknownConnection(7))
        );
    }

    #[test]
    fn test_retarget_to_same_pair_is_allowed() {
        let connectors = connectors(2);
        let mut graph = ConnectionGraph::new();
        graph.create(&connectors, 1, 4, STYLE, "#000").expect("1-4");
        assert_eq!(
            graph.retarget_endpoint(&connectors, 0, ConnectionEnd::A, 1, STYLE),
            Ok(())
        );
    }

    #[test]
    fn test_delete_and_clear() {
        let connectors = connectors(3);
        let mut graph = ConnectionGraph::new();
        graph.create(&connectors, 1, 4, STYLE, "#000").expect("1-4");
        graph.create(&connectors, 3, 6, STYLE, "#000").expect("3-6");

        let removed = graph.delete(0).expect("Verbindung 0");
        assert_eq!((removed.a, removed.b), (1, 4));
        assert!(graph.delete(5).is_none());
        assert_eq!(graph.get(0).map(|c| c.a), Some(3));

        graph.clear();
        assert!(graph.is_empty());
        assert!(!graph.contains_pair(3, 6));
    }

    #[test]
    fn test_set_color() {
        let connectors = connectors(1);
        let mut graph = ConnectionGraph::new();
        graph.create(&connectors, 1, 2, STYLE, "#000").expect("1-2");
        graph.set_color(0, "#ff0000").expect("Farbe");
        assert_eq!(graph.get(0).map(|c| c.color.as_str()), Some("#ff0000"));
        assert!(graph.set_color(1, "#fff").is_err());
    }
}
