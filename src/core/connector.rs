//! Klemmen-Layout und die daraus abgeleiteten Anschlusspunkte.

use super::BlockCount;
use glam::Vec2;

/// Schiene eines Anschlusses (oben oder unten an der Klemme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rail {
    /// Obere Kante der Klemmenreihe
    Top,
    /// Untere Kante der Klemmenreihe
    Bottom,
}

/// Horizontal zentrierte Reihe gleich großer Klemmen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    /// Anzahl der Klemmen
    pub count: BlockCount,
    /// Linke obere Ecke der ersten Klemme
    pub origin: Vec2,
    /// Breite und Höhe einer Klemme
    pub block_size: Vec2,
}

impl BlockLayout {
    /// Zentriert `count` Klemmen auf einer Zeichenfläche der Größe `canvas`.
    pub fn centered(count: BlockCount, canvas: Vec2, block_size: Vec2) -> Self {
        let total_width = count.get() as f32 * block_size.x;
        let origin = Vec2::new(
            (canvas.x - total_width) / 2.0,
            (canvas.y - block_size.y) / 2.0,
        );
        Self {
            count,
            origin,
            block_size,
        }
    }

    /// y-Koordinate der oberen Schiene.
    pub fn top_y(&self) -> f32 {
        self.origin.y
    }

    /// y-Koordinate der unteren Schiene.
    pub fn bottom_y(&self) -> f32 {
        self.origin.y + self.block_size.y
    }

    /// Linke obere Ecke der Klemme mit Index `index` (0-basiert).
    pub fn block_min(&self, index: usize) -> Vec2 {
        self.origin + Vec2::new(index as f32 * self.block_size.x, 0.0)
    }

    /// Horizontale Mitte der Klemme mit Index `index`.
    pub fn block_center_x(&self, index: usize) -> f32 {
        self.block_min(index).x + self.block_size.x / 2.0
    }

    /// Iteriert über die Klemmen-Indizes.
    pub fn blocks(&self) -> std::ops::Range<usize> {
        0..self.count.get() as usize
    }
}

/// Fester Anschlusspunkt an einer Klemme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Fortlaufende ID ab 1
    pub id: u32,
    /// Position in logischen Koordinaten
    pub position: Vec2,
    /// Schiene des Anschlusses
    pub rail: Rail,
    /// Index der zugehörigen Klemme (0-basiert)
    pub block: usize,
}

/// Unveränderliche Menge aller Anschlüsse einer Sitzung.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorModel {
    layout: BlockLayout,
    connectors: Vec<Connector>,
}

impl ConnectorModel {
    /// Erzeugt pro Klemme einen oberen und einen unteren Anschluss.
    ///
    /// IDs laufen von links nach rechts: Klemme i hat oben `2i+1`, unten `2i+2`.
    pub fn generate(layout: BlockLayout) -> Self {
        let mut connectors = Vec::with_capacity(layout.count.get() as usize * 2);
        let mut next_id = 1;
        for block in layout.blocks() {
            let x = layout.block_center_x(block);
            for (rail, y) in [(Rail::Top, layout.top_y()), (Rail::Bottom, layout.bottom_y())] {
                connectors.push(Connector {
                    id: next_id,
                    position: Vec2::new(x, y),
                    rail,
                    block,
                });
                next_id += 1;
            }
        }
        Self { layout, connectors }
    }

    /// Layout, aus dem die Anschlüsse erzeugt wurden
    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    /// Sucht einen Anschluss per ID.
    pub fn get(&self, id: u32) -> Option<&Connector> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.connectors.get(index)
    }

    /// Position eines Anschlusses per ID.
    pub fn position(&self, id: u32) -> Option<Vec2> {
        self.get(id).map(|c| c.position)
    }

    /// Prüft, ob die ID existiert.
    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Alle Anschlüsse in ID-Reihenfolge
    pub fn iter(&self) -> impl Iterator<Item = &Connector> {
        self.connectors.iter()
    }

    /// Anzahl der Anschlüsse
    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    /// Immer `false`, da mindestens eine Klemme existiert
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }
}
