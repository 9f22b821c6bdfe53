//! Deterministischer Renderer: RenderScene → geordnete Zeichenliste.
//!
//! Die Zeichenliste ist in logischen Koordinaten; der Viewport wird vom
//! Ziel (egui-Painter oder SVG) als Transformation angewendet.

mod color;
pub mod raster;
pub mod svg;

pub use color::Rgba;
pub use raster::ImageFormat;

use crate::core::{sanitize_text, Connection, Viewport};
use crate::shared::{Preview, RenderScene};
use glam::Vec2;

/// Linienstärke der Klemmen-Umrisse
const BLOCK_OUTLINE_WIDTH: f32 = 1.0;
/// Linienstärke der Polaritäts-Symbole
const ICON_STROKE_WIDTH: f32 = 2.0;
/// Linienstärke der Drag-Vorschau
const PREVIEW_WIDTH: f32 = 2.0;
/// Zusätzlicher Radius der Endpunkt-Hervorhebung über dem Anschluss
const ENDPOINT_HIGHLIGHT_EXTRA: f32 = 3.0;

/// Ausrichtung eines Textes relativ zu seiner Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position ist die Textmitte
    Center,
    /// Position ist die linke obere Ecke
    TopLeft,
}

/// Ein Zeichenbefehl in logischen Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    StrokeRect {
        min: Vec2,
        size: Vec2,
        color: Rgba,
        width: f32,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    QuadCurve {
        from: Vec2,
        cp: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    Text {
        position: Vec2,
        text: String,
        font_size: f32,
        color: Rgba,
        anchor: TextAnchor,
    },
}

/// Vollständige Zeichnung eines Frames.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    /// Größe der Zeichenfläche in logischen Einheiten
    pub size: Vec2,
    /// Pan/Zoom, mit dem die Primitive abgebildet werden
    pub viewport: Viewport,
    /// Deckender Hintergrund (falls gesetzt)
    pub background: Option<Rgba>,
    /// Primitive in Zeichenreihenfolge
    pub primitives: Vec<Primitive>,
}

/// Zeichnet die Szene in fester Reihenfolge:
/// Klemmen mit Nummer, Polaritäts-Symbole, Verbindungen samt Handles der
/// Selektion, Endpunkt-Hervorhebung, Anschlüsse, Beschriftungen, Vorschau.
pub fn draw(scene: &RenderScene) -> DrawList {
    let opts = &scene.options;
    let ink = Rgba::from_hex_or(&opts.ink_color, Rgba::BLACK);
    let mut out = Vec::new();

    // 1) Klemmen und Nummern
    let outline = Rgba::from_hex_or(&opts.block_outline_color, Rgba::BLACK);
    let layout = &scene.layout;
    for block in layout.blocks() {
        let min = layout.block_min(block);
        out.push(Primitive::StrokeRect {
            min,
            size: layout.block_size,
            color: outline,
            width: BLOCK_OUTLINE_WIDTH,
        });
        out.push(Primitive::Text {
            position: min + layout.block_size / 2.0,
            text: (block + 1).to_string(),
            font_size: opts.label_font_size,
            color: ink,
            anchor: TextAnchor::Center,
        });
    }

    // 2) Polaritäts-Symbole bei 1/3 und 2/3 der Höhe
    let r = opts.icon_radius;
    let d = r / std::f32::consts::SQRT_2;
    for block in layout.blocks() {
        let xm = layout.block_center_x(block);
        for frac in [1.0 / 3.0, 2.0 / 3.0] {
            let center = Vec2::new(xm, layout.top_y() + layout.block_size.y * frac);
            out.push(Primitive::StrokeCircle {
                center,
                radius: r,
                color: ink,
                width: ICON_STROKE_WIDTH,
            });
            out.push(Primitive::Line {
                from: center - Vec2::splat(d),
                to: center + Vec2::splat(d),
                color: ink,
                width: ICON_STROKE_WIDTH,
            });
        }
    }

    // 3) Verbindungen, Handles nur für die Selektion
    let default_color = Rgba::from_hex_or(&opts.connection_color_default, Rgba::BLACK);
    for (index, conn) in scene.connections.iter().enumerate() {
        let Some((from, to)) = endpoints(scene, conn) else {
            continue;
        };
        out.push(Primitive::QuadCurve {
            from,
            cp: conn.cp,
            to,
            color: Rgba::from_hex_or(&conn.color, default_color),
            width: opts.connection_width,
        });
        if scene.selected == Some(index) {
            out.push(Primitive::FillCircle {
                center: conn.cp,
                radius: opts.control_point_radius,
                color: Rgba::from_hex_or(&opts.control_point_color, ink),
            });
            for center in [from, to] {
                out.push(Primitive::FillCircle {
                    center,
                    radius: opts.endpoint_radius,
                    color: Rgba::from_hex_or(&opts.endpoint_color, ink),
                });
            }
        }
    }

    // 3.1) Enden der Selektion hervorheben
    if let Some((from, to)) = scene
        .selected_connection()
        .and_then(|conn| endpoints(scene, conn))
    {
        for center in [from, to] {
            out.push(Primitive::FillCircle {
                center,
                radius: opts.connector_radius + ENDPOINT_HIGHLIGHT_EXTRA,
                color: Rgba::from_hex_or(&opts.endpoint_highlight_color, ink),
            });
        }
    }

    // 4) Anschlüsse
    let connector_color = Rgba::from_hex_or(&opts.connector_color, ink);
    let active_color = Rgba::from_hex_or(&opts.connector_active_color, ink);
    for connector in &scene.connectors {
        let color = if scene.pressed_connector == Some(connector.id) {
            active_color
        } else {
            connector_color
        };
        out.push(Primitive::FillCircle {
            center: connector.position,
            radius: opts.connector_radius,
            color,
        });
    }

    // 5) Beschriftungen
    for label in &scene.labels {
        out.push(Primitive::Text {
            position: label.position(),
            text: sanitize_text(&label.text),
            font_size: opts.label_font_size,
            color: ink,
            anchor: TextAnchor::TopLeft,
        });
    }

    // 6) Vorschau
    let preview_color = Rgba::from_array(opts.preview_color);
    match scene.preview {
        Some(Preview::Curve { from, cp, to }) => out.push(Primitive::QuadCurve {
            from,
            cp,
            to,
            color: preview_color,
            width: PREVIEW_WIDTH,
        }),
        Some(Preview::Line { from, to }) => out.push(Primitive::Line {
            from,
            to,
            color: preview_color,
            width: PREVIEW_WIDTH,
        }),
        None => {}
    }

    DrawList {
        size: Vec2::new(opts.canvas_width, opts.canvas_height),
        viewport: scene.viewport,
        background: scene
            .background
            .as_deref()
            .map(|hex| Rgba::from_hex_or(hex, Rgba::WHITE)),
        primitives: out,
    }
}

fn endpoints(scene: &RenderScene, conn: &Connection) -> Option<(Vec2, Vec2)> {
    Some((
        scene.connector_position(conn.a)?,
        scene.connector_position(conn.b)?,
    ))
}
