//! Zeichnet eine `DrawList` mit dem egui-Painter.

use crate::render::{DrawList, Primitive, Rgba, TextAnchor};
use crate::shared::curve_geometry::{polyline, segment_count};
use glam::Vec2;

/// Basis-Schrittweite der Kurven-Polylinien
const CURVE_STEP: f32 = 0.02;
/// Maximaler Abstand zweier Polylinienpunkte in Gerätepixeln
const CURVE_MAX_SPACING: f32 = 4.0;

fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Malt die Zeichenliste in `rect`; der Viewport der Liste wird angewendet.
pub fn paint(painter: &egui::Painter, rect: egui::Rect, list: &DrawList) {
    let vp = list.viewport;
    let scale = vp.scale;
    let to_screen = |p: Vec2| {
        let d = vp.to_device(p);
        egui::pos2(rect.min.x + d.x, rect.min.y + d.y)
    };

    painter.rect_filled(rect, 0.0, color32(list.background.unwrap_or(Rgba::WHITE)));

    for primitive in &list.primitives {
        match primitive {
            Primitive::StrokeRect {
                min,
                size,
                color,
                width,
            } => {
                painter.rect_stroke(
                    egui::Rect::from_two_pos(to_screen(*min), to_screen(*min + *size)),
                    0.0,
                    egui::Stroke::new(width * scale, color32(*color)),
                    egui::StrokeKind::Middle,
                );
            }
            Primitive::StrokeCircle {
                center,
                radius,
                color,
                width,
            } => {
                painter.circle_stroke(
                    to_screen(*center),
                    radius * scale,
                    egui::Stroke::new(width * scale, color32(*color)),
                );
            }
            Primitive::FillCircle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(to_screen(*center), radius * scale, color32(*color));
            }
            Primitive::Line {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [to_screen(*from), to_screen(*to)],
                    egui::Stroke::new(width * scale, color32(*color)),
                );
            }
            Primitive::QuadCurve {
                from,
                cp,
                to,
                color,
                width,
            } => {
                let segments =
                    segment_count(*from, *cp, *to, CURVE_STEP, CURVE_MAX_SPACING / scale);
                let points = polyline(*from, *cp, *to, segments)
                    .into_iter()
                    .map(to_screen)
                    .collect();
                painter.add(egui::Shape::line(
                    points,
                    egui::Stroke::new(width * scale, color32(*color)),
                ));
            }
            Primitive::Text {
                position,
                text,
                font_size,
                color,
                anchor,
            } => {
                let align = match anchor {
                    TextAnchor::Center => egui::Align2::CENTER_CENTER,
                    TextAnchor::TopLeft => egui::Align2::LEFT_TOP,
                };
                painter.text(
                    to_screen(*position),
                    align,
                    text,
                    egui::FontId::proportional(font_size * scale),
                    color32(*color),
                );
            }
        }
    }
}
