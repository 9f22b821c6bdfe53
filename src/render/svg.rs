//! Serialisierung einer Zeichenliste als SVG-Dokument.

use super::{DrawList, Primitive, Rgba, TextAnchor};
use std::fmt::Write;

/// Schriftfamilie für alle Texte
const FONT_FAMILY: &str = "sans-serif";

/// Erzeugt ein eigenständiges SVG in Gerätegröße der Zeichenfläche.
pub fn to_svg(list: &DrawList) -> String {
    let (w, h) = (list.size.x, list.size.y);
    let mut svg = String::with_capacity(256 + list.primitives.len() * 96);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    if let Some(bg) = list.background {
        let _ = write!(
            svg,
            r#"<rect x="0" y="0" width="{w}" height="{h}" {}/>"#,
            fill(bg)
        );
    }
    let vp = list.viewport;
    let _ = write!(
        svg,
        r#"<g transform="matrix({s} 0 0 {s} {px} {py})">"#,
        s = vp.scale,
        px = vp.pan.x,
        py = vp.pan.y
    );
    for primitive in &list.primitives {
        write_primitive(&mut svg, primitive);
    }
    svg.push_str("</g></svg>");
    svg
}

fn write_primitive(svg: &mut String, primitive: &Primitive) {
    let _ = match primitive {
        Primitive::StrokeRect {
            min,
            size,
            color,
            width,
        } => write!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" {}/>"#,
            min.x,
            min.y,
            size.x,
            size.y,
            stroke(*color, *width)
        ),
        Primitive::StrokeCircle {
            center,
            radius,
            color,
            width,
        } => write!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" {}/>"#,
            center.x,
            center.y,
            radius,
            stroke(*color, *width)
        ),
        Primitive::FillCircle {
            center,
            radius,
            color,
        } => write!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}" {}/>"#,
            center.x,
            center.y,
            radius,
            fill(*color)
        ),
        Primitive::Line {
            from,
            to,
            color,
            width,
        } => write!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            stroke(*color, *width)
        ),
        Primitive::QuadCurve {
            from,
            cp,
            to,
            color,
            width,
        } => write!(
            svg,
            r#"<path d="M {} {} Q {} {} {} {}" fill="none" {}/>"#,
            from.x,
            from.y,
            cp.x,
            cp.y,
            to.x,
            to.y,
            stroke(*color, *width)
        ),
        Primitive::Text {
            position,
            text,
            font_size,
            color,
            anchor,
        } => {
            let align = match anchor {
                TextAnchor::Center => r#"text-anchor="middle" dominant-baseline="central""#,
                TextAnchor::TopLeft => r#"text-anchor="start" dominant-baseline="hanging""#,
            };
            write!(
                svg,
                r#"<text x="{}" y="{}" font-family="{}" font-size="{}" {} {}>{}</text>"#,
                position.x,
                position.y,
                FONT_FAMILY,
                font_size,
                align,
                fill(*color),
                escape_xml(text)
            )
        }
    };
}

fn fill(color: Rgba) -> String {
    if color.a == 255 {
        format!(r#"fill="{}""#, color.to_hex())
    } else {
        format!(
            r#"fill="{}" fill-opacity="{:.3}""#,
            color.to_hex(),
            color.opacity()
        )
    }
}

fn stroke(color: Rgba, width: f32) -> String {
    if color.a == 255 {
        format!(r#"stroke="{}" stroke-width="{}""#, color.to_hex(), width)
    } else {
        format!(
            r#"stroke="{}" stroke-opacity="{:.3}" stroke-width="{}""#,
            color.to_hex(),
            color.opacity(),
            width
        )
    }
}

/// Maskiert XML-Sonderzeichen in Textinhalten.
pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use glam::Vec2;

    fn list(primitives: Vec<Primitive>) -> DrawList {
        DrawList {
            size: Vec2::new(100.0, 50.0),
            viewport: Viewport::new(),
            background: Some(Rgba::WHITE),
            primitives,
        }
    }

    #[test]
    fn document_has_size_background_and_transform() {
        let svg = to_svg(&list(Vec::new()));

        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="100""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains(r#"matrix(1 0 0 1 0 0)"#));
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn quad_curve_becomes_path() {
        let svg = to_svg(&list(vec![Primitive::QuadCurve {
            from: Vec2::new(1.0, 2.0),
            cp: Vec2::new(3.0, 4.0),
            to: Vec2::new(5.0, 6.0),
            color: Rgba::rgb(0, 116, 217),
            width: 3.0,
        }]));

        assert!(svg.contains(r##"d="M 1 2 Q 3 4 5 6" fill="none" stroke="#0074d9" stroke-width="3""##));
    }

    #[test]
    fn translucent_stroke_carries_opacity() {
        let svg = to_svg(&list(vec![Primitive::Line {
            from: Vec2::ZERO,
            to: Vec2::ONE,
            color: Rgba::from_array([0, 116, 217, 102]),
            width: 2.0,
        }]));

        assert!(svg.contains(r#"stroke-opacity="0.400""#));
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(escape_xml(r#"a<b>&"c"'"#), "a&lt;b&gt;&amp;&quot;c&quot;&apos;");
    }
}
