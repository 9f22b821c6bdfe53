//! Bild-Export: Zeichenliste → SVG → Pixmap → PNG/JPEG.

use super::{svg, DrawList};
use anyhow::{Context, Result};
use image::ImageEncoder;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use std::path::Path;

/// JPEG-Qualität des Bild-Exports
const JPEG_QUALITY: u8 = 90;

/// Zielformat des Bild-Exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Standard-Dateiendung
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Vorgeschlagener Dateiname
    pub fn default_file_name(self) -> String {
        format!("clemas.{}", self.extension())
    }

    /// Anzeigename für Dateidialoge
    pub fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
        }
    }
}

/// Rastert die Zeichenliste in Gerätegröße der Zeichenfläche.
pub fn rasterize(list: &DrawList) -> Result<image::RgbaImage> {
    let svg_text = svg::to_svg(list);
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&svg_text, &opt).context("SVG nicht lesbar")?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Pixmap {}x{} nicht anlegbar", size.width(), size.height()))?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    image::RgbaImage::from_raw(size.width(), size.height(), data)
        .ok_or_else(|| anyhow::anyhow!("Bildpuffer hat falsche Größe"))
}

/// Rastert und schreibt die Zeichnung in `path`.
pub fn export_to_file(list: &DrawList, path: &Path, format: ImageFormat) -> Result<()> {
    let rgba = rasterize(list)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("Datei nicht anlegbar: {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    match format {
        ImageFormat::Png => {
            let encoder = image::codecs::png::PngEncoder::new(writer);
            encoder.write_image(
                rgba.as_raw(),
                rgba.width(),
                rgba.height(),
                image::ExtendedColorType::Rgba8,
            )?;
        }
        ImageFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
            encoder.write_image(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                image::ExtendedColorType::Rgb8,
            )?;
        }
    }
    log::info!(
        "{} geschrieben: {} ({}x{})",
        format.label(),
        path.display(),
        list.size.x,
        list.size.y
    );
    Ok(())
}
