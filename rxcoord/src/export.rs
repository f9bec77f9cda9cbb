//! PNG export.
//!
//! The SVG document is rasterized with resvg onto an opaque background
//! (the page background the diagram is normally shown on) and encoded with
//! the `image` PNG encoder.

use std::path::Path;
use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use resvg::{tiny_skia, usvg};

use crate::error::ExportError;
use crate::geometry::limits;
use crate::model::Color;
use crate::svg::palette;

pub const DEFAULT_PNG_FILENAME: &str = "reaction-coordinate.png";

/// DejaVu Sans, used when the caller supplies no fonts. Covers the diagram's
/// labels (→ ↑ ₐ Δ ≥ °).
pub const BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

#[derive(Clone, Debug)]
pub struct PngOptions {
    /// Pixels per SVG user unit.
    pub scale: f32,
    pub background: Color,
    /// Font files (TTF/OTF bytes); the first face becomes the sans-serif family.
    /// Empty means [`BUNDLED_FONT`].
    pub fonts: Vec<Vec<u8>>,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self { scale: 1.0, background: palette::BACKGROUND, fonts: Vec::new() }
    }
}

fn font_database(opts: &PngOptions) -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    #[cfg(feature = "system-fonts")]
    db.load_system_fonts();
    let loaded_before = db.len();
    if opts.fonts.is_empty() {
        db.load_font_data(BUNDLED_FONT.to_vec());
    }
    for data in &opts.fonts {
        db.load_font_data(data.clone());
    }
    if db.len() == loaded_before {
        log::warn!("no usable font faces loaded; text labels will be missing");
    }
    // Text is emitted as generic sans-serif; point it at the first loaded face.
    let family = db
        .faces()
        .nth(loaded_before)
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()));
    if let Some(name) = family {
        db.set_sans_serif_family(name);
    }
    db
}

/// Rasterizes an SVG document into PNG bytes.
pub fn render_png(svg: &str, opts: &PngOptions) -> Result<Vec<u8>, ExportError> {
    if !limits::in_scale_bounds(opts.scale) {
        return Err(ExportError::Scale(opts.scale));
    }
    let mut uopts = usvg::Options::default();
    uopts.fontdb = Arc::new(font_database(opts));
    let tree = usvg::Tree::from_str(svg, &uopts).map_err(|e| ExportError::Svg(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * opts.scale).ceil() as u32;
    let height = (size.height() * opts.scale).ceil() as u32;
    let max_side = limits::MAX_CANVAS_SIDE as u32;
    if width > max_side || height > max_side {
        return Err(ExportError::Canvas { width, height });
    }
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ExportError::Canvas { width, height })?;
    let bg = opts.background;
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    resvg::render(&tree, tiny_skia::Transform::from_scale(opts.scale, opts.scale), &mut pixmap.as_mut());

    // Opaque background, so premultiplied and straight RGBA coincide.
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(pixmap.data(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    log::info!("rendered png {}x{} ({} bytes)", width, height, out.len());
    Ok(out)
}

pub fn write_png(path: &Path, svg: &str, opts: &PngOptions) -> Result<(), ExportError> {
    let bytes = render_png(svg, opts)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn non_background_pixels(png: &[u8]) -> usize {
        let bg = palette::BACKGROUND;
        let img = image::load_from_memory(png).unwrap().to_rgba8();
        img.pixels().filter(|p| p.0[..3] != [bg.r, bg.g, bg.b]).count()
    }

    #[test]
    fn renders_minimal_svg() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect width="5" height="5" fill="#ffffff"/></svg>"##;
        let png = render_png(svg, &PngOptions::default()).unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
        // 5x5 rect, allowing for an antialiased fringe
        assert!((25..=36).contains(&non_background_pixels(&png)));
    }

    #[test]
    fn text_is_drawn_with_bundled_font() {
        let empty = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="50" font-family="sans-serif"></svg>"##;
        let labelled = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="50" font-family="sans-serif"><text x="5" y="35" fill="#ffffff" font-size="30">Reactants</text></svg>"##;
        let opts = PngOptions::default();
        let a = render_png(empty, &opts).unwrap();
        let b = render_png(labelled, &opts).unwrap();
        assert_eq!(non_background_pixels(&a), 0);
        assert!(non_background_pixels(&b) > 50, "label pixels missing");
    }

    #[test]
    fn rejects_bad_scale_and_garbage() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"/>"##;
        let opts = PngOptions { scale: 0.0, ..Default::default() };
        assert!(matches!(render_png(svg, &opts), Err(ExportError::Scale(_))));
        assert!(matches!(render_png("not svg", &PngOptions::default()), Err(ExportError::Svg(_))));
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20000" height="10"/>"##;
        assert!(matches!(
            render_png(svg, &PngOptions::default()),
            Err(ExportError::Canvas { width: 20000, .. })
        ));
    }
}
