// File: crates/freechart-skia/src/lib.rs
// Summary: Skia CPU raster backend; paints freechart frames and exports RGBA8 pixels or PNG.

use anyhow::{anyhow, Context, Result};
use log::debug;
use skia_safe as skia;

use freechart_core::geometry::Px;
use freechart_core::{paint, Color, Dataset, Frame, GraphConfig, Surface};

mod text;

pub use text::TextShaper;

/// Backend switches that are not part of the graph config.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Axis scale labels; off gives font-independent pixels for snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self { Self { draw_labels: true } }
}

#[inline]
pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// `Surface` over a borrowed Skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    text: Option<&'a TextShaper>,
}

impl<'a> SkiaSurface<'a> {
    /// `text: None` skips every label.
    pub fn new(canvas: &'a skia::Canvas, text: Option<&'a TextShaper>) -> Self {
        Self { canvas, text }
    }

    fn stroke(color: Color, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(to_skia(color));
        paint
    }
}

impl Surface for SkiaSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.canvas.clear(to_skia(color));
    }

    fn line(&mut self, from: Px, to: Px, color: Color, width: f32) {
        self.canvas.draw_line(from, to, &Self::stroke(color, width));
    }

    fn polyline(&mut self, points: &[Px], color: Color, width: f32) {
        let Some((&first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        self.canvas.draw_path(&path, &Self::stroke(color, width));
    }

    fn fill_circle(&mut self, center: Px, radius: f32, color: Color) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_skia(color));
        self.canvas.draw_circle(center, radius, &fill);
    }

    fn text(&mut self, text: &str, at: Px, size: f32, color: Color) {
        if let Some(shaper) = self.text {
            shaper.draw_baseline(self.canvas, text, at.0, at.1, size, to_skia(color));
        }
    }
}

fn canvas_size(config: &GraphConfig) -> Result<(i32, i32)> {
    let (w, h) = (config.render.width, config.render.height);
    if w == 0 || h == 0 {
        anyhow::bail!("canvas size must be non-zero, got {w}x{h}");
    }
    Ok((i32::try_from(w)?, i32::try_from(h)?))
}

/// Compute the frame for the config's canvas size and paint it onto `canvas`.
pub fn draw_frame(canvas: &skia::Canvas, dataset: &Dataset, config: &GraphConfig, opts: &RenderOptions) -> Frame {
    let frame = Frame::compute(dataset, config, config.render.width, config.render.height);
    let shaper = opts.draw_labels.then(TextShaper::new);
    let mut surface = SkiaSurface::new(canvas, shaper.as_ref());
    paint(&mut surface, dataset, &frame.scale, config);
    debug!("painted {} series at {:.3} px/unit", dataset.series_count(), frame.scale.x_scale);
    frame
}

/// Render to tightly packed RGBA8 (unpremultiplied).
/// Returns (pixels, width, height, row stride in bytes).
pub fn render_to_rgba8(dataset: &Dataset, config: &GraphConfig, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = canvas_size(config)?;
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let mut surface = skia::surfaces::raster(&info, None, None)
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;

    draw_frame(surface.canvas(), dataset, config, opts);

    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("failed to read back raster pixels");
    }
    Ok((pixels, w as u32, h as u32, stride))
}

/// Render to an in-memory PNG.
pub fn render_to_png_bytes(dataset: &Dataset, config: &GraphConfig, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (w, h) = canvas_size(config)?;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create raster surface"))?;

    draw_frame(surface.canvas(), dataset, config, opts);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file, creating parent directories as needed.
pub fn render_to_png(
    dataset: &Dataset,
    config: &GraphConfig,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(dataset, config, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
