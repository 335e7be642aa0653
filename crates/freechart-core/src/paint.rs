// File: crates/freechart-core/src/paint.rs
// Summary: Canvas painter; draws grid, axes, scale labels and series marks onto an abstract Surface.
// Notes:
// - Painting is a pure function of (dataset, scale, config); the surface is
//   cleared first, so nothing from a previous frame survives.
// - `QuadrantInverted` flips every vertical mapping: grid, axes, labels, data.

use crate::axis::Axis;
use crate::config::{ChartKind, Color, GraphConfig};
use crate::dataset::Dataset;
use crate::geometry::Px;
use crate::grid::grid_lines;
use crate::scale::Scale;
use crate::types::{AXIS_STROKE, GRID_STROKE, LABEL_SIZE, SCATTER_RADIUS, SERIES_STROKE};

/// Caller-owned 2D drawing target. Coordinates are pixels, origin top-left.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn line(&mut self, from: Px, to: Px, color: Color, width: f32);
    /// Connected stroke through `points` in order.
    fn polyline(&mut self, points: &[Px], color: Color, width: f32);
    fn fill_circle(&mut self, center: Px, radius: f32, color: Color);
    /// Text with its baseline starting at `at`.
    fn text(&mut self, text: &str, at: Px, size: f32, color: Color);
}

/// Draw one full frame.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, dataset: &Dataset, scale: &Scale, config: &GraphConfig) {
    let render = &config.render;
    let inverted = config.kind.inverts_y();

    surface.clear(render.background_color);
    if render.show_grid {
        draw_grid(surface, scale, inverted, render.grid_color);
    }
    if render.show_axes {
        draw_axes(surface, scale, inverted, render.axis_color);
    }
    draw_series(surface, dataset, scale, config);
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, scale: &Scale, inverted: bool, color: Color) {
    let rect = scale.plot_rect();
    for x in grid_lines(scale.x_min, scale.x_max) {
        let px = scale.x_to_px(x);
        surface.line((px, rect.top), (px, rect.bottom), color, GRID_STROKE);
    }
    for y in grid_lines(scale.y_min, scale.y_max) {
        let py = scale.y_to_px(y, inverted);
        surface.line((rect.left, py), (rect.right, py), color, GRID_STROKE);
    }
}

fn draw_axes<S: Surface + ?Sized>(surface: &mut S, scale: &Scale, inverted: bool, color: Color) {
    let axes = [Axis::x_axis(scale, inverted), Axis::y_axis(scale, inverted)];
    for axis in axes.iter().flatten() {
        surface.line(axis.from, axis.to, color, AXIS_STROKE);
        surface.text(&axis.label, axis.label_at, LABEL_SIZE, color);
    }
}

fn draw_series<S: Surface + ?Sized>(surface: &mut S, dataset: &Dataset, scale: &Scale, config: &GraphConfig) {
    let inverted = config.kind.inverts_y();
    for (index, series) in dataset.xy_series().iter().enumerate() {
        let style = config.series_style(index);
        if style.is_some_and(|s| !s.visible) {
            continue;
        }
        let color = style.map_or(Color::DEFAULT_SERIES, |s| s.color);

        let pixels: Vec<Px> = series
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&(x, y)| (scale.x_to_px(x), scale.y_to_px(y, inverted)))
            .collect();
        if pixels.is_empty() {
            continue;
        }

        match config.kind {
            ChartKind::Scatter => {
                for &p in &pixels {
                    surface.fill_circle(p, SCATTER_RADIUS, color);
                }
            }
            ChartKind::Line | ChartKind::Quadrant | ChartKind::QuadrantInverted => {
                surface.polyline(&pixels, color, SERIES_STROKE);
            }
        }
    }
}

/// One recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Line { from: Px, to: Px, color: Color, width: f32 },
    Polyline { points: Vec<Px>, color: Color, width: f32 },
    Circle { center: Px, radius: f32, color: Color },
    Text { text: String, at: Px, size: f32, color: Color },
}

/// Surface that records commands instead of rasterizing them, for hosts that
/// replay frames elsewhere and for inspecting output.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self { Self::default() }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        // A clear wipes the frame.
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }
    fn line(&mut self, from: Px, to: Px, color: Color, width: f32) {
        self.ops.push(DrawOp::Line { from, to, color, width });
    }
    fn polyline(&mut self, points: &[Px], color: Color, width: f32) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), color, width });
    }
    fn fill_circle(&mut self, center: Px, radius: f32, color: Color) {
        self.ops.push(DrawOp::Circle { center, radius, color });
    }
    fn text(&mut self, text: &str, at: Px, size: f32, color: Color) {
        self.ops.push(DrawOp::Text { text: text.to_string(), at, size, color });
    }
}
