// File: crates/freechart-core/src/scale.rs
// Summary: Data bounds and the unified, power-of-two normalized data -> pixel scale.
// Notes:
// - The plot area is always a square; one pixels-per-unit factor serves both axes.
// - A Scale is derived fresh for every render. Dataset, config and canvas size
//   can each change independently, so nothing here is cached.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::GraphConfig;
use crate::dataset::Dataset;
use crate::geometry::RectF;
use crate::types::{AUTOSCALE_PADDING, MARGIN};

/// Data-space extent. `x_max >= x_min` and `y_max >= y_min` are expected, and a
/// zero-width axis is a valid input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Zero-size bounds at one point.
    pub const fn at(x: f64, y: f64) -> Self { Self::new(x, x, y, y) }

    pub fn x_range(&self) -> f64 { self.x_max - self.x_min }
    pub fn y_range(&self) -> f64 { self.y_max - self.y_min }

    pub fn include(self, x: f64, y: f64) -> Self {
        Self {
            x_min: self.x_min.min(x),
            x_max: self.x_max.max(x),
            y_min: self.y_min.min(y),
            y_max: self.y_max.max(y),
        }
    }

    /// Grow each axis by `fraction` of its own range on both sides.
    pub fn padded(self, fraction: f64) -> Self {
        let xp = self.x_range() * fraction;
        let yp = self.y_range() * fraction;
        Self::new(self.x_min - xp, self.x_max + xp, self.y_min - yp, self.y_max + yp)
    }

    /// Largest distance of any bound from zero.
    pub fn max_abs(&self) -> f64 {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .into_iter()
            .fold(0.0, |m: f64, b| m.max(b.abs()))
    }
}

/// Normalized bounds plus the pixel mapping of the square plot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Pixels per data unit on X; always equal to `y_scale`.
    pub x_scale: f64,
    pub y_scale: f64,
    /// Pixel position of the plot square's left edge.
    pub offset_x: f64,
    /// Pixel position of the plot square's top edge.
    pub offset_y: f64,
    /// Side of the plot square in pixels.
    pub plot_size: f64,
}

impl Scale {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }

    #[inline]
    pub fn x_to_px(&self, x: f64) -> f32 {
        (self.offset_x + (x - self.x_min) * self.x_scale) as f32
    }

    /// Standard mapping puts `y_min` at the bottom of the square; `inverted`
    /// puts it at the top.
    #[inline]
    pub fn y_to_px(&self, y: f64, inverted: bool) -> f32 {
        let from_min = (y - self.y_min) * self.y_scale;
        if inverted {
            (self.offset_y + from_min) as f32
        } else {
            (self.offset_y + self.plot_size - from_min) as f32
        }
    }

    #[inline]
    pub fn x_from_px(&self, px: f32) -> f64 {
        self.x_min + (px as f64 - self.offset_x) / self.x_scale
    }

    #[inline]
    pub fn y_from_px(&self, py: f32, inverted: bool) -> f64 {
        let from_min = if inverted {
            py as f64 - self.offset_y
        } else {
            self.offset_y + self.plot_size - py as f64
        };
        self.y_min + from_min / self.y_scale
    }

    pub fn plot_rect(&self) -> RectF {
        RectF::from_ltwh(
            self.offset_x as f32,
            self.offset_y as f32,
            self.plot_size as f32,
            self.plot_size as f32,
        )
    }
}

/// Manual bounds when autoscale is off (returned verbatim, even degenerate).
/// Otherwise the extent of every finite sample (value series use the index as
/// x), padded by 10% of each axis' own range. A zero range gets no padding.
/// Without any finite sample the manual bounds are used.
pub fn compute_bounds(dataset: &Dataset, config: &GraphConfig) -> Bounds {
    if !config.scale.auto_scale {
        return config.scale.bounds();
    }

    let extent = dataset
        .xy_series()
        .into_iter()
        .flatten()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .fold(None, |acc: Option<Bounds>, (x, y)| match acc {
            None => Some(Bounds::at(x, y)),
            Some(b) => Some(b.include(x, y)),
        });

    match extent {
        Some(b) => b.padded(AUTOSCALE_PADDING),
        None => {
            trace!("no finite samples; using manual bounds");
            config.scale.bounds()
        }
    }
}

/// Map `bounds` onto a square plot inside a `width` x `height` canvas.
///
/// Quadrant kinds get `[-r/2, r/2]` on both axes, where `r` is the next power
/// of two covering both ranges and twice the largest absolute bound, so the
/// origin sits exactly in the middle. Other kinds get the next power of two of
/// the larger range, centered on each axis' own midpoint.
pub fn compute_scale(bounds: &Bounds, width: u32, height: u32, config: &GraphConfig) -> Scale {
    let available_w = (width as f64 - 2.0 * MARGIN).max(1.0);
    let available_h = (height as f64 - 2.0 * MARGIN).max(1.0);
    let plot_size = available_w.min(available_h);

    let widest = bounds.x_range().max(bounds.y_range());
    let (range, cx, cy) = if config.kind.is_quadrant() {
        (next_pow2(widest.max(2.0 * bounds.max_abs())), 0.0, 0.0)
    } else {
        let cx = finite_or_zero((bounds.x_min + bounds.x_max) / 2.0);
        let cy = finite_or_zero((bounds.y_min + bounds.y_max) / 2.0);
        (next_pow2(widest), cx, cy)
    };
    let half = range / 2.0;

    // One factor for both axes.
    let unit = plot_size / range;
    let scale = Scale {
        x_min: cx - half,
        x_max: cx + half,
        y_min: cy - half,
        y_max: cy + half,
        x_scale: unit,
        y_scale: unit,
        offset_x: MARGIN + (available_w - plot_size) / 2.0,
        offset_y: MARGIN + (available_h - plot_size) / 2.0,
        plot_size,
    };
    trace!("scale for {}: range {range}, {unit} px/unit", config.kind);
    scale
}

/// Smallest power of two at or above `|v|`. Zero and non-finite input map to 1.
pub fn next_pow2(v: f64) -> f64 {
    let a = v.abs();
    if a == 0.0 || !a.is_finite() {
        return 1.0;
    }
    let mut p = 2f64.powi(a.log2().ceil() as i32);
    // log2 may be off by one ulp around exact powers.
    if p < a {
        p *= 2.0;
    } else if p / 2.0 >= a {
        p /= 2.0;
    }
    if p.is_finite() && p > 0.0 { p } else { a }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
