// File: crates/freechart-core/src/axis.rs
// Summary: Axis lines through the origin and their scale-span labels.

use crate::geometry::Px;
use crate::scale::Scale;
use crate::serialize::format_number;
use crate::types::LABEL_SIZE;

/// Spans in this range print as plain numbers (when they fit in 3 decimals).
const PLAIN_MIN: f64 = 0.0625;
const PLAIN_MAX: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

/// A visible axis: its pixel segment and the span label at its far end.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub kind: AxisKind,
    pub from: Px,
    pub to: Px,
    pub label: String,
    /// Left end of the label's baseline.
    pub label_at: Px,
}

impl Axis {
    /// Horizontal line at y = 0, when that height lies inside the plot square.
    pub fn x_axis(scale: &Scale, inverted: bool) -> Option<Self> {
        let y = scale.y_to_px(0.0, inverted);
        if !y.is_finite() || !scale.plot_rect().spans_y(y) {
            return None;
        }
        let left = scale.x_to_px(scale.x_min);
        let right = scale.x_to_px(scale.x_max);
        let label = format_span(scale.x_max - scale.x_min);
        let width = label_width(&label);
        Some(Self {
            kind: AxisKind::X,
            from: (left, y),
            to: (right, y),
            label_at: (right - width, y - 4.0),
            label,
        })
    }

    /// Vertical line at x = 0, when that position lies inside the plot square.
    /// The label sits at the `y_max` end, which is the bottom when inverted.
    pub fn y_axis(scale: &Scale, inverted: bool) -> Option<Self> {
        let x = scale.x_to_px(0.0);
        if !x.is_finite() || !scale.plot_rect().spans_x(x) {
            return None;
        }
        let low = scale.y_to_px(scale.y_min, inverted);
        let high = scale.y_to_px(scale.y_max, inverted);
        let label = format_span(scale.y_max - scale.y_min);
        let baseline = if inverted { high - 4.0 } else { high + LABEL_SIZE };
        Some(Self {
            kind: AxisKind::Y,
            from: (x, low),
            to: (x, high),
            label_at: (x + 4.0, baseline),
            label,
        })
    }
}

/// Scale span as a label: `0.125` .. `8` print plainly, other powers of two as
/// `2^<exponent>`, anything else rounded to 3 decimals.
pub fn format_span(span: f64) -> String {
    let a = span.abs();
    if (PLAIN_MIN..=PLAIN_MAX).contains(&a) && (a * 1000.0).fract() == 0.0 {
        return format_number(span);
    }
    if a > 0.0 && a.is_finite() {
        let e = a.log2().round();
        if 2f64.powi(e as i32) == a {
            return format!("2^{}", e as i32);
        }
    }
    let rounded = format!("{span:.3}");
    rounded.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Rough advance width for right-aligning a label.
fn label_width(label: &str) -> f32 {
    label.chars().count() as f32 * LABEL_SIZE * 0.6
}
