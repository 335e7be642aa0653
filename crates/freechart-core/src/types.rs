// File: crates/freechart-core/src/types.rs
// Summary: Shared constants (canvas defaults, plot margin, stroke sizes).

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 600;

/// Margin reserved on every side of the plot square, in pixels.
/// Leaves room for the axis scale labels.
pub const MARGIN: f64 = 40.0;

/// Fraction of each axis range added on both sides when autoscaling.
pub const AUTOSCALE_PADDING: f64 = 0.1;

/// Number of grid divisions per axis (6 lines).
pub const GRID_DIVISIONS: usize = 5;

pub const GRID_STROKE: f32 = 1.0;
pub const AXIS_STROKE: f32 = 2.0;
pub const SERIES_STROKE: f32 = 2.0;
/// Radius of a scatter mark.
pub const SCATTER_RADIUS: f32 = 3.0;
/// Axis label font size.
pub const LABEL_SIZE: f32 = 12.0;
