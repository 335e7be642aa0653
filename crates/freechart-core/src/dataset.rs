// File: crates/freechart-core/src/dataset.rs
// Summary: Dataset model: scalar value series or (x, y) point series, never mixed.

use serde::{Deserialize, Serialize};

/// One scalar series; the sample index is its X coordinate.
pub type Values = Vec<f64>;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Parsed chart data. Series order is display order; an empty series list is
/// valid and renders nothing.
///
/// Serialized with a `dataType` tag: `{"dataType":"values","values":[[..]]}` or
/// `{"dataType":"points","points":[[{"x":..,"y":..}]]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "lowercase")]
pub enum Dataset {
    Values { values: Vec<Values> },
    Points { points: Vec<Vec<Point>> },
}

impl Dataset {
    pub fn values(values: Vec<Values>) -> Self {
        Dataset::Values { values }
    }

    pub fn points(points: Vec<Vec<Point>>) -> Self {
        Dataset::Points { points }
    }

    /// `"values"` or `"points"`.
    pub fn data_type(&self) -> &'static str {
        match self {
            Dataset::Values { .. } => "values",
            Dataset::Points { .. } => "points",
        }
    }

    pub fn series_count(&self) -> usize {
        match self {
            Dataset::Values { values } => values.len(),
            Dataset::Points { points } => points.len(),
        }
    }

    /// Every series as (x, y) pairs; value series use the sample index as x.
    pub fn xy_series(&self) -> Vec<Vec<(f64, f64)>> {
        match self {
            Dataset::Values { values } => values
                .iter()
                .map(|s| s.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect())
                .collect(),
            Dataset::Points { points } => points
                .iter()
                .map(|s| s.iter().map(|p| (p.x, p.y)).collect())
                .collect(),
        }
    }
}

impl Default for Dataset {
    fn default() -> Self { Dataset::Values { values: Vec::new() } }
}
