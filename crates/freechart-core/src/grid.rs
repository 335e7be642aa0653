// File: crates/freechart-core/src/grid.rs
// Summary: Simple grid layout helpers.

use crate::types::GRID_DIVISIONS;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Grid line positions across `[min, max]`: `GRID_DIVISIONS + 1` evenly spaced values.
pub fn grid_lines(min: f64, max: f64) -> Vec<f64> {
    linspace(min, max, GRID_DIVISIONS + 1)
}
