// File: crates/freechart-core/src/serialize.rs
// Summary: Dataset -> canonical editable text, one bracketed line per series.

use crate::dataset::Dataset;

/// `[v1, v2, ...]` per value series; `[x1, y1, x2, y2, ...]` per point series;
/// lines joined by `\n`. The parser reads this text back to an equal dataset
/// for value series and for multi-series single points.
pub fn to_text(dataset: &Dataset) -> String {
    let lines: Vec<String> = match dataset {
        Dataset::Values { values } => values.iter().map(|s| bracket(s.iter().copied())).collect(),
        Dataset::Points { points } => points
            .iter()
            .map(|s| bracket(s.iter().flat_map(|p| [p.x, p.y])))
            .collect(),
    };
    lines.join("\n")
}

fn bracket(numbers: impl Iterator<Item = f64>) -> String {
    let parts: Vec<String> = numbers.map(format_number).collect();
    format!("[{}]", parts.join(", "))
}

/// Shortest decimal form without a fixed precision: `1`, `2.5`, `0.1`.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        "0".to_string() // also folds -0
    } else if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        format!("{v}")
    }
}
