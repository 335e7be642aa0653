// File: crates/freechart-core/src/parse/classify.rs
// Summary: Dataset type classifier; decides values vs points from extracted number arrays.

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Point, Values};

/// Longest array the `ShortEvenArrays` rule still reads as coordinate pairs.
pub const SHORT_ARRAY_LIMIT: usize = 10;

/// Rule used to tell coordinate pairs from scalar samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classifier {
    /// Several arrays that are all exactly two long are points, one series per
    /// array. Everything else, including any single array, is values.
    #[default]
    ExactPairs,
    /// Arrays that are all even length and at most `SHORT_ARRAY_LIMIT` long are
    /// paired into points, one series per array. A single array qualifies too.
    ShortEvenArrays,
}

/// Turn extracted arrays into a dataset. Pure: equal input, equal output.
pub fn classify(arrays: Vec<Values>, classifier: Classifier) -> Dataset {
    let as_points = match classifier {
        Classifier::ExactPairs => arrays.len() > 1 && arrays.iter().all(|a| a.len() == 2),
        Classifier::ShortEvenArrays => {
            !arrays.is_empty()
                && arrays
                    .iter()
                    .all(|a| !a.is_empty() && a.len() % 2 == 0 && a.len() <= SHORT_ARRAY_LIMIT)
        }
    };

    if as_points {
        Dataset::points(arrays.iter().map(|a| pair_up(a)).collect())
    } else {
        Dataset::values(arrays)
    }
}

/// Read a flat array as `x, y, x, y, ...`.
///
/// An odd trailing element repeats the previous y; a lone element gets y = 0.
/// `[a0, a1, a2, a3, a4]` becomes `(a0,a1) (a2,a3) (a4,a3)`.
pub fn pair_up(numbers: &[f64]) -> Vec<Point> {
    numbers
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let y = match pair.get(1) {
                Some(&y) => y,
                None if i > 0 => numbers[2 * i - 1],
                None => 0.0,
            };
            Point::new(pair[0], y)
        })
        .collect()
}
