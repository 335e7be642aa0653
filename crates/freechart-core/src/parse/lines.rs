// File: crates/freechart-core/src/parse/lines.rs
// Summary: Multi-line series splitter implementing the trailing-comma continuation rule.

use super::tokenize::numbers;
use crate::dataset::Values;

/// Split text into series line by line.
///
/// A line ending in `,` continues the open series onto the next line; any
/// other non-blank line closes it. Numbers still open after the last line form
/// a final series. `None` when no line held a number.
///
/// `"1,2,3,\n4,5"` is one series `[1,2,3,4,5]`; `"1,2,3\n4,5"` is two.
pub fn split_series(text: &str) -> Option<Vec<Values>> {
    let mut series = Vec::new();
    let mut open: Values = Vec::new();

    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        match line.strip_suffix(',') {
            Some(body) => open.extend(numbers(body)),
            None => {
                open.extend(numbers(line));
                if !open.is_empty() {
                    series.push(std::mem::take(&mut open));
                }
            }
        }
    }
    if !open.is_empty() {
        series.push(open);
    }

    if series.is_empty() { None } else { Some(series) }
}
