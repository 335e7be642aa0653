// File: crates/freechart-core/src/parse/brackets.rs
// Summary: Array literal extractor; pulls `[...]` / `(...)` numeric groups out of text.

use std::sync::OnceLock;

use regex::Regex;

use super::tokenize::numbers;
use crate::dataset::Values;

fn numeric_group() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\[(]\s*([0-9+\-.,\s]+?)\s*[\])]").expect("group pattern"))
}

/// Every bracketed group holding only digits, signs, dots, commas and
/// whitespace, in order of appearance. Groups without numbers are skipped;
/// `None` when nothing matched.
pub fn extract_groups(text: &str) -> Option<Vec<Values>> {
    let groups: Vec<Values> = numeric_group()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|inner| numbers(inner.as_str()))
        .filter(|values| !values.is_empty())
        .collect();
    if groups.is_empty() { None } else { Some(groups) }
}
