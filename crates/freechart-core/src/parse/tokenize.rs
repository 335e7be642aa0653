// File: crates/freechart-core/src/parse/tokenize.rs
// Summary: Number tokenizer; splits a fragment on comma/whitespace runs and keeps numeric tokens.

use std::sync::OnceLock;

use regex::Regex;

use crate::dataset::Values;

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[,\s]+").expect("separator pattern"))
}

fn numeric_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("number pattern")
    })
}

/// Read the leading number of a token, ignoring whatever follows it.
/// `"3px"` reads as 3, `"1.5.2"` as 1.5, `"abc"` and `"-"` as nothing.
pub fn leading_number(token: &str) -> Option<f64> {
    let m = numeric_prefix().find(token)?;
    m.as_str().parse::<f64>().ok()
}

/// Split on runs of commas and whitespace (newlines included) and keep every
/// token that starts with a number. Non-numeric tokens are dropped.
pub fn numbers(text: &str) -> Values {
    separators()
        .split(text)
        .filter(|t| !t.is_empty())
        .filter_map(leading_number)
        .collect()
}

/// The whole text as one series, or `None` when it holds no numbers.
pub fn flat_sequence(text: &str) -> Option<Vec<Values>> {
    let values = numbers(text);
    if values.is_empty() { None } else { Some(vec![values]) }
}
