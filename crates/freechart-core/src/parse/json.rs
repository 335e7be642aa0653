// File: crates/freechart-core/src/parse/json.rs
// Summary: JSON dataset adapter; strict then relaxed (unquoted-key) reading of coordinate literals.

use std::borrow::Cow;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;
use serde_json::{Map, Value};

use crate::dataset::{Dataset, Point};
use crate::error::ParseError;

fn bare_key() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([{,]\s*)([A-Za-z_$][A-Za-z0-9_$]*)(\s*:)").expect("bare key pattern")
    })
}

/// True when the text is wrapped in a matching `[...]` or `{...}` pair.
pub fn looks_like_json(text: &str) -> bool {
    (text.starts_with('[') && text.ends_with(']')) || (text.starts_with('{') && text.ends_with('}'))
}

/// Quote bare object keys: `{x: 1, y: 2}` becomes `{"x": 1, "y": 2}`.
pub fn quote_bare_keys(text: &str) -> Cow<'_, str> {
    bare_key().replace_all(text, r#"${1}"${2}"${3}"#)
}

/// Strict JSON first; on failure retry once with bare keys quoted.
pub fn read_relaxed(text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).or_else(|strict| {
        let quoted = quote_bare_keys(text);
        serde_json::from_str(&quoted).map_err(|_| ParseError::MalformedJson(strict.to_string()))
    })
}

/// Interpret JSON-shaped text as one point series.
///
/// Accepted shapes: an array of `{x, y}` objects (entries without numeric `x`
/// and `y` are skipped), or an object whose `x` and `y` are arrays (non-numeric
/// entries dropped from each, then zipped to the shorter length). Anything else
/// yields `None` so the text heuristics can run.
pub fn dataset_from_json(text: &str) -> Option<Dataset> {
    if !looks_like_json(text) {
        return None;
    }
    let value = match read_relaxed(text) {
        Ok(value) => value,
        Err(err) => {
            debug!("{err}; falling back to text heuristics");
            return None;
        }
    };
    let series = match &value {
        Value::Array(items) => items.iter().filter_map(point_from_entry).collect(),
        Value::Object(map) => zip_axes(map),
        _ => Vec::new(),
    };
    if series.is_empty() {
        debug!("JSON input has no coordinate shape; falling back to text heuristics");
        return None;
    }
    debug!("JSON input read as {} points", series.len());
    Some(Dataset::points(vec![series]))
}

fn point_from_entry(entry: &Value) -> Option<Point> {
    let obj = entry.as_object()?;
    let x = obj.get("x")?.as_f64()?;
    let y = obj.get("y")?.as_f64()?;
    Some(Point::new(x, y))
}

fn zip_axes(map: &Map<String, Value>) -> Vec<Point> {
    let (Some(Value::Array(xs)), Some(Value::Array(ys))) = (map.get("x"), map.get("y")) else {
        return Vec::new();
    };
    let xs = xs.iter().filter_map(Value::as_f64);
    let ys = ys.iter().filter_map(Value::as_f64);
    xs.zip(ys).map(|(x, y)| Point::new(x, y)).collect()
}
