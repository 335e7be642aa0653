// File: crates/freechart-core/src/parse/mod.rs
// Summary: Freeform data parser; turns pasted numeric text into a Dataset with a fixed fallback order.
// Notes:
// - Stages are tried in order, each only when the previous produced nothing:
//   JSON coordinates, bracketed groups, line continuation, one flat sequence.
// - Failures are reported in `ParseResult`, never raised; panics inside a stage
//   are caught at `parse_with` and reported with their message.

pub mod brackets;
pub mod classify;
pub mod clean;
pub mod json;
pub mod lines;
pub mod tokenize;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub use classify::{classify, pair_up, Classifier};

use crate::dataset::{Dataset, Values};
use crate::error::ParseError;

/// Outcome of one parse. `success` is true exactly when `dataset` is set;
/// otherwise `error` holds a non-empty message. `raw_data` is always the
/// untouched input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<Dataset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub raw_data: String,
}

impl ParseResult {
    pub fn ok(dataset: Dataset, raw: &str) -> Self {
        Self { success: true, dataset: Some(dataset), error: None, raw_data: raw.to_string() }
    }

    pub fn failed(err: &ParseError, raw: &str) -> Self {
        let mut message = err.to_string();
        if message.is_empty() {
            message = "Unknown parsing error".to_string();
        }
        Self { success: false, dataset: None, error: Some(message), raw_data: raw.to_string() }
    }

    pub fn into_result(self) -> Result<Dataset, String> {
        match (self.dataset, self.error) {
            (Some(dataset), _) => Ok(dataset),
            (None, Some(error)) => Err(error),
            (None, None) => Err("Unknown parsing error".to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub classifier: Classifier,
}

/// Parse with the default options.
pub fn parse(raw: &str) -> ParseResult {
    parse_with(raw, &ParseOptions::default())
}

pub fn parse_with(raw: &str, options: &ParseOptions) -> ParseResult {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| extract_dataset(raw, options)))
        .unwrap_or_else(|payload| {
            let message = panic_message(payload.as_ref());
            warn!("parser panicked: {message}");
            Err(ParseError::Unexpected(message))
        });
    match outcome {
        Ok(dataset) => ParseResult::ok(dataset, raw),
        Err(err) => {
            debug!("parse failed: {err}");
            ParseResult::failed(&err, raw)
        }
    }
}

/// The parsing pipeline proper, with failures as `ParseError`.
pub fn extract_dataset(raw: &str, options: &ParseOptions) -> Result<Dataset, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if let Some(dataset) = json::dataset_from_json(trimmed) {
        return Ok(dataset);
    }

    let cleaned = clean::clean(trimmed);
    if cleaned.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let arrays = numeric_arrays(&cleaned).ok_or(ParseError::NoNumericData)?;
    let dataset = classify(arrays, options.classifier);
    debug!("classified as {} with {} series", dataset.data_type(), dataset.series_count());
    Ok(dataset)
}

type Stage = fn(&str) -> Option<Vec<Values>>;

const STAGES: [(&str, Stage); 3] = [
    ("bracketed groups", brackets::extract_groups),
    ("line continuation", lines::split_series),
    ("flat sequence", tokenize::flat_sequence),
];

/// Number arrays from cleaned text: bracketed groups, else the line
/// continuation rule, else the whole text as one sequence.
pub fn numeric_arrays(cleaned: &str) -> Option<Vec<Values>> {
    STAGES.iter().find_map(|(name, stage)| {
        let arrays = stage(cleaned)?;
        debug!("{name}: {} array(s)", arrays.len());
        Some(arrays)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown parsing error".to_string()
    }
}
