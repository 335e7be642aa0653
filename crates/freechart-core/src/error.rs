// File: crates/freechart-core/src/error.rs
// Summary: Error taxonomy for parsing and configuration loading.

use thiserror::Error;

/// Reasons the freeform parser gives up. Reported through `ParseResult::error`,
/// never raised to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("No data found in input text")]
    EmptyInput,

    #[error("No numeric data found")]
    NoNumericData,

    /// JSON-shaped text rejected by both the strict and the relaxed reader.
    /// The parser recovers from this by running the text heuristics.
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error("{0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color '{0}' (expected #rgb, #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    #[error("unknown chart type '{0}' (expected line, scatter, quadrant or quadrant-inverted)")]
    UnknownChartKind(String),
}
