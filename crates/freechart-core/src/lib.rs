// File: crates/freechart-core/src/lib.rs
// Summary: Core library entry point; exports the parser, dataset model, scale and painter.

pub mod axis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod paint;
pub mod parse;
pub mod scale;
pub mod serialize;
pub mod session;
pub mod theme;
pub mod types;

pub use config::{ChartKind, Color, GraphConfig, RenderConfig, ScaleConfig, SeriesStyle};
pub use dataset::{Dataset, Point, Values};
pub use error::{ConfigError, ParseError};
pub use paint::{paint, DrawList, DrawOp, Surface};
pub use parse::{parse, parse_with, Classifier, ParseOptions, ParseResult};
pub use scale::{compute_bounds, compute_scale, next_pow2, Bounds, Scale};
pub use serialize::to_text;
pub use session::{ChartSession, Frame};
pub use theme::Theme;
