// File: crates/freechart-core/src/config.rs
// Summary: Graph configuration (chart kind, manual scale, render options, series styles) and colors.
// Notes:
// - Configs are value objects. A render pass reads one; changing it means
//   building a new one.
// - JSON field names follow the host boundary (camelCase, `type` for the kind).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scale::Bounds;
use crate::types::{HEIGHT, WIDTH};

/// 8-bit RGBA color, written as `#rrggbb` (or `#rrggbbaa` when translucent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Series color used when no style is configured for a series.
    pub const DEFAULT_SERIES: Color = Color::rgb(0x21, 0x96, 0xf3);
}

impl FromStr for Color {
    type Err = ConfigError;

    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| bad());
        match hex.len() {
            3 => Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(bad()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_string() }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Value series as connected polylines over their sample index.
    #[default]
    Line,
    /// Unconnected filled marks.
    Scatter,
    /// Origin-centered connected polylines.
    Quadrant,
    /// Like `Quadrant` with the vertical pixel mapping flipped.
    QuadrantInverted,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] =
        [ChartKind::Line, ChartKind::Scatter, ChartKind::Quadrant, ChartKind::QuadrantInverted];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Quadrant => "quadrant",
            ChartKind::QuadrantInverted => "quadrant-inverted",
        }
    }

    /// Quadrant kinds center the origin.
    pub fn is_quadrant(self) -> bool {
        matches!(self, ChartKind::Quadrant | ChartKind::QuadrantInverted)
    }

    pub fn inverts_y(self) -> bool { self == ChartKind::QuadrantInverted }
}

impl FromStr for ChartKind {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownChartKind(s.to_string()))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// Manual bounds plus the autoscale switch.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub auto_scale: bool,
}

impl ScaleConfig {
    pub fn manual(bounds: Bounds) -> Self {
        Self { x_min: bounds.x_min, x_max: bounds.x_max, y_min: bounds.y_min, y_max: bounds.y_max, auto_scale: false }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds { x_min: self.x_min, x_max: self.x_max, y_min: self.y_min, y_max: self.y_max }
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0, auto_scale: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub grid_color: Color,
    pub axis_color: Color,
    pub show_grid: bool,
    pub show_axes: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background_color: Color::rgb(0xff, 0xff, 0xff),
            grid_color: Color::rgb(0xe0, 0xe0, 0xe0),
            axis_color: Color::rgb(0x33, 0x33, 0x33),
            show_grid: true,
            show_axes: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesStyle {
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub visible: bool,
}

impl SeriesStyle {
    pub fn new(color: Color) -> Self {
        Self { color, label: None, visible: true }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Default for SeriesStyle {
    fn default() -> Self { Self::new(Color::DEFAULT_SERIES) }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub scale: ScaleConfig,
    pub render: RenderConfig,
    pub series: Vec<SeriesStyle>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Line,
            scale: ScaleConfig::default(),
            render: RenderConfig::default(),
            series: vec![SeriesStyle::default().with_label("Series 1")],
        }
    }
}

impl GraphConfig {
    /// Read a config from JSON; omitted fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_scale(mut self, scale: ScaleConfig) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.render.width = width;
        self.render.height = height;
        self
    }

    /// Style for series `index`, if one is configured.
    pub fn series_style(&self, index: usize) -> Option<&SeriesStyle> {
        self.series.get(index)
    }
}
