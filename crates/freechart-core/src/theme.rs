// File: crates/freechart-core/src/theme.rs
// Summary: Color presets for chart rendering (background, grid, axis, series palette).

use crate::config::{Color, GraphConfig, SeriesStyle};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis: Color,
    /// Series colors, cycled when there are more series than entries.
    pub palette: &'static [Color],
}

const MATERIAL: &[Color] = &[
    Color::rgb(0x21, 0x96, 0xf3), // blue
    Color::rgb(0xf4, 0x43, 0x36), // red
    Color::rgb(0x4c, 0xaf, 0x50), // green
    Color::rgb(0xff, 0x98, 0x00), // orange
    Color::rgb(0x9c, 0x27, 0xb0), // purple
    Color::rgb(0x00, 0xbc, 0xd4), // cyan
];

const SOLARIZED: &[Color] = &[
    Color::rgb(0x26, 0x8b, 0xd2), // blue
    Color::rgb(0xdc, 0x32, 0x2f), // red
    Color::rgb(0x85, 0x99, 0x00), // green
    Color::rgb(0xcb, 0x4b, 0x16), // orange
    Color::rgb(0x6c, 0x71, 0xc4), // violet
    Color::rgb(0x2a, 0xa1, 0x98), // cyan
];

const HIGH_CONTRAST: &[Color] = &[
    Color::rgb(0x00, 0xff, 0xff),
    Color::rgb(0xff, 0xff, 0x00),
    Color::rgb(0x00, 0xff, 0x00),
    Color::rgb(0xff, 0x00, 0xff),
];

impl Theme {
    /// Matches the default `RenderConfig` colors.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(0xff, 0xff, 0xff),
            grid: Color::rgb(0xe0, 0xe0, 0xe0),
            axis: Color::rgb(0x33, 0x33, 0x33),
            palette: MATERIAL,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(40, 40, 45),
            axis: Color::rgb(180, 180, 190),
            palette: MATERIAL,
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::rgb(0x00, 0x2b, 0x36), // base03
            grid: Color::rgb(0x07, 0x36, 0x42),       // base02
            axis: Color::rgb(0x93, 0xa1, 0xa1),       // base1
            palette: SOLARIZED,
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::rgb(0xfd, 0xf6, 0xe3), // base3
            grid: Color::rgb(0xee, 0xe8, 0xd5),       // base2
            axis: Color::rgb(0x65, 0x7b, 0x83),       // base00
            palette: SOLARIZED,
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::rgb(0x00, 0x00, 0x00),
            grid: Color::rgb(0x22, 0x22, 0x22),
            axis: Color::rgb(0xff, 0xff, 0xff),
            palette: HIGH_CONTRAST,
        }
    }

    pub fn series_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return Color::DEFAULT_SERIES;
        }
        self.palette[index % self.palette.len()]
    }

    /// A copy of `config` in this theme's colors, with at least `series_count`
    /// series styles. Existing labels and visibility are kept.
    pub fn apply(&self, config: &GraphConfig, series_count: usize) -> GraphConfig {
        let mut out = config.clone();
        out.render.background_color = self.background;
        out.render.grid_color = self.grid;
        out.render.axis_color = self.axis;
        for (i, style) in out.series.iter_mut().enumerate() {
            style.color = self.series_color(i);
        }
        for i in out.series.len()..series_count {
            out.series.push(SeriesStyle::new(self.series_color(i)).with_label(format!("Series {}", i + 1)));
        }
        out
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
