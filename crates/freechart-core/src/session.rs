// File: crates/freechart-core/src/session.rs
// Summary: Host-owned chart session; remembers the last dataset, config and canvas size between renders.

use log::debug;

use crate::config::GraphConfig;
use crate::dataset::Dataset;
use crate::paint::{paint, Surface};
use crate::parse::{parse_with, ParseOptions, ParseResult};
use crate::scale::{compute_bounds, compute_scale, Bounds, Scale};

/// Bounds and scale for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub bounds: Bounds,
    pub scale: Scale,
}

impl Frame {
    pub fn compute(dataset: &Dataset, config: &GraphConfig, width: u32, height: u32) -> Self {
        let bounds = compute_bounds(dataset, config);
        let scale = compute_scale(&bounds, width, height, config);
        Self { bounds, scale }
    }
}

/// Live chart state owned by a host (editor panel, window, CLI run).
///
/// The core functions stay pure; this object only holds their latest inputs.
/// Frames are recomputed on every call. After `destroy` the session ignores
/// updates and renders nothing.
#[derive(Clone, Debug)]
pub struct ChartSession {
    dataset: Option<Dataset>,
    config: GraphConfig,
    width: u32,
    height: u32,
    options: ParseOptions,
    destroyed: bool,
}

impl ChartSession {
    /// Canvas size starts at the config's render size.
    pub fn new(config: GraphConfig) -> Self {
        let (width, height) = (config.render.width, config.render.height);
        Self { dataset: None, config, width, height, options: ParseOptions::default(), destroyed: false }
    }

    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn dataset(&self) -> Option<&Dataset> { self.dataset.as_ref() }
    pub fn config(&self) -> &GraphConfig { &self.config }
    pub fn size(&self) -> (u32, u32) { (self.width, self.height) }
    pub fn is_destroyed(&self) -> bool { self.destroyed }

    /// Parse `raw` and, on success, make it the current dataset. A failed parse
    /// leaves the previous dataset on screen.
    pub fn load_text(&mut self, raw: &str) -> ParseResult {
        let result = parse_with(raw, &self.options);
        if let Some(dataset) = &result.dataset {
            self.update(dataset.clone());
        }
        result
    }

    pub fn update(&mut self, dataset: Dataset) {
        if self.destroyed { return; }
        debug!("session dataset: {} with {} series", dataset.data_type(), dataset.series_count());
        self.dataset = Some(dataset);
    }

    pub fn set_config(&mut self, config: GraphConfig) {
        if self.destroyed { return; }
        self.config = config;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.destroyed { return; }
        self.width = width;
        self.height = height;
    }

    pub fn destroy(&mut self) {
        self.dataset = None;
        self.destroyed = true;
    }

    /// Bounds and scale for the current inputs, when there is a dataset.
    pub fn frame(&self) -> Option<Frame> {
        if self.destroyed { return None; }
        let dataset = self.dataset.as_ref()?;
        Some(Frame::compute(dataset, &self.config, self.width, self.height))
    }

    /// Paint the current dataset. Returns false when there is nothing to draw.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> bool {
        let (Some(dataset), Some(frame)) = (self.dataset.as_ref(), self.frame()) else {
            return false;
        };
        paint(surface, dataset, &frame.scale, &self.config);
        true
    }
}
