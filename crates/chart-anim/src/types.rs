// File: crates/chart-anim/src/types.rs
// Summary: Shared types crossing the core boundary: render options in, frame parameters out.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::series::SeriesKind;

/// Per-series (or per-point, for rectangular kinds) drawing attributes produced by the host.
/// Read-only to this crate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub id: String,
    pub d: String,
    pub dash_array: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl RenderOptions {
    pub fn new(id: impl Into<String>, d: impl Into<String>) -> Self {
        Self { id: id.into(), d: d.into(), stroke_width: 1.0, opacity: 1.0, ..Self::default() }
    }

    pub fn with_dash_array(mut self, dash_array: impl Into<String>) -> Self {
        self.dash_array = dash_array.into();
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = width;
        self
    }

    /// True when the dash pattern has at least one non-zero entry.
    pub fn has_dash_pattern(&self) -> bool {
        let trimmed = self.dash_array.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return false;
        }
        trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter_map(|t| t.parse::<f64>().ok())
            .any(|v| v > 0.0)
    }
}

/// `stroke-dasharray` value: a single length (reveal) or the series' own pattern string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DashArray {
    Length(f64),
    Pattern(String),
}

impl fmt::Display for DashArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashArray::Length(v) => write!(f, "{v}"),
            DashArray::Pattern(p) => f.write_str(p),
        }
    }
}

/// Output for one series in one frame. When `interpolated_d` is set the drawing layer
/// uses it in place of `RenderOptions::d`.
#[derive(Clone, Debug, PartialEq)]
pub struct PathFrame {
    pub stroke_dasharray: DashArray,
    pub stroke_dashoffset: f64,
    pub interpolated_d: Option<String>,
}

impl PathFrame {
    /// The series' own dash settings with the target `d`.
    pub fn at_rest(options: &RenderOptions) -> Self {
        Self { stroke_dasharray: DashArray::Pattern(options.dash_array.clone()), stroke_dashoffset: 0.0, interpolated_d: None }
    }

    /// The `d` the drawing layer should use.
    pub fn effective_d<'a>(&'a self, options: &'a RenderOptions) -> &'a str {
        self.interpolated_d.as_deref().unwrap_or(&options.d)
    }
}

/// A series currently visible in the chart, with the flags that affect reveal animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleSeries {
    pub kind: SeriesKind,
    pub legend_clicked: bool,
    pub skip_marker: bool,
}

impl VisibleSeries {
    pub const fn new(kind: SeriesKind) -> Self {
        Self { kind, legend_clicked: false, skip_marker: false }
    }
}

/// Everything the animator needs for one series in one frame.
#[derive(Clone, Copy, Debug)]
pub struct PathRequest<'a> {
    pub options: &'a RenderOptions,
    pub index: usize,
    pub enable_animation: bool,
    pub kind: SeriesKind,
    pub legend_clicked: bool,
    pub visible: &'a [VisibleSeries],
}

impl<'a> PathRequest<'a> {
    pub fn new(options: &'a RenderOptions, index: usize, kind: SeriesKind) -> Self {
        Self { options, index, enable_animation: true, kind, legend_clicked: false, visible: &[] }
    }

    pub fn animated(mut self, enable: bool) -> Self {
        self.enable_animation = enable;
        self
    }

    pub fn legend_clicked(mut self, clicked: bool) -> Self {
        self.legend_clicked = clicked;
        self
    }

    pub fn visible(mut self, visible: &'a [VisibleSeries]) -> Self {
        self.visible = visible;
        self
    }
}
