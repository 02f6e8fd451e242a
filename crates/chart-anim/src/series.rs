// File: crates/chart-anim/src/series.rs
// Summary: Series model for line, spline, step-line, area and rectangular data, plus the path
//          builders that turn visible data points into the target `d` for each frame.
// Notes:
// - Hidden points break line-like series into separate `M`-started runs.
// - Spline coefficients are computed per visible run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adjust::{adjuster_for, PathAdjuster};
use crate::geometry::Point;
use crate::path::{Path, PathCommand};
use crate::spline::{coefficients, segment_control_points, Coefficient, SplineOptions, SplineType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepPosition {
    #[default]
    Left,
    Center,
    Right,
}

impl StepPosition {
    /// Commands emitted per point after the leading move.
    pub const fn group_len(self) -> usize {
        match self {
            StepPosition::Left | StepPosition::Right => 2,
            StepPosition::Center => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesKind {
    Line,
    Spline(SplineType),
    StepLine(StepPosition),
    Area,
    Column,
    Bar,
    Scatter,
}

impl SeriesKind {
    #[inline]
    pub fn is_spline(self) -> bool { matches!(self, SeriesKind::Spline(_)) }

    /// Kinds animated by morphing their path between snapshots.
    #[inline]
    pub fn morphs_path(self) -> bool {
        matches!(self, SeriesKind::Line | SeriesKind::Spline(_) | SeriesKind::StepLine(_))
    }

    /// Kinds drawn as one rectangle per point.
    #[inline]
    pub fn is_rect(self) -> bool { matches!(self, SeriesKind::Column | SeriesKind::Bar) }

    pub fn adjuster(self) -> Box<dyn PathAdjuster> { adjuster_for(self) }

    /// Target path for this kind. Rectangular and scatter kinds have no series-level path.
    pub fn build_path(self, points: &[DataPoint], spline: &SplineOptions) -> Path {
        match self {
            SeriesKind::Line => line_path(points),
            SeriesKind::Spline(ty) => spline_path(points, &SplineOptions { spline: ty, ..*spline }),
            SeriesKind::StepLine(pos) => step_path(points, pos),
            SeriesKind::Area => area_path(points, 0.0),
            SeriesKind::Column | SeriesKind::Bar | SeriesKind::Scatter => Path::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x_value: f64,
    pub y_value: f64,
    pub visible: bool,
}

impl DataPoint {
    pub const fn new(x_value: f64, y_value: f64) -> Self {
        Self { x_value, y_value, visible: true }
    }

    pub const fn hidden(x_value: f64, y_value: f64) -> Self {
        Self { x_value, y_value, visible: false }
    }

    /// Date-time x values are carried as epoch milliseconds.
    pub fn from_datetime(at: DateTime<Utc>, y_value: f64) -> Self {
        Self::new(at.timestamp_millis() as f64, y_value)
    }

    #[inline]
    pub fn point(&self) -> Point { Point::new(self.x_value, self.y_value) }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub kind: SeriesKind,
    pub points: Vec<DataPoint>,
    pub spline: SplineOptions,
    pub baseline: Option<f64>, // used by Area (origin)
}

impl Series {
    pub fn new(kind: SeriesKind) -> Self {
        Self { kind, points: Vec::new(), spline: SplineOptions::default(), baseline: None }
    }

    pub fn with_data(kind: SeriesKind, data: Vec<(f64, f64)>) -> Self {
        let points = data.into_iter().map(|(x, y)| DataPoint::new(x, y)).collect();
        Self { kind, points, spline: SplineOptions::default(), baseline: None }
    }

    pub fn with_spline_options(mut self, spline: SplineOptions) -> Self {
        self.spline = spline;
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 { self.baseline.unwrap_or(0.0) }

    pub fn push(&mut self, point: DataPoint) { self.points.push(point); }

    pub fn remove(&mut self, index: usize) -> Option<DataPoint> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    pub fn path(&self) -> Path {
        match self.kind {
            SeriesKind::Area => area_path(&self.points, self.baseline_value()),
            kind => kind.build_path(&self.points, &self.spline),
        }
    }
}

/// Maximal runs of consecutive visible points.
pub fn visible_runs(points: &[DataPoint]) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut run: Vec<Point> = Vec::new();
    for p in points {
        if p.visible {
            run.push(p.point());
        } else if !run.is_empty() {
            runs.push(std::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

pub fn line_path(points: &[DataPoint]) -> Path {
    let mut path = Path::new();
    for run in visible_runs(points) {
        path.push(PathCommand::move_to(run[0]));
        for &p in &run[1..] {
            path.push(PathCommand::line_to(p));
        }
    }
    path
}

pub fn spline_path(points: &[DataPoint], opts: &SplineOptions) -> Path {
    let mut path = Path::new();
    for run in visible_runs(points) {
        let coefs = coefficients(&run, opts);
        path.commands.extend(spline_path_with(&run, &coefs, opts).commands);
    }
    path
}

/// Spline through `points` using precomputed coefficients, which may be shorter than
/// the point list when they lag a data mutation.
pub fn spline_path_with(points: &[Point], coefs: &[Coefficient], opts: &SplineOptions) -> Path {
    let mut path = Path::new();
    let Some(&first) = points.first() else { return path };
    path.push(PathCommand::move_to(first));
    for (cp, w) in segment_control_points(points, coefs, opts).iter().zip(points.windows(2)) {
        path.push(PathCommand::cubic_to(cp.control_point1, cp.control_point2, w[1]));
    }
    path
}

pub fn step_path(points: &[DataPoint], position: StepPosition) -> Path {
    let mut path = Path::new();
    for run in visible_runs(points) {
        path.commands.extend(step_run(&run, position).commands);
    }
    path
}

pub(crate) fn step_run(run: &[Point], position: StepPosition) -> Path {
    let mut path = Path::new();
    let Some(&first) = run.first() else { return path };
    path.push(PathCommand::move_to(first));
    for w in run.windows(2) {
        let (q, p) = (w[0], w[1]);
        match position {
            StepPosition::Left => {
                path.push(PathCommand::line_to(Point::new(q.x, p.y)));
            }
            StepPosition::Right => {
                path.push(PathCommand::line_to(Point::new(p.x, q.y)));
            }
            StepPosition::Center => {
                let xm = (q.x + p.x) * 0.5;
                path.push(PathCommand::line_to(Point::new(xm, q.y)));
                path.push(PathCommand::line_to(Point::new(xm, p.y)));
            }
        }
        path.push(PathCommand::line_to(p));
    }
    path
}

/// Data vertices of a single-run step path: the move target followed by the last
/// endpoint of every per-point command group.
pub fn step_vertices(path: &Path, position: StepPosition) -> Vec<Point> {
    let group = position.group_len();
    let mut out = Vec::new();
    let Some(first) = path.commands.first().and_then(PathCommand::end_point) else { return out };
    out.push(first);
    for chunk in path.commands[1..].chunks(group) {
        if let Some(p) = chunk.last().and_then(PathCommand::end_point) {
            out.push(p);
        }
    }
    out
}

/// Closed area down to `baseline` per visible run.
pub fn area_path(points: &[DataPoint], baseline: f64) -> Path {
    let mut path = Path::new();
    for run in visible_runs(points) {
        let (first, last) = (run[0], run[run.len() - 1]);
        path.push(PathCommand::move_to(Point::new(first.x, baseline)));
        for &p in &run {
            path.push(PathCommand::line_to(p));
        }
        path.push(PathCommand::line_to(Point::new(last.x, baseline)));
        path.push(PathCommand::new('Z', []));
    }
    path
}

/// Axis-aligned rectangle outline for a column/bar point.
pub fn rect_path(left: f64, top: f64, width: f64, height: f64) -> Path {
    let (right, bottom) = (left + width, top + height);
    Path::from(vec![
        PathCommand::move_to(Point::new(left, top)),
        PathCommand::line_to(Point::new(right, top)),
        PathCommand::line_to(Point::new(right, bottom)),
        PathCommand::line_to(Point::new(left, bottom)),
        PathCommand::new('Z', []),
    ])
}
