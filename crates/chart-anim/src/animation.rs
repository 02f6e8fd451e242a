// File: crates/chart-anim/src/animation.rs
// Summary: Per-series animation state and the frame-by-frame state machine that picks between
//          dash reveal, arc-length truncation and structural path interpolation.
// Notes:
// - Queries take `&AnimationStore`. The only mutation of committed state is
//   `AnimationStore::commit`, reached from `PathAnimator::animate` when progress is 1.
// - The store never drops entries on its own; the owner calls `reset`/`reset_all` on
//   remount, data source swap, or when restarting a progress sequence before it finished.

use crate::arc_length::ArcLengthSplitter;
use crate::config::AnimationConfig;
use crate::easing::Easing;
use crate::geometry::{clamp, Point};
use crate::interpolate::{align, interpolate, Alignment, InterpolationContext};
use crate::path::Path;
use crate::series::SeriesKind;
use crate::types::{DashArray, PathFrame, PathRequest, RenderOptions};

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesAnimState {
    pub previous_path_length: f64,
    pub is_initial_render: bool,
    /// Last committed `d`; never an in-flight interpolation.
    pub rendered_path_d: Option<String>,
    /// Last committed options per point, for rectangular kinds.
    pub previous_series_options: Vec<Option<RenderOptions>>,
}

impl Default for SeriesAnimState {
    fn default() -> Self {
        Self { previous_path_length: 0.0, is_initial_render: true, rendered_path_d: None, previous_series_options: Vec::new() }
    }
}

#[derive(Clone, Debug)]
pub struct AnimationStore {
    series: Vec<SeriesAnimState>,
    animation_progress: f64,
    is_first_render: bool,
}

impl Default for AnimationStore {
    fn default() -> Self { Self::new() }
}

impl AnimationStore {
    pub fn new() -> Self {
        Self { series: Vec::new(), animation_progress: 0.0, is_first_render: true }
    }

    pub fn get(&self, index: usize) -> Option<&SeriesAnimState> { self.series.get(index) }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    #[inline]
    pub fn progress(&self) -> f64 { self.animation_progress }

    /// Progress for the current frame, shared by every series. Clamped to [0, 1].
    pub fn set_progress(&mut self, progress: f64) {
        self.animation_progress = if progress.is_nan() { 0.0 } else { clamp(progress, 0.0, 1.0) };
    }

    #[inline]
    pub fn is_complete(&self) -> bool { self.animation_progress >= 1.0 }

    pub fn is_first_render(&self) -> bool { self.is_first_render }

    /// Ends the chart's first render once a frame has reached progress 1.
    pub fn finish_frame(&mut self) {
        if self.is_complete() {
            self.is_first_render = false;
        }
    }

    /// Lazily creates the entry for `index` (and any gap before it).
    pub fn touch(&mut self, index: usize) -> &mut SeriesAnimState {
        if index >= self.series.len() {
            self.series.resize_with(index + 1, SeriesAnimState::default);
        }
        &mut self.series[index]
    }

    /// Records a fully completed animation as the new baseline.
    pub fn commit(&mut self, index: usize, path: impl Into<String>, length: f64) {
        let state = self.touch(index);
        state.rendered_path_d = Some(path.into());
        state.previous_path_length = length;
        state.is_initial_render = false;
    }

    pub fn commit_options(&mut self, index: usize, point: usize, options: RenderOptions) {
        let state = self.touch(index);
        if point >= state.previous_series_options.len() {
            state.previous_series_options.resize(point + 1, None);
        }
        state.previous_series_options[point] = Some(options);
    }

    /// Forget everything about one series; its next frame is an initial render again.
    pub fn reset(&mut self, index: usize) {
        if let Some(state) = self.series.get_mut(index) {
            *state = SeriesAnimState::default();
        }
    }

    pub fn reset_all(&mut self) {
        self.series.clear();
        self.animation_progress = 0.0;
        self.is_first_render = true;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Animation turned off for this call.
    Disabled,
    /// No committed baseline yet (or the entry was reset).
    InitialGrowth,
    /// Same command letters as the baseline.
    Steady,
    PointsAdded,
    PointsRemoved,
    /// Same command count, different letters.
    Reshaped,
}

/// Drives path-based series (line, spline, step-line, area) frame by frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathAnimator {
    pub dash_reveal: bool,
    pub splitter: ArcLengthSplitter,
}

impl PathAnimator {
    pub fn new(config: &AnimationConfig) -> Self {
        Self { dash_reveal: config.dash_reveal, splitter: ArcLengthSplitter::new(config.splitter()) }
    }

    /// Which branch this frame takes for `req`, relative to the committed baseline.
    pub fn classify(&self, store: &AnimationStore, req: &PathRequest<'_>) -> AnimationPhase {
        if !req.enable_animation {
            return AnimationPhase::Disabled;
        }
        let Some(baseline) = committed_baseline(store, req.index) else {
            return AnimationPhase::InitialGrowth;
        };
        match align(&Path::parse(baseline), &Path::parse(&req.options.d)) {
            Alignment::Matched => AnimationPhase::Steady,
            Alignment::PointsAdded => AnimationPhase::PointsAdded,
            Alignment::PointsRemoved => AnimationPhase::PointsRemoved,
            Alignment::Mismatched => AnimationPhase::Reshaped,
        }
    }

    /// Frame parameters for `req` at the store's current progress. Does not touch the store.
    pub fn frame(&self, store: &AnimationStore, req: &PathRequest<'_>) -> PathFrame {
        self.frame_with_length(store, req).0
    }

    /// Computes the frame and, at progress 1 (or with animation off), commits the target
    /// `d` and its length as the series' new baseline.
    pub fn animate(&self, store: &mut AnimationStore, req: &PathRequest<'_>) -> PathFrame {
        store.touch(req.index);
        let (frame, length) = self.frame_with_length(store, req);
        if store.is_complete() || !req.enable_animation {
            log::debug!("series {} committed (length {:.2})", req.index, length);
            store.commit(req.index, req.options.d.clone(), length);
        }
        frame
    }

    fn frame_with_length(&self, store: &AnimationStore, req: &PathRequest<'_>) -> (PathFrame, f64) {
        let progress = store.progress();
        let d = req.options.d.as_str();
        let length = self.splitter.path_length_str(d);
        let phase = self.classify(store, req);
        log::trace!("series {} phase {:?} at {:.3}", req.index, phase, progress);

        let frame = match phase {
            AnimationPhase::Disabled => PathFrame::at_rest(req.options),
            AnimationPhase::InitialGrowth => self.initial_growth(req, length, progress),
            AnimationPhase::PointsAdded if !req.kind.morphs_path() => {
                // grow only the appended tail; the existing part keeps its full dash
                let previous = store.get(req.index).map_or(0.0, |s| s.previous_path_length);
                PathFrame {
                    stroke_dasharray: DashArray::Length(length),
                    stroke_dashoffset: (length - previous).max(0.0) * (1.0 - progress),
                    interpolated_d: None,
                }
            }
            AnimationPhase::Steady
            | AnimationPhase::PointsAdded
            | AnimationPhase::PointsRemoved
            | AnimationPhase::Reshaped => {
                let baseline = committed_baseline(store, req.index);
                if baseline == Some(d) {
                    PathFrame::at_rest(req.options)
                } else {
                    let ctx = InterpolationContext { legend_clicked: req.legend_clicked, kind: req.kind };
                    PathFrame { interpolated_d: Some(interpolate(baseline, Some(d), progress, &ctx)), ..PathFrame::at_rest(req.options) }
                }
            }
        };
        (frame, length)
    }

    fn initial_growth(&self, req: &PathRequest<'_>, length: f64, progress: f64) -> PathFrame {
        let suppressed = req.visible.iter().any(|v| v.legend_clicked || v.skip_marker);
        if self.dash_reveal && req.options.has_dash_pattern() && !suppressed {
            return PathFrame {
                stroke_dasharray: DashArray::Pattern(req.options.dash_array.clone()),
                stroke_dashoffset: 0.0,
                interpolated_d: Some(self.splitter.truncate_str(&req.options.d, progress)),
            };
        }
        PathFrame { stroke_dasharray: DashArray::Length(length), stroke_dashoffset: length * (1.0 - progress), interpolated_d: None }
    }
}

fn committed_baseline(store: &AnimationStore, index: usize) -> Option<&str> {
    store.get(index).filter(|s| !s.is_initial_render).and_then(|s| s.rendered_path_d.as_deref())
}

/// Scale about an origin, as applied to a rectangle while it grows in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl ScaleTransform {
    /// SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        format!(
            "translate({} {}) scale({} {}) translate({} {})",
            self.origin_x, self.origin_y, self.scale_x, self.scale_y, -self.origin_x, -self.origin_y
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RectFrame {
    pub transform: Option<ScaleTransform>,
    pub interpolated_d: Option<String>,
}

/// Bounding box (min, max) over the coordinates of `M`, `L`, `Q` and `C` commands.
pub fn rect_bounds(path: &Path) -> Option<(Point, Point)> {
    let mut bounds: Option<(Point, Point)> = None;
    for cmd in &path.commands {
        let pairs = match cmd.upper() {
            'M' | 'L' => 1,
            'Q' => 2,
            'C' => 3,
            _ => 0,
        };
        for i in 0..pairs {
            let Some(p) = cmd.point_at(i) else { continue };
            bounds = Some(match bounds {
                None => (p, p),
                Some((lo, hi)) => (Point::new(lo.x.min(p.x), lo.y.min(p.y)), Point::new(hi.x.max(p.x), hi.y.max(p.y))),
            });
        }
    }
    bounds
}

/// Reduced animator for rectangular kinds (columns grow vertically, bars horizontally).
/// Other kinds get an empty frame. Shares the commit rule of `PathAnimator`: options are
/// recorded only at progress 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct RectAnimator;

impl RectAnimator {
    pub fn frame(&self, store: &AnimationStore, index: usize, point: usize, options: &RenderOptions, kind: SeriesKind, enable_animation: bool) -> RectFrame {
        if !enable_animation {
            return RectFrame::default();
        }
        if !kind.is_rect() {
            log::debug!("series {index}: {kind:?} is not rectangular; drawn without rect animation");
            return RectFrame::default();
        }
        let progress = store.progress();
        let previous = store
            .get(index)
            .and_then(|s| s.previous_series_options.get(point))
            .and_then(Option::as_ref);

        match previous {
            None => {
                let Some((lo, hi)) = rect_bounds(&Path::parse(&options.d)) else { return RectFrame::default() };
                let t = Easing::Linear.evaluate(progress);
                let transform = if matches!(kind, SeriesKind::Bar) {
                    ScaleTransform { scale_x: t, scale_y: 1.0, origin_x: lo.x, origin_y: (lo.y + hi.y) * 0.5 }
                } else {
                    ScaleTransform { scale_x: 1.0, scale_y: t, origin_x: (lo.x + hi.x) * 0.5, origin_y: hi.y }
                };
                RectFrame { transform: Some(transform), interpolated_d: None }
            }
            Some(prev) if prev.d != options.d => {
                let ctx = InterpolationContext::new(kind);
                RectFrame { transform: None, interpolated_d: Some(interpolate(Some(&prev.d), Some(&options.d), progress, &ctx)) }
            }
            Some(_) => RectFrame::default(),
        }
    }

    pub fn animate(&self, store: &mut AnimationStore, index: usize, point: usize, options: &RenderOptions, kind: SeriesKind, enable_animation: bool) -> RectFrame {
        let frame = self.frame(store, index, point, options, kind, enable_animation);
        if kind.is_rect() && (store.is_complete() || !enable_animation) {
            store.commit_options(index, point, options.clone());
        }
        frame
    }
}
