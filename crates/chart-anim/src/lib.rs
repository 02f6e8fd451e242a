// File: crates/chart-anim/src/lib.rs
// Summary: Core library entry point; exports the path model, spline engine, interpolation,
//          arc-length splitting and the per-series animation state machine.

pub mod adjust;
pub mod animation;
pub mod arc_length;
pub mod axis;
pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod path;
pub mod series;
pub mod spline;
pub mod types;

pub use adjust::{adjuster_for, PathAdjuster};
pub use animation::{AnimationPhase, AnimationStore, PathAnimator, RectAnimator, RectFrame, ScaleTransform, SeriesAnimState};
pub use arc_length::{ArcLengthSplitter, LengthTable, SplitterConfig};
pub use axis::{DateTimeInterval, XValueType};
pub use config::AnimationConfig;
pub use easing::Easing;
pub use error::{AnimError, Result};
pub use geometry::{ControlPoints, Point};
pub use interpolate::{align, interpolate, Alignment, InterpolationContext};
pub use path::{Operand, Path, PathCommand};
pub use series::{DataPoint, Series, SeriesKind, StepPosition};
pub use spline::{coefficients, Coefficient, SplineOptions, SplineType};
pub use types::{DashArray, PathFrame, PathRequest, RenderOptions, VisibleSeries};
