// File: crates/chart-anim/src/easing.rs
// Summary: Progress easing curves used by path interpolation.

use crate::series::SeriesKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Slow start, fast end (`t²`).
    #[default]
    QuadraticIn,
}

impl Easing {
    /// Input is clamped to [0, 1].
    #[inline]
    pub fn evaluate(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
        }
    }

    /// Quadratic for every morph except a spline re-shown from the legend, which
    /// runs linearly so the toggled curve does not snap at the end.
    pub fn for_morph(kind: SeriesKind, legend_clicked: bool) -> Self {
        if legend_clicked && kind.is_spline() { Easing::Linear } else { Easing::QuadraticIn }
    }
}
