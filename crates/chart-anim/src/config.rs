// File: crates/chart-anim/src/config.rs
// Summary: Tunable animation constants with TOML load/save.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::arc_length::SplitterConfig;
use crate::error::{AnimError, Result};

/// Chord samples used to estimate a cubic's length.
pub const DEFAULT_LENGTH_SAMPLES: usize = 32;
/// Bisection steps used to locate a target length inside a cubic.
pub const DEFAULT_BISECTION_ITERATIONS: usize = 12;
/// Floor for near-zero denominators in the spline sweep.
pub const DEFAULT_EPSILON: f64 = 1e-10;
/// Cardinal spline tension.
pub const DEFAULT_TENSION: f64 = 0.5;

/// All fields use `#[serde(default)]` so a partial TOML file only overrides what it names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub length_samples: usize,
    pub bisection_iterations: usize,
    pub epsilon: f64,
    pub cardinal_tension: f64,
    /// Allow the arc-length reveal for dashed series on first paint.
    pub dash_reveal: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            length_samples: DEFAULT_LENGTH_SAMPLES,
            bisection_iterations: DEFAULT_BISECTION_ITERATIONS,
            epsilon: DEFAULT_EPSILON,
            cardinal_tension: DEFAULT_TENSION,
            dash_reveal: true,
        }
    }
}

impl AnimationConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.length_samples == 0 {
            return Err(AnimError::InvalidConfig("length_samples must be at least 1".into()));
        }
        if self.bisection_iterations == 0 {
            return Err(AnimError::InvalidConfig("bisection_iterations must be at least 1".into()));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(AnimError::InvalidConfig(format!("epsilon must be a positive number, got {}", self.epsilon)));
        }
        if !(0.0..=1.0).contains(&self.cardinal_tension) {
            return Err(AnimError::InvalidConfig(format!(
                "cardinal_tension must lie in [0, 1], got {}",
                self.cardinal_tension
            )));
        }
        Ok(())
    }

    pub fn splitter(&self) -> SplitterConfig {
        SplitterConfig {
            length_samples: self.length_samples.max(1),
            bisection_iterations: self.bisection_iterations.max(1),
        }
    }
}
