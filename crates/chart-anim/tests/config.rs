// File: crates/chart-anim/tests/config.rs
// Purpose: TOML configuration defaults, partial overrides and validation.

use chart_anim::{AnimError, AnimationConfig, ArcLengthSplitter, SplineOptions, SplineType};

#[test]
fn defaults_match_documented_constants() {
    let cfg = AnimationConfig::default();
    assert_eq!(cfg.length_samples, 32);
    assert_eq!(cfg.bisection_iterations, 12);
    assert_eq!(cfg.epsilon, 1e-10);
    assert_eq!(cfg.cardinal_tension, 0.5);
    assert!(cfg.dash_reveal);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let cfg = AnimationConfig::from_toml_str("cardinal_tension = 0.25\ndash_reveal = false\n").expect("valid config");
    assert_eq!(cfg.cardinal_tension, 0.25);
    assert!(!cfg.dash_reveal);
    assert_eq!(cfg.length_samples, 32);

    let spline = SplineOptions::from_config(SplineType::Cardinal, &cfg);
    assert_eq!(spline.tension, 0.25);
}

#[test]
fn empty_file_is_default() {
    assert_eq!(AnimationConfig::from_toml_str("").expect("empty is fine"), AnimationConfig::default());
}

#[test]
fn invalid_values_are_rejected() {
    for text in ["length_samples = 0", "bisection_iterations = 0", "epsilon = -1.0", "cardinal_tension = 1.5"] {
        let err = AnimationConfig::from_toml_str(text).expect_err(text);
        assert!(matches!(err, AnimError::InvalidConfig(_)), "{text}: {err}");
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = AnimationConfig::from_toml_str("length_samples = \"many\"").expect_err("wrong type");
    assert!(matches!(err, AnimError::Toml(_)));
}

#[test]
fn round_trips_through_toml() {
    let cfg = AnimationConfig { length_samples: 64, bisection_iterations: 20, ..AnimationConfig::default() };
    let text = cfg.to_toml_string().expect("serializes");
    assert_eq!(AnimationConfig::from_toml_str(&text).expect("parses"), cfg);
}

#[test]
fn load_reports_missing_file() {
    let err = AnimationConfig::load("definitely/not/here.toml").expect_err("missing file");
    assert!(matches!(err, AnimError::Io(_)));
}

#[test]
fn splitter_takes_sampling_constants() {
    let cfg = AnimationConfig { length_samples: 8, bisection_iterations: 4, ..AnimationConfig::default() };
    let s = ArcLengthSplitter::new(cfg.splitter());
    assert_eq!(s.config.length_samples, 8);
    assert_eq!(s.config.bisection_iterations, 4);
}
