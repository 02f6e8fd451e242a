// File: crates/chart-render-skia/tests/stroke_style.rs
// Purpose: Stroke resolution from render options and animation frames (backend independent).

use chart_anim::{DashArray, PathFrame, RenderOptions};
use chart_render_skia::{parse_dash_intervals, parse_hex_color, Rgba, StrokeStyle};

#[test]
fn hex_colours() {
    assert_eq!(parse_hex_color("#40a0ff"), Some(Rgba::new(0x40, 0xa0, 0xff, 255)));
    assert_eq!(parse_hex_color("#fff"), Some(Rgba::new(255, 255, 255, 255)));
    assert_eq!(parse_hex_color(" #00000080 "), Some(Rgba::new(0, 0, 0, 0x80)));
    assert_eq!(parse_hex_color("red"), None);
    assert_eq!(parse_hex_color("#12345"), None);
    assert_eq!(parse_hex_color("#zzzzzz"), None);
}

#[test]
fn dash_intervals() {
    assert_eq!(parse_dash_intervals("4 2"), vec![4.0, 2.0]);
    assert_eq!(parse_dash_intervals("5,3,2"), vec![5.0, 3.0, 2.0, 5.0, 3.0, 2.0]);
    assert!(parse_dash_intervals("").is_empty());
    assert!(parse_dash_intervals("none").is_empty());
    assert!(parse_dash_intervals("0 0").is_empty());
    assert!(parse_dash_intervals("4 -1").is_empty());
    assert!(parse_dash_intervals("4 wide").is_empty());
}

#[test]
fn reveal_frame_becomes_single_dash() {
    let opts = RenderOptions::new("s0", "M 0 0 L 3 4").with_stroke("#ff0000", 2.0);
    let frame = PathFrame { stroke_dasharray: DashArray::Length(5.0), stroke_dashoffset: 2.5, interpolated_d: None };
    let style = StrokeStyle::resolve(&opts, &frame);
    assert_eq!(style.intervals, vec![5.0, 5.0]);
    assert_eq!(style.phase, 2.5);
    assert_eq!(style.color, Rgba::new(255, 0, 0, 255));
    assert_eq!(style.width, 2.0);
    assert_eq!(style.d, "M 0 0 L 3 4");
}

#[test]
fn interpolated_path_replaces_target() {
    let opts = RenderOptions::new("s0", "M 0 0 L 3 4").with_dash_array("4 2");
    let frame = PathFrame { interpolated_d: Some("M 0 0 L 1.5 2".into()), ..PathFrame::at_rest(&opts) };
    let style = StrokeStyle::resolve(&opts, &frame);
    assert_eq!(style.d, "M 0 0 L 1.5 2");
    assert_eq!(style.intervals, vec![4.0, 2.0]);
    assert_eq!(style.color, Rgba::BLACK);
}

#[test]
fn solid_series_at_rest_is_undashed() {
    let opts = RenderOptions::new("s0", "M 0 0 L 3 4");
    let style = StrokeStyle::resolve(&opts, &PathFrame::at_rest(&opts));
    assert!(!style.is_dashed());
    assert_eq!(style.opacity, 1.0);
}
