// File: crates/chart-anim/tests/arc_length.rs
// Purpose: Path length tables, cubic bisection and truncation at a fraction of the length.

use chart_anim::arc_length::{cubic_length, cubic_point, split_cubic, Cubic};
use chart_anim::{ArcLengthSplitter, Path, Point, SplitterConfig};

fn splitter() -> ArcLengthSplitter {
    ArcLengthSplitter::default()
}

fn hi_res_length(c: &Cubic) -> f64 {
    cubic_length(c, 1.0, 20_000)
}

#[test]
fn polyline_length() {
    let s = splitter();
    assert_eq!(s.path_length_str("M 0 0 L 3 4 L 3 10"), 11.0);
    assert_eq!(s.path_length_str("M 0 0 L 3 0 L 3 4 Z"), 12.0);
    assert_eq!(s.path_length_str("m 0 0 l 3 4 l 0 6"), 11.0);
    assert_eq!(s.path_length_str(""), 0.0);
}

#[test]
fn truncate_line_segments() {
    let s = splitter();
    assert_eq!(s.truncate_str("M 0 0 L 3 4 L 3 10", 0.5), "M 0 0 L 3 4 L 3 4.5");
    assert_eq!(s.truncate_str("m 0 0 l 3 4", 0.5), "m 0 0 l 1.5 2");
}

#[test]
fn truncate_bounds() {
    let s = splitter();
    let d = "M 0 0 L 3 4 L 3 10";
    assert_eq!(s.truncate_str(d, 1.0), d);
    assert_eq!(s.truncate_str(d, 2.0), d);
    assert_eq!(s.truncate_str(d, 0.0), "M 0 0");
    assert_eq!(s.truncate_str("", 0.5), "");
    // nothing drawable: returned unchanged
    assert_eq!(s.truncate_str("M 1 1", 0.5), "M 1 1");
}

#[test]
fn zero_length_segment_is_skipped() {
    let s = splitter();
    assert_eq!(s.path_length_str("M 1 1 L 1 1 L 4 5"), 5.0);
    assert_eq!(s.truncate_str("M 1 1 L 1 1 L 4 5", 0.5), "M 1 1 L 1 1 L 2.5 3");
}

#[test]
fn truncated_length_is_monotonic() {
    let s = splitter();
    let d = "M 0 0 C 1 3 3 3 4 0 L 8 0 C 9 -2 10 -2 12 0";
    let mut prev = 0.0;
    for i in 0..=20 {
        let p = i as f64 / 20.0;
        let len = s.path_length(&s.truncate(&Path::parse(d), p));
        assert!(len + 1e-9 >= prev, "length shrank at {p}: {len} < {prev}");
        prev = len;
    }
    assert!((prev - s.path_length_str(d)).abs() < 1e-9);
}

#[test]
fn dashed_cubic_reveal_is_length_accurate() {
    let c: Cubic = [Point::new(0.0, 0.0), Point::new(1.0, 3.0), Point::new(3.0, 3.0), Point::new(4.0, 0.0)];
    let truncated = splitter().truncate_str("M 0 0 C 1 3 3 3 4 0", 0.3);
    let end = Path::parse(&truncated).last_end_point().expect("truncated cubic has an end");

    // walk the curve at high resolution up to the sample closest to the cut point
    let n = 20_000;
    let mut walked = 0.0;
    let mut best = (f64::MAX, 0.0);
    let mut prev = c[0];
    for i in 1..=n {
        let q = cubic_point(&c, i as f64 / n as f64);
        walked += prev.distance(q);
        prev = q;
        let d = q.distance(end);
        if d < best.0 {
            best = (d, walked);
        }
    }
    let expected = 0.3 * hi_res_length(&c);
    assert!((best.1 - expected).abs() / expected < 0.01, "walked {} vs {}", best.1, expected);
}

#[test]
fn de_casteljau_halves_agree_with_curve() {
    let c: Cubic = [Point::new(0.0, 0.0), Point::new(1.0, 3.0), Point::new(3.0, 3.0), Point::new(4.0, 0.0)];
    let t = 0.37;
    let (first, second) = split_cubic(&c, t);
    assert!(first[3].approx_eq(cubic_point(&c, t), 1e-12));
    assert_eq!(first[3], second[0]);
    assert!(first[0] == c[0] && second[3] == c[3]);
    let sum = hi_res_length(&first) + hi_res_length(&second);
    assert!((sum - hi_res_length(&c)).abs() < 1e-6);
}

#[test]
fn bisection_finds_requested_length() {
    let c: Cubic = [Point::new(0.0, 0.0), Point::new(0.0, 5.0), Point::new(5.0, 5.0), Point::new(5.0, 0.0)];
    let s = ArcLengthSplitter::new(SplitterConfig { length_samples: 64, bisection_iterations: 20 });
    let total = cubic_length(&c, 1.0, 64);
    let t = s.bisect(&c, total * 0.5);
    // symmetric curve: half the length sits at t = 0.5
    assert!((t - 0.5).abs() < 1e-3, "t = {t}");
}

#[test]
fn length_table_accumulates() {
    let table = splitter().table(&Path::parse("M 0 0 L 3 4 H 10 L 10 10"));
    assert_eq!(table.len(), 2);
    assert_eq!(table.cumulative(), vec![5.0, 11.0]);
    assert_eq!(table.total(), 11.0);
}

#[test]
fn implicit_line_pairs_are_measured_one_by_one() {
    let s = splitter();
    let d = "M 0 0 L 10 0 20 0 L 20 10";
    assert_eq!(s.path_length_str(d), 30.0);
    assert_eq!(s.table(&Path::parse(d)).cumulative(), vec![10.0, 20.0, 30.0]);

    // cut inside the second pair: the first pair stays, the rest is dropped
    assert_eq!(s.truncate_str(d, 0.5), "M 0 0 L 10 0 L 15 0");
    // cut after the multi-pair command: it is kept whole
    assert_eq!(s.truncate_str(d, 0.8), "M 0 0 L 10 0 20 0 L 20 4");
}

#[test]
fn truncated_multi_pair_path_is_a_prefix() {
    let s = splitter();
    let d = Path::parse("M 0 0 L 10 0 20 0 L 20 10");
    for i in 0..=10 {
        let p = i as f64 / 10.0;
        let len = s.path_length(&s.truncate(&d, p));
        assert!((len - 30.0 * p).abs() < 1e-9, "at {p}: {len}");
    }
}

#[test]
fn extra_move_pairs_are_line_segments() {
    let s = splitter();
    let d = "M 0 0 10 0 20 0";
    assert_eq!(s.path_length_str(d), 20.0);
    assert_eq!(s.truncate_str(d, 0.75), "M 0 0 10 0 L 15 0");
    assert_eq!(s.truncate_str(d, 0.0), "M 0 0");
}

#[test]
fn relative_pairs_chain_from_the_pen() {
    let s = splitter();
    let d = "m 0 0 l 10 0 10 0";
    assert_eq!(s.path_length_str(d), 20.0);
    assert_eq!(s.truncate_str(d, 0.75), "m 0 0 l 10 0 l 5 0");
}

#[test]
fn chained_cubics_split_in_the_right_triple() {
    let s = splitter();
    // two straight cubics along the diagonal
    let d = "M 0 0 C 0 0 1 1 1 1 1 1 2 2 2 2";
    let total = s.path_length_str(d);
    assert!((total - 2.0 * 2f64.sqrt()).abs() < 1e-9, "total {total}");

    let cut = s.truncate(&Path::parse(d), 0.75);
    assert_eq!(cut.letters(), vec!['M', 'C', 'C']);
    assert_eq!(cut.commands[1].to_string(), "C 0 0 1 1 1 1");
    let end = cut.last_end_point().expect("cut cubic has an end");
    assert!(end.approx_eq(Point::new(1.5, 1.5), 1e-3), "{end:?}");
}
