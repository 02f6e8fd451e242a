// File: crates/chart-anim/src/arc_length.rs
// Summary: Path and cubic arc length, and truncation of a path at a fraction of its length
//          (dash-accurate reveal on first paint).
// Notes:
// - Cubic lengths are chord sums over a fixed number of Bernstein samples; the cut point
//   inside a cubic is found by fixed-step bisection on t, then split with De Casteljau.
// - M, L, C and Z carry length (relative forms resolved against the pen). Each implicit
//   coordinate group of a multi-pair M/L/C is its own segment. Other commands move the pen
//   and are kept verbatim but add no length.

use crate::config::{DEFAULT_BISECTION_ITERATIONS, DEFAULT_LENGTH_SAMPLES};
use crate::geometry::{clamp, Point};
use crate::path::{Path, PathCommand};

pub type Cubic = [Point; 4];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitterConfig {
    pub length_samples: usize,
    pub bisection_iterations: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self { length_samples: DEFAULT_LENGTH_SAMPLES, bisection_iterations: DEFAULT_BISECTION_ITERATIONS }
    }
}

/// Point on a cubic Bézier at `t` (Bernstein form).
#[inline]
pub fn cubic_point(c: &Cubic, t: f64) -> Point {
    let mt = 1.0 - t;
    let (b0, b1, b2, b3) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
    Point::new(
        b0 * c[0].x + b1 * c[1].x + b2 * c[2].x + b3 * c[3].x,
        b0 * c[0].y + b1 * c[1].y + b2 * c[2].y + b3 * c[3].y,
    )
}

/// Chord-sampled length of the cubic over `[0, t_end]`.
pub fn cubic_length(c: &Cubic, t_end: f64, samples: usize) -> f64 {
    let samples = samples.max(1);
    let mut prev = c[0];
    let mut len = 0.0;
    for i in 1..=samples {
        let q = cubic_point(c, t_end * i as f64 / samples as f64);
        len += prev.distance(q);
        prev = q;
    }
    len
}

/// De Casteljau split at `t`; the first half covers `[0, t]`, the second `[t, 1]`.
pub fn split_cubic(c: &Cubic, t: f64) -> (Cubic, Cubic) {
    let p01 = c[0].lerp(c[1], t);
    let p12 = c[1].lerp(c[2], t);
    let p23 = c[2].lerp(c[3], t);
    let p012 = p01.lerp(p12, t);
    let p123 = p12.lerp(p23, t);
    let p0123 = p012.lerp(p123, t);
    ([c[0], p01, p012, p0123], [p0123, p123, p23, c[3]])
}

#[derive(Clone, Copy, Debug)]
enum SegmentKind {
    Line(Point, Point),
    Cubic(Cubic),
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    command: usize,
    /// Index of the coordinate group inside the command (implicit repeats of `M`/`L`/`C`).
    group: usize,
    kind: SegmentKind,
    start: f64,
    length: f64,
}

impl SegmentKind {
    /// Operands per coordinate group.
    const fn stride(&self) -> usize {
        match self {
            SegmentKind::Line(..) => 2,
            SegmentKind::Cubic(_) => 6,
        }
    }
}

/// Cumulative length table over the drawable segments of a path.
#[derive(Clone, Debug, Default)]
pub struct LengthTable {
    segments: Vec<Segment>,
    total: f64,
}

impl LengthTable {
    pub fn build(path: &Path, samples: usize) -> Self {
        let mut segments = Vec::new();
        let mut acc = 0.0;
        let mut pen = Point::default();
        let mut subpath_start = pen;
        let mut push = |command: usize, group: usize, kind: SegmentKind, acc: &mut f64| {
            let length = match kind {
                SegmentKind::Line(a, b) => a.distance(b),
                SegmentKind::Cubic(c) => cubic_length(&c, 1.0, samples),
            };
            segments.push(Segment { command, group, kind, start: *acc, length });
            *acc += length;
        };

        for (i, cmd) in path.commands.iter().enumerate() {
            let rel = cmd.is_relative();
            let resolve = |pen: Point, p: Point| if rel { Point::new(pen.x + p.x, pen.y + p.y) } else { p };
            match cmd.upper() {
                // extra pairs after a move are implicit line-tos
                'M' | 'L' => {
                    for k in 0..cmd.params.len() / 2 {
                        let Some(p) = cmd.point_at(k) else { break };
                        let q = resolve(pen, p);
                        if cmd.upper() == 'M' && k == 0 {
                            subpath_start = q;
                        } else {
                            push(i, k, SegmentKind::Line(pen, q), &mut acc);
                        }
                        pen = q;
                    }
                }
                'C' => {
                    for k in 0..cmd.params.len() / 6 {
                        let (Some(c1), Some(c2), Some(p)) = (cmd.point_at(3 * k), cmd.point_at(3 * k + 1), cmd.point_at(3 * k + 2))
                        else {
                            break;
                        };
                        let c = [pen, resolve(pen, c1), resolve(pen, c2), resolve(pen, p)];
                        push(i, k, SegmentKind::Cubic(c), &mut acc);
                        pen = c[3];
                    }
                }
                'Z' => {
                    push(i, 0, SegmentKind::Line(pen, subpath_start), &mut acc);
                    pen = subpath_start;
                }
                'H' => {
                    for x in cmd.params.iter().filter_map(|o| o.as_num()) {
                        pen.x = if rel { pen.x + x } else { x };
                    }
                }
                'V' => {
                    for y in cmd.params.iter().filter_map(|o| o.as_num()) {
                        pen.y = if rel { pen.y + y } else { y };
                    }
                }
                _ => {
                    if let Some(p) = cmd.end_point() {
                        pen = resolve(pen, p);
                    }
                }
            }
        }
        Self { segments, total: acc }
    }

    #[inline]
    pub fn total(&self) -> f64 { self.total }

    #[inline]
    pub fn len(&self) -> usize { self.segments.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// Cumulative length at the end of each segment.
    pub fn cumulative(&self) -> Vec<f64> {
        self.segments.iter().map(|s| s.start + s.length).collect()
    }

    fn locate(&self, target: f64) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|s| s.length > 0.0 && s.start + s.length >= target)
            .or_else(|| self.segments.last())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ArcLengthSplitter {
    pub config: SplitterConfig,
}

impl ArcLengthSplitter {
    pub const fn new(config: SplitterConfig) -> Self { Self { config } }

    pub fn table(&self, path: &Path) -> LengthTable {
        LengthTable::build(path, self.config.length_samples)
    }

    pub fn path_length(&self, path: &Path) -> f64 { self.table(path).total() }

    pub fn path_length_str(&self, d: &str) -> f64 { self.path_length(&Path::parse(d)) }

    /// Parameter `t` whose partial length along `c` best matches `remaining`.
    pub fn bisect(&self, c: &Cubic, remaining: f64) -> f64 {
        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..self.config.bisection_iterations.max(1) {
            let mid = 0.5 * (lo + hi);
            if cubic_length(c, mid, self.config.length_samples) < remaining {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }

    /// Prefix of `path` whose length is `total · progress`. `progress ≥ 1` returns the whole path.
    pub fn truncate(&self, path: &Path, progress: f64) -> Path {
        let progress = if progress.is_nan() { 0.0 } else { clamp(progress, 0.0, 1.0) };
        if progress >= 1.0 || path.is_empty() {
            return path.clone();
        }
        let table = self.table(path);
        if table.total() <= 0.0 {
            return path.clone();
        }
        let target = table.total() * progress;
        if target <= 0.0 {
            let lead = path
                .commands
                .iter()
                .take_while(|c| c.upper() == 'M')
                .map(|c| PathCommand { code: c.code, params: c.params.iter().take(2).cloned().collect() })
                .collect();
            return Path { commands: lead };
        }
        let Some(seg) = table.locate(target) else { return path.clone() };
        let cmd = &path.commands[seg.command];
        let remaining = (target - seg.start).max(0.0);

        let mut commands: Vec<PathCommand> = path.commands[..seg.command].to_vec();
        if seg.group > 0 {
            // groups of the same command drawn before the cut
            let kept = (seg.group * seg.kind.stride()).min(cmd.params.len());
            commands.push(PathCommand { code: cmd.code, params: cmd.params[..kept].to_vec() });
        }
        match seg.kind {
            SegmentKind::Line(a, b) => {
                let ratio = if seg.length > 0.0 { clamp(remaining / seg.length, 0.0, 1.0) } else { 0.0 };
                let p = a.lerp(b, ratio);
                commands.push(if cmd.is_relative() {
                    PathCommand::new('l', [p.x - a.x, p.y - a.y])
                } else {
                    PathCommand::line_to(p)
                });
            }
            SegmentKind::Cubic(c) => {
                let t = self.bisect(&c, remaining);
                let (first, _) = split_cubic(&c, t);
                commands.push(if cmd.is_relative() {
                    let o = c[0];
                    PathCommand::new(
                        'c',
                        [first[1].x - o.x, first[1].y - o.y, first[2].x - o.x, first[2].y - o.y, first[3].x - o.x, first[3].y - o.y],
                    )
                } else {
                    PathCommand::cubic_to(first[1], first[2], first[3])
                });
            }
        }
        log::trace!("truncated at {:.3}/{:.3} inside command {} group {}", target, table.total(), seg.command, seg.group);
        Path { commands }
    }

    pub fn truncate_str(&self, d: &str, progress: f64) -> String {
        self.truncate(&Path::parse(d), progress).serialize()
    }
}
