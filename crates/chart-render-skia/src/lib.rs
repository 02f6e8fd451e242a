// File: crates/chart-render-skia/src/lib.rs
// Summary: Resolves a series' render options plus the current animation frame into a concrete
//          stroke (path data, dash intervals, colour). The `skia` feature adds conversion to
//          Skia paths and paints and a draw call.

use chart_anim::{DashArray, PathFrame, RenderOptions};

/// Straight RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba { r: 0, g: 0, b: 0, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(text: &str) -> Option<Rgba> {
    let hex = text.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    match hex.len() {
        3 => Some(Rgba::new(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
        6 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Dash intervals from an SVG-style `stroke-dasharray` string. An odd list is repeated to make
/// it even. Empty when the string is blank, `none`, malformed, negative or all zero.
pub fn parse_dash_intervals(text: &str) -> Vec<f32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Vec::new();
    }
    let parsed: Option<Vec<f32>> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<f32>().ok().filter(|v| v.is_finite() && *v >= 0.0))
        .collect();
    let Some(mut intervals) = parsed else {
        log::debug!("ignoring malformed dash array {text:?}");
        return Vec::new();
    };
    if intervals.iter().all(|v| *v == 0.0) {
        return Vec::new();
    }
    if intervals.len() % 2 == 1 {
        intervals.extend_from_within(..);
    }
    intervals
}

/// Everything a backend needs to stroke one series for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub d: String,
    pub intervals: Vec<f32>,
    pub phase: f32,
    pub color: Rgba,
    pub width: f32,
    pub opacity: f32,
}

impl StrokeStyle {
    pub fn resolve(options: &RenderOptions, frame: &PathFrame) -> Self {
        let intervals = match &frame.stroke_dasharray {
            // a single length L behaves like "L L": one dash and one gap of the full path length
            DashArray::Length(len) if *len > 0.0 => vec![*len as f32, *len as f32],
            DashArray::Length(_) => Vec::new(),
            DashArray::Pattern(p) => parse_dash_intervals(p),
        };
        let color = parse_hex_color(&options.stroke).unwrap_or_else(|| {
            if !options.stroke.is_empty() {
                log::debug!("unsupported stroke colour {:?}; using black", options.stroke);
            }
            Rgba::BLACK
        });
        Self {
            d: frame.effective_d(options).to_string(),
            intervals,
            phase: frame.stroke_dashoffset as f32,
            color,
            width: options.stroke_width.max(0.0) as f32,
            opacity: options.opacity.clamp(0.0, 1.0) as f32,
        }
    }

    #[inline]
    pub fn is_dashed(&self) -> bool { !self.intervals.is_empty() }
}

#[cfg(feature = "skia")]
pub mod skia {
    use chart_anim::{Path, PathFrame, RenderOptions};
    use skia_safe as sk;

    use super::StrokeStyle;

    /// Skia path for parsed path data. Quadratic, cubic, line, move, close and the axis
    /// commands are converted in both cases, including implicit repeated coordinate groups
    /// (extra pairs after a move are line-tos). Anything else is skipped.
    pub fn to_skia_path(path: &Path) -> sk::Path {
        let mut out = sk::Path::new();
        let mut pen = (0.0f32, 0.0f32);
        let mut start = pen;
        for cmd in &path.commands {
            let rel = cmd.is_relative();
            let n = |i: usize| cmd.num(i).map(|v| v as f32);
            // pair `i`, resolved against the pen at the start of its group
            let pt = |origin: (f32, f32), i: usize| -> Option<(f32, f32)> {
                let o = if rel { origin } else { (0.0, 0.0) };
                Some((o.0 + n(2 * i)?, o.1 + n(2 * i + 1)?))
            };
            let pairs = cmd.params.len() / 2;
            match cmd.upper() {
                'M' | 'L' => {
                    for k in 0..pairs {
                        let Some(p) = pt(pen, k) else { break };
                        if cmd.upper() == 'M' && k == 0 {
                            out.move_to(p);
                            start = p;
                        } else {
                            out.line_to(p);
                        }
                        pen = p;
                    }
                }
                'H' => {
                    for k in 0..cmd.params.len() {
                        let Some(x) = n(k) else { break };
                        pen.0 = if rel { pen.0 + x } else { x };
                        out.line_to(pen);
                    }
                }
                'V' => {
                    for k in 0..cmd.params.len() {
                        let Some(y) = n(k) else { break };
                        pen.1 = if rel { pen.1 + y } else { y };
                        out.line_to(pen);
                    }
                }
                'Q' => {
                    for k in 0..pairs / 2 {
                        let (Some(c), Some(p)) = (pt(pen, 2 * k), pt(pen, 2 * k + 1)) else { break };
                        out.quad_to(c, p);
                        pen = p;
                    }
                }
                'C' => {
                    for k in 0..pairs / 3 {
                        let (Some(c1), Some(c2), Some(p)) = (pt(pen, 3 * k), pt(pen, 3 * k + 1), pt(pen, 3 * k + 2)) else { break };
                        out.cubic_to(c1, c2, p);
                        pen = p;
                    }
                }
                'Z' => {
                    out.close();
                    pen = start;
                }
                other => log::trace!("skipping unsupported command {other}"),
            }
        }
        out
    }

    pub fn stroke_paint(style: &StrokeStyle) -> sk::Paint {
        let mut paint = sk::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(sk::paint::Style::Stroke);
        paint.set_stroke_width(style.width);
        let c = style.color;
        paint.set_color(sk::Color::from_argb(c.a, c.r, c.g, c.b));
        paint.set_alpha_f(style.opacity * c.a as f32 / 255.0);
        if style.is_dashed() {
            paint.set_path_effect(sk::PathEffect::dash(&style.intervals, style.phase));
        }
        paint
    }

    /// Strokes one series at its current animation frame.
    pub fn draw_frame(canvas: &sk::Canvas, options: &RenderOptions, frame: &PathFrame) {
        let style = StrokeStyle::resolve(options, frame);
        let path = to_skia_path(&Path::parse(&style.d));
        canvas.draw_path(&path, &stroke_paint(&style));
    }
}
