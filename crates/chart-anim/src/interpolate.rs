// File: crates/chart-anim/src/interpolate.rs
// Summary: Interpolated `d` between two path snapshots, padding the shorter one when the
//          command counts differ.
// Notes:
// - Paths that cannot be reconciled fall back to a token-wise lerp of the raw strings, and
//   failing that to a hard switch at progress 0.5.

use crate::easing::Easing;
use crate::geometry::{clamp, lerp};
use crate::path::{tokens, Operand, Path, PathCommand};
use crate::series::SeriesKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterpolationContext {
    pub legend_clicked: bool,
    pub kind: SeriesKind,
}

impl InterpolationContext {
    pub const fn new(kind: SeriesKind) -> Self {
        Self { legend_clicked: false, kind }
    }

    pub const fn legend_clicked(mut self, clicked: bool) -> Self {
        self.legend_clicked = clicked;
        self
    }
}

/// How two snapshots relate structurally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Identical command-letter sequences.
    Matched,
    /// `to` has more commands.
    PointsAdded,
    /// `to` has fewer commands.
    PointsRemoved,
    /// Same count, different letters.
    Mismatched,
}

pub fn align(from: &Path, to: &Path) -> Alignment {
    if from.same_structure(to) {
        Alignment::Matched
    } else if to.len() > from.len() {
        Alignment::PointsAdded
    } else if to.len() < from.len() {
        Alignment::PointsRemoved
    } else {
        Alignment::Mismatched
    }
}

/// Path string for the current frame. A missing side yields the other one (or "").
pub fn interpolate(from: Option<&str>, to: Option<&str>, progress: f64, ctx: &InterpolationContext) -> String {
    match (from, to) {
        (Some(from), Some(to)) => interpolate_str(from, to, progress, ctx),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => String::new(),
    }
}

fn interpolate_str(from: &str, to: &str, progress: f64, ctx: &InterpolationContext) -> String {
    let progress = if progress.is_nan() { 0.0 } else { clamp(progress, 0.0, 1.0) };
    let eased = Easing::for_morph(ctx.kind, ctx.legend_clicked).evaluate(progress);
    let a = Path::parse(from);
    let b = Path::parse(to);

    let alignment = align(&a, &b);
    let padded = match alignment {
        Alignment::Matched => return lerp_paths(&a, &b, eased).serialize(),
        _ if progress >= 1.0 => return to.to_string(),
        Alignment::PointsAdded => ctx.kind.adjuster().pad_start(&a, &b).map(|start| (start, b)),
        Alignment::PointsRemoved => ctx.kind.adjuster().pad_end(&b, &a).map(|end| (a, end)),
        Alignment::Mismatched => None,
    };
    if let Some((start, end)) = padded {
        if start.same_structure(&end) {
            return lerp_paths(&start, &end, eased).serialize();
        }
    }

    log::debug!("{:?} paths not reconcilable for {:?}; using raw fallback", alignment, ctx.kind);
    token_lerp(from, to, eased).unwrap_or_else(|| binary_switch(from, to, progress))
}

/// Element-wise lerp of numeric operands. `to` decides the letters; raw operands and
/// opaque commands are taken from `to` as they are.
pub fn lerp_paths(from: &Path, to: &Path, t: f64) -> Path {
    let commands = from
        .commands
        .iter()
        .zip(&to.commands)
        .map(|(a, b)| {
            if !b.is_known() {
                return b.clone();
            }
            let params = b
                .params
                .iter()
                .enumerate()
                .map(|(i, pb)| match (a.params.get(i), pb) {
                    (Some(Operand::Num(x)), Operand::Num(y)) => Operand::Num(lerp(*x, *y, t)),
                    _ => pb.clone(),
                })
                .collect();
            PathCommand { code: b.code, params }
        })
        .collect();
    Path { commands }
}

/// Degraded mode for irreconcilable paths.
#[inline]
pub fn binary_switch(from: &str, to: &str, progress: f64) -> String {
    if progress < 0.5 { from.to_string() } else { to.to_string() }
}

/// Lerp of the raw token streams, numeric tokens only. `None` when the token counts differ.
pub fn token_lerp(from: &str, to: &str, t: f64) -> Option<String> {
    let a = raw_tokens(from);
    let b = raw_tokens(to);
    if a.len() != b.len() {
        return None;
    }
    let out: Vec<String> = a
        .iter()
        .zip(&b)
        .map(|(x, y)| match (Operand::parse_token(x), Operand::parse_token(y)) {
            (Operand::Num(p), Operand::Num(q)) => lerp(p, q, t).to_string(),
            _ => (*y).to_string(),
        })
        .collect();
    Some(out.join(" "))
}

/// Command letters become their own tokens; operands split on whitespace and commas.
fn raw_tokens(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        if ch.is_ascii_alphabetic() && ch != 'e' && ch != 'E' {
            out.extend(tokens(&text[start..idx]));
            out.push(&text[idx..idx + 1]);
            start = idx + 1;
        }
    }
    out.extend(tokens(&text[start..]));
    out
}
