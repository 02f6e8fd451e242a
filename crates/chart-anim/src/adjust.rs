// File: crates/chart-anim/src/adjust.rs
// Summary: Per-series-kind padding that lines up two path snapshots whose command counts differ.

use crate::geometry::Point;
use crate::path::{Path, PathCommand};
use crate::series::{step_run, step_vertices, SeriesKind, StepPosition};

const ENDPOINT_EPS: f64 = 1e-9;

/// Padding policy for one series kind. Both methods return the shorter snapshot grown to the
/// longer one's command count, or `None` when the kind cannot reconcile them.
pub trait PathAdjuster {
    /// Points were added: grow the start snapshot `from` toward `to`.
    fn pad_start(&self, from: &Path, to: &Path) -> Option<Path>;
    /// Points were removed: grow the end snapshot `to` toward `from`.
    fn pad_end(&self, to: &Path, from: &Path) -> Option<Path>;
}

pub fn adjuster_for(kind: SeriesKind) -> Box<dyn PathAdjuster> {
    match kind {
        SeriesKind::Line => Box::new(LineAdjuster),
        SeriesKind::Spline(_) => Box::new(SplineAdjuster),
        SeriesKind::StepLine(position) => Box::new(StepAdjuster { position }),
        SeriesKind::Area | SeriesKind::Column | SeriesKind::Bar | SeriesKind::Scatter => Box::new(GenericAdjuster),
    }
}

pub struct LineAdjuster;

impl PathAdjuster for LineAdjuster {
    fn pad_start(&self, from: &Path, to: &Path) -> Option<Path> { pad_with_lines(from, to) }
    fn pad_end(&self, to: &Path, from: &Path) -> Option<Path> { pad_with_lines(to, from) }
}

pub struct SplineAdjuster;

impl PathAdjuster for SplineAdjuster {
    fn pad_start(&self, from: &Path, to: &Path) -> Option<Path> { pad_with_cubics(from, to) }
    fn pad_end(&self, to: &Path, from: &Path) -> Option<Path> { pad_with_cubics(to, from) }
}

pub struct StepAdjuster {
    pub position: StepPosition,
}

impl StepAdjuster {
    fn pad(&self, shorter: &Path, longer: &Path) -> Option<Path> {
        let missing = longer.len().checked_sub(shorter.len())?;
        let group = self.position.group_len();
        let moves = shorter.commands.iter().filter(|c| c.upper() == 'M').count();
        if moves != 1 || missing % group != 0 {
            return pad_with_lines(shorter, longer);
        }
        let mut vertices = step_vertices(shorter, self.position);
        let last = *vertices.last()?;
        vertices.extend(std::iter::repeat(last).take(missing / group));
        let rebuilt = step_run(&vertices, self.position);
        (rebuilt.len() == longer.len()).then_some(rebuilt)
    }
}

impl PathAdjuster for StepAdjuster {
    fn pad_start(&self, from: &Path, to: &Path) -> Option<Path> { self.pad(from, to) }
    fn pad_end(&self, to: &Path, from: &Path) -> Option<Path> { self.pad(to, from) }
}

/// Area, rectangular and scatter series: no structural padding.
pub struct GenericAdjuster;

impl PathAdjuster for GenericAdjuster {
    fn pad_start(&self, _from: &Path, _to: &Path) -> Option<Path> { None }
    fn pad_end(&self, _to: &Path, _from: &Path) -> Option<Path> { None }
}

/// Appends copies of the shorter path's final point. A slot where the longer path moves
/// stays a move; every other slot becomes a line command.
fn pad_with_lines(shorter: &Path, longer: &Path) -> Option<Path> {
    if shorter.is_empty() || shorter.len() > longer.len() {
        return None;
    }
    let anchor = shorter.last_end_point()?;
    let mut out = shorter.clone();
    for cmd in &longer.commands[shorter.len()..] {
        out.push(anchored(cmd, anchor, 'L'));
    }
    Some(out)
}

/// Appends cubic commands. When the change happened at the tail the padding collapses onto the
/// last endpoint (control points equal to the endpoint); otherwise the last cubic is repeated.
fn pad_with_cubics(shorter: &Path, longer: &Path) -> Option<Path> {
    if shorter.is_empty() || shorter.len() > longer.len() {
        return None;
    }
    let anchor = shorter.last_end_point()?;
    let last_cubic = shorter.commands.iter().rev().find(|c| c.upper() == 'C');
    let self_referential = changed_at_tail(shorter, longer) || last_cubic.is_none();
    let mut out = shorter.clone();
    for cmd in &longer.commands[shorter.len()..] {
        match (cmd.upper(), last_cubic) {
            ('C', Some(cubic)) if !self_referential => out.push(cubic.clone()),
            ('C', _) => out.push(PathCommand::cubic_to(anchor, anchor, anchor)),
            _ => out.push(anchored(cmd, anchor, 'C')),
        }
    }
    Some(out)
}

fn anchored(slot: &PathCommand, anchor: Point, fill: char) -> PathCommand {
    match slot.code {
        'M' => PathCommand::move_to(anchor),
        'L' => PathCommand::line_to(anchor),
        _ if fill == 'C' => PathCommand::cubic_to(anchor, anchor, anchor),
        _ => PathCommand::line_to(anchor),
    }
}

/// True when the shorter path's endpoints are a prefix of the longer path's endpoints,
/// i.e. points were appended to or trimmed from the end only.
pub fn changed_at_tail(shorter: &Path, longer: &Path) -> bool {
    let a = shorter.end_points();
    let b = longer.end_points();
    a.len() <= b.len() && a.iter().zip(&b).all(|(p, q)| p.approx_eq(*q, ENDPOINT_EPS))
}
