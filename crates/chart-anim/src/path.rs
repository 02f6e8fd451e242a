// File: crates/chart-anim/src/path.rs
// Summary: Path command mini-language: parse `d` strings into commands and serialize them back.
// Notes:
// - Parsing never fails. Tokens that are not finite numbers survive as `Operand::Raw`
//   and unknown command letters survive as opaque commands.
// - Case is preserved; `e`/`E` are reserved for number exponents and never start a command.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::geometry::Point;

/// Command letters this crate recognizes (upper-case form).
pub const KNOWN_COMMANDS: &str = "MLCQHVSTAZ";

#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Num(f64),
    Raw(String),
}

impl Operand {
    /// Numeric when the token parses to a finite `f64`, raw otherwise.
    pub fn parse_token(token: &str) -> Self {
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Operand::Num(v),
            _ => Operand::Raw(token.to_string()),
        }
    }

    #[inline]
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Operand::Num(v) => Some(*v),
            Operand::Raw(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Num(v) => write!(f, "{v}"),
            Operand::Raw(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PathCommand {
    pub code: char,
    pub params: Vec<Operand>,
}

impl PathCommand {
    pub fn new(code: char, params: impl IntoIterator<Item = f64>) -> Self {
        Self { code, params: params.into_iter().map(Operand::Num).collect() }
    }

    pub fn move_to(p: Point) -> Self { Self::new('M', [p.x, p.y]) }
    pub fn line_to(p: Point) -> Self { Self::new('L', [p.x, p.y]) }
    pub fn cubic_to(c1: Point, c2: Point, p: Point) -> Self {
        Self::new('C', [c1.x, c1.y, c2.x, c2.y, p.x, p.y])
    }

    #[inline]
    pub fn upper(&self) -> char { self.code.to_ascii_uppercase() }

    pub fn is_known(&self) -> bool { is_known_command(self.code) }

    #[inline]
    pub fn is_relative(&self) -> bool { self.code.is_ascii_lowercase() }

    pub fn num(&self, i: usize) -> Option<f64> {
        self.params.get(i).and_then(Operand::as_num)
    }

    /// Operands `2i` and `2i + 1` as a point.
    pub fn point_at(&self, i: usize) -> Option<Point> {
        Some(Point::new(self.num(2 * i)?, self.num(2 * i + 1)?))
    }

    /// Pen position written by the command, taken from its last coordinate pair.
    /// `None` for `H`, `V`, `Z`, opaque commands and commands with raw operands in that slot.
    pub fn end_point(&self) -> Option<Point> {
        match self.upper() {
            'M' | 'L' | 'C' | 'Q' | 'S' | 'T' | 'A' if self.params.len() >= 2 => {
                let n = self.params.len();
                Some(Point::new(self.num(n - 2)?, self.num(n - 1)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        for p in &self.params {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self { Self { commands: Vec::new() } }

    pub fn parse(text: &str) -> Self {
        let mut commands = Vec::new();
        let mut current: Option<(char, usize)> = None;
        for (idx, ch) in text.char_indices() {
            if !is_command_letter(ch) {
                continue;
            }
            match current.take() {
                Some((code, start)) => commands.push(build_command(code, &text[start..idx])),
                None => {
                    let lead = text[..idx].trim();
                    if !lead.is_empty() {
                        log::debug!("dropping operands before first path command: {lead:?}");
                    }
                }
            }
            current = Some((ch, idx + ch.len_utf8()));
        }
        match current {
            Some((code, start)) => commands.push(build_command(code, &text[start..])),
            None if !text.trim().is_empty() => {
                log::debug!("path string has no command letters: {text:?}");
            }
            None => {}
        }
        Self { commands }
    }

    /// Canonical string form: `code p0 p1 ...` per command, space separated.
    pub fn serialize(&self) -> String { self.to_string() }

    #[inline]
    pub fn len(&self) -> usize { self.commands.len() }
    #[inline]
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    pub fn push(&mut self, cmd: PathCommand) { self.commands.push(cmd); }

    /// Structural signature: the ordered command letters.
    pub fn letters(&self) -> Vec<char> {
        self.commands.iter().map(|c| c.code).collect()
    }

    pub fn same_structure(&self, other: &Path) -> bool {
        self.commands.len() == other.commands.len()
            && self.commands.iter().zip(&other.commands).all(|(a, b)| a.code == b.code)
    }

    /// End point of the command at `index`.
    pub fn end_point(&self, index: usize) -> Option<Point> {
        self.commands.get(index).and_then(PathCommand::end_point)
    }

    /// End points of every command that has one, in drawing order.
    pub fn end_points(&self) -> Vec<Point> {
        self.commands.iter().filter_map(PathCommand::end_point).collect()
    }

    pub fn last_end_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self { Self { commands } }
}

impl FromStr for Path {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Path::parse(s)) }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

#[inline]
pub fn is_known_command(code: char) -> bool {
    KNOWN_COMMANDS.contains(code.to_ascii_uppercase())
}

#[inline]
fn is_command_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() && ch != 'e' && ch != 'E'
}

fn build_command(code: char, chunk: &str) -> PathCommand {
    let known = is_known_command(code);
    let mut params = Vec::new();
    for token in tokens(chunk) {
        if known {
            for piece in split_signs(token) {
                params.push(Operand::parse_token(piece));
            }
        } else {
            params.push(Operand::Raw(token.to_string()));
        }
    }
    PathCommand { code, params }
}

/// Whitespace/comma separated tokens.
pub(crate) fn tokens(chunk: &str) -> impl Iterator<Item = &str> {
    chunk.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty())
}

/// Splits compact numbers like `10-5` before each sign that does not follow an exponent marker.
fn split_signs(token: &str) -> Vec<&str> {
    let bytes = token.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    for i in 1..bytes.len() {
        if (bytes[i] == b'-' || bytes[i] == b'+') && !matches!(bytes[i - 1], b'e' | b'E') {
            pieces.push(&token[start..i]);
            start = i;
        }
    }
    pieces.push(&token[start..]);
    pieces
}
