// File: crates/chart-anim/tests/path_model.rs
// Purpose: Parsing and serialization of path strings, including malformed and opaque input.

use chart_anim::{Operand, Path, PathCommand, Point};

#[test]
fn canonical_round_trip() {
    let text = "M 0 0 L 10 10 C 1 2 3 4 5 6 Z";
    let path = Path::parse(text);
    assert_eq!(path.len(), 4);
    assert_eq!(path.letters(), vec!['M', 'L', 'C', 'Z']);
    assert_eq!(path.serialize(), text);
}

#[test]
fn commas_and_compact_signs_split() {
    let path = Path::parse("M10-5L3,4");
    assert_eq!(path.serialize(), "M 10 -5 L 3 4");
    assert_eq!(path.commands[0].point_at(0), Some(Point::new(10.0, -5.0)));
}

#[test]
fn exponents_are_numbers_not_commands() {
    let path = Path::parse("M 1e-3 2E+2");
    assert_eq!(path.len(), 1);
    assert_eq!(path.commands[0].num(0), Some(0.001));
    assert_eq!(path.commands[0].num(1), Some(200.0));
}

#[test]
fn relative_case_is_preserved() {
    let path = Path::parse("m 1 2 l 3 4");
    assert!(path.commands.iter().all(PathCommand::is_relative));
    assert_eq!(path.serialize(), "m 1 2 l 3 4");
}

#[test]
fn non_numeric_operands_survive_as_raw() {
    let path = Path::parse("M 0 0 L 1.2.3 5");
    assert_eq!(path.commands[1].params[0], Operand::Raw("1.2.3".into()));
    assert_eq!(path.commands[1].end_point(), None);
    assert_eq!(path.serialize(), "M 0 0 L 1.2.3 5");
}

#[test]
fn unknown_commands_are_opaque() {
    let path = Path::parse("M 0 0 X 7 # 1 L 2 2");
    assert_eq!(path.len(), 3);
    assert!(!path.commands[1].is_known());
    assert_eq!(path.commands[1].params, vec![Operand::Raw("7".into()), Operand::Raw("#".into()), Operand::Raw("1".into())]);
    assert_eq!(path.serialize(), "M 0 0 X 7 # 1 L 2 2");
}

#[test]
fn leading_operands_are_dropped() {
    assert_eq!(Path::parse("10 20 M 1 2").serialize(), "M 1 2");
    assert!(Path::parse("").is_empty());
    assert!(Path::parse("1 2 3").is_empty());
}

#[test]
fn end_points_skip_close_and_axis_commands() {
    let path = Path::parse("M 0 0 H 5 V 5 C 1 1 2 2 3 3 Z");
    assert_eq!(path.end_points(), vec![Point::new(0.0, 0.0), Point::new(3.0, 3.0)]);
    assert_eq!(path.last_end_point(), Some(Point::new(3.0, 3.0)));
}

#[test]
fn same_structure_compares_letters_only() {
    let a = Path::parse("M 0 0 L 1 1");
    let b = Path::parse("M 5 5 L 9 9");
    let c = Path::parse("M 5 5 l 9 9");
    assert!(a.same_structure(&b));
    assert!(!a.same_structure(&c));
}

#[test]
fn built_commands_serialize() {
    let path = Path::from(vec![
        PathCommand::move_to(Point::new(0.0, 0.5)),
        PathCommand::cubic_to(Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)),
    ]);
    assert_eq!(path.to_string(), "M 0 0.5 C 1 1 2 2 3 3");
    let parsed: Path = "M 0 0.5 C 1 1 2 2 3 3".parse().expect("infallible");
    assert_eq!(parsed, path);
}

#[test]
fn end_point_by_index() {
    let path = Path::parse("M 1 2 Z L 3 4");
    assert_eq!(path.end_point(0), Some(Point::new(1.0, 2.0)));
    assert_eq!(path.end_point(1), None);
    assert_eq!(path.end_point(2), Some(Point::new(3.0, 4.0)));
    assert_eq!(path.end_point(9), None);
}
