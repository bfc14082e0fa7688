use super::*;

use crate::foundation::core::PathEl;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn absolute_commands_produce_absolute_geometry() {
    let path = interpret_path_data("M0,0L10,0L10,10Z");
    assert_eq!(
        path.elements(),
        &[
            PathEl::MoveTo(pt(0.0, 0.0)),
            PathEl::LineTo(pt(10.0, 0.0)),
            PathEl::LineTo(pt(10.0, 10.0)),
            PathEl::ClosePath,
        ]
    );
}

#[test]
fn relative_commands_accumulate_to_the_same_geometry() {
    let absolute = interpret_path_data("M0,0L10,0L10,10Z");
    let relative = interpret_path_data("M0,0l10,0l0,10z");
    assert_eq!(absolute.elements(), relative.elements());
}

#[test]
fn unrecognized_letters_are_skipped() {
    let path = interpret_path_data("M0,0X L10,10");
    assert_eq!(
        path.elements(),
        &[PathEl::MoveTo(pt(0.0, 0.0)), PathEl::LineTo(pt(10.0, 10.0))]
    );
}

#[test]
fn malformed_operands_drop_only_that_command() {
    // `L5` is missing its y operand; the command is dropped and the scan
    // continues with the following command.
    let path = interpret_path_data("M0,0 L5 L7,8");
    assert_eq!(
        path.elements(),
        &[PathEl::MoveTo(pt(0.0, 0.0)), PathEl::LineTo(pt(7.0, 8.0))]
    );
}

#[test]
fn horizontal_and_vertical_lines() {
    let path = interpret_path_data("M1,2 H5 V7 h-2 v-3");
    assert_eq!(
        path.elements(),
        &[
            PathEl::MoveTo(pt(1.0, 2.0)),
            PathEl::LineTo(pt(5.0, 2.0)),
            PathEl::LineTo(pt(5.0, 7.0)),
            PathEl::LineTo(pt(3.0, 7.0)),
            PathEl::LineTo(pt(3.0, 4.0)),
        ]
    );
}

#[test]
fn relative_cubic_offsets_all_three_points() {
    let path = interpret_path_data("M10,10 c0,5 5,10 10,10");
    assert_eq!(
        path.elements(),
        &[
            PathEl::MoveTo(pt(10.0, 10.0)),
            PathEl::CurveTo(pt(10.0, 15.0), pt(15.0, 20.0), pt(20.0, 20.0)),
        ]
    );
}

#[test]
fn close_resets_current_point_to_subpath_start() {
    let path = interpret_path_data("M10,10 L20,10 Z l5,5");
    assert_eq!(
        path.elements(),
        &[
            PathEl::MoveTo(pt(10.0, 10.0)),
            PathEl::LineTo(pt(20.0, 10.0)),
            PathEl::ClosePath,
            PathEl::LineTo(pt(15.0, 15.0)),
        ]
    );
}

#[test]
fn relative_move_offsets_from_current_point() {
    let path = interpret_path_data("M10,10 L20,20 m5,5 L1,1");
    assert_eq!(
        path.elements(),
        &[
            PathEl::MoveTo(pt(10.0, 10.0)),
            PathEl::LineTo(pt(20.0, 20.0)),
            PathEl::MoveTo(pt(25.0, 25.0)),
            PathEl::LineTo(pt(1.0, 1.0)),
        ]
    );
}

#[test]
fn drawing_before_any_move_is_dropped() {
    let path = interpret_path_data("L10,10 M0,0 L4,4");
    assert_eq!(
        path.elements(),
        &[PathEl::MoveTo(pt(0.0, 0.0)), PathEl::LineTo(pt(4.0, 4.0))]
    );
}

#[test]
fn garbage_and_empty_inputs_yield_empty_geometry() {
    assert!(interpret_path_data("").elements().is_empty());
    assert!(interpret_path_data("   ,, ").elements().is_empty());
    assert!(interpret_path_data("12 34 56").elements().is_empty());
    assert!(interpret_path_data("@#!").elements().is_empty());
}

#[test]
fn decimals_negatives_and_exponents_parse() {
    let path = interpret_path_data("M-1.5,.5 L1e1,2.5E1");
    assert_eq!(
        path.elements(),
        &[
            PathEl::MoveTo(pt(-1.5, 0.5)),
            PathEl::LineTo(pt(10.0, 25.0)),
        ]
    );
}
