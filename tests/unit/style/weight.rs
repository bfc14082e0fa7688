use super::*;

use crate::foundation::core::Viewport;

fn doc_with(paths: Vec<StyledPath>) -> IconDocument {
    IconDocument {
        viewport: Viewport::DEFAULT,
        paths,
    }
}

fn stroked_path() -> StyledPath {
    StyledPath {
        data: "M0,0 L10,10".to_string(),
        fill: Some(ColorToken::Foreground),
        stroke: None,
        stroke_width: Some(1.5),
        fill_rule: None,
        opacity: None,
    }
}

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("expected a stroke width");
    assert!(
        (actual - expected).abs() < 1e-9,
        "stroke width {actual} != {expected}"
    );
}

#[test]
fn regular_passes_through_unchanged() {
    let doc = doc_with(vec![stroked_path()]);
    assert_eq!(apply_weight(&doc, Weight::Regular), doc);
}

#[test]
fn thin_outlines_with_scaled_stroke() {
    let doc = doc_with(vec![stroked_path()]);
    let thin = apply_weight(&doc, Weight::Thin);

    let path = &thin.paths[0];
    assert_eq!(path.fill, Some(ColorToken::None));
    assert_eq!(path.stroke, Some(ColorToken::Foreground));
    assert_close(path.stroke_width, 1.5 * 0.67);
    assert_eq!(path.fill_rule, None);
}

#[test]
fn light_outlines_with_scaled_stroke() {
    let doc = doc_with(vec![stroked_path()]);
    let light = apply_weight(&doc, Weight::Light);
    assert_close(light.paths[0].stroke_width, 1.5 * 0.83);
}

#[test]
fn thin_uses_default_width_when_path_has_none() {
    let doc = doc_with(vec![StyledPath::bare("M0,0 L10,10")]);
    let thin = apply_weight(&doc, Weight::Thin);
    assert_close(thin.paths[0].stroke_width, DEFAULT_STROKE_WIDTH * 0.67);
}

#[test]
fn bold_scales_an_existing_stroke_width() {
    let doc = doc_with(vec![stroked_path()]);
    let bold = apply_weight(&doc, Weight::Bold);

    let path = &bold.paths[0];
    assert_close(path.stroke_width, 1.5 * 1.67);
    // Fill and stroke paints are untouched on this branch.
    assert_eq!(path.fill, Some(ColorToken::Foreground));
    assert_eq!(path.stroke, None);
}

#[test]
fn bold_forces_an_outline_onto_strokeless_filled_paths() {
    let mut path = stroked_path();
    path.stroke_width = None;
    let bold = apply_weight(&doc_with(vec![path]), Weight::Bold);

    let path = &bold.paths[0];
    assert_eq!(path.fill, Some(ColorToken::Foreground));
    assert_eq!(path.stroke, Some(ColorToken::Foreground));
    assert_close(path.stroke_width, 2.5);
}

#[test]
fn fill_forces_foreground_fill_and_drops_stroke() {
    let mut path = stroked_path();
    path.stroke = Some(ColorToken::Foreground);
    path.fill = Some(ColorToken::None);
    let filled = apply_weight(&doc_with(vec![path]), Weight::Fill);

    let path = &filled.paths[0];
    assert_eq!(path.fill, Some(ColorToken::Foreground));
    assert_eq!(path.stroke, None);
    assert_eq!(path.stroke_width, None);
    assert_eq!(path.fill_rule, Some(FillRule::NonZero));
}

#[test]
fn fill_overrides_an_existing_fill_rule() {
    let mut path = stroked_path();
    path.fill_rule = Some(FillRule::EvenOdd);
    let filled = apply_weight(&doc_with(vec![path]), Weight::Fill);
    assert_eq!(filled.paths[0].fill_rule, Some(FillRule::NonZero));
}

#[test]
fn duotone_defaults_fill_rule_but_keeps_an_existing_one() {
    let mut with_rule = stroked_path();
    with_rule.fill_rule = Some(FillRule::EvenOdd);
    let doc = doc_with(vec![stroked_path(), with_rule]);

    let duo = apply_weight(&doc, Weight::Duotone);
    assert_eq!(duo.paths[0].fill_rule, Some(FillRule::NonZero));
    assert_eq!(duo.paths[1].fill_rule, Some(FillRule::EvenOdd));
}

#[test]
fn duotone_alternates_layer_opacity_by_path_index() {
    let doc = doc_with(vec![stroked_path(); 4]);
    let duo = apply_weight(&doc, Weight::Duotone);

    assert_eq!(duo.paths[0].opacity, None);
    assert_eq!(duo.paths[1].opacity, Some(DUOTONE_SECONDARY_OPACITY));
    assert_eq!(duo.paths[2].opacity, None);
    assert_eq!(duo.paths[3].opacity, Some(DUOTONE_SECONDARY_OPACITY));

    for path in &duo.paths {
        assert_eq!(path.fill, Some(ColorToken::Foreground));
        assert_eq!(path.stroke, None);
        assert_eq!(path.stroke_width, None);
    }
}

#[test]
fn transform_never_mutates_the_input_document() {
    let doc = doc_with(vec![stroked_path()]);
    let before = doc.clone();
    let _ = apply_weight(&doc, Weight::Fill);
    let _ = apply_weight(&doc, Weight::Thin);
    let _ = apply_weight(&doc, Weight::Duotone);
    assert_eq!(doc, before);
}
