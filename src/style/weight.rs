use crate::foundation::core::Weight;
use crate::markup::document::{ColorToken, FillRule, IconDocument, StyledPath};

/// Stroke width assumed when a path declares none, in viewport units.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.5;

/// Layer opacity assigned to odd-indexed paths by the duotone transform.
pub const DUOTONE_SECONDARY_OPACITY: f64 = 0.2;

const THIN_FACTOR: f64 = 0.67;
const LIGHT_FACTOR: f64 = 0.83;
const BOLD_FACTOR: f64 = 1.67;
const BOLD_FORCED_WIDTH: f64 = 2.5;

/// Derive a weight-specific document from the canonical one.
///
/// Weights are attribute rewrites over every path; geometry is untouched.
/// The input may be a shared cached document, so this always builds a fresh
/// copy and never mutates in place.
pub fn apply_weight(doc: &IconDocument, weight: Weight) -> IconDocument {
    if weight == Weight::Regular {
        return doc.clone();
    }

    let paths = doc
        .paths
        .iter()
        .enumerate()
        .map(|(index, path)| transform_path(path, weight, index))
        .collect();

    IconDocument {
        viewport: doc.viewport,
        paths,
    }
}

fn transform_path(path: &StyledPath, weight: Weight, index: usize) -> StyledPath {
    let mut out = path.clone();
    let sw = path.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);

    match weight {
        Weight::Regular => {}
        Weight::Thin => outline(&mut out, sw * THIN_FACTOR),
        Weight::Light => outline(&mut out, sw * LIGHT_FACTOR),
        Weight::Bold => {
            if path.stroke_width.is_some() {
                out.stroke_width = Some(sw * BOLD_FACTOR);
            } else if is_filled(path) {
                // Stroke-less filled icon: add a thick outline on top of a
                // foreground fill so the shape reads heavier.
                out.fill = Some(ColorToken::Foreground);
                out.stroke = Some(ColorToken::Foreground);
                out.stroke_width = Some(BOLD_FORCED_WIDTH);
            } else if path.stroke.is_some() {
                out.stroke_width = Some(sw * BOLD_FACTOR);
            }
        }
        Weight::Fill => {
            out.fill = Some(ColorToken::Foreground);
            out.stroke = None;
            out.stroke_width = None;
            out.fill_rule = Some(FillRule::NonZero);
        }
        Weight::Duotone => {
            out.fill = Some(ColorToken::Foreground);
            out.stroke = None;
            out.stroke_width = None;
            if out.fill_rule.is_none() {
                out.fill_rule = Some(FillRule::NonZero);
            }
            if index % 2 == 1 {
                out.opacity = Some(DUOTONE_SECONDARY_OPACITY);
            }
        }
    }

    out
}

/// Rewrite a path into an outline-only rendition at the given stroke width.
fn outline(path: &mut StyledPath, width: f64) {
    if path.fill != Some(ColorToken::None) {
        path.fill = Some(ColorToken::None);
    }
    path.stroke = Some(ColorToken::Foreground);
    path.stroke_width = Some(width);
}

fn is_filled(path: &StyledPath) -> bool {
    matches!(&path.fill, Some(token) if !token.is_none())
}

#[cfg(test)]
#[path = "../../tests/unit/style/weight.rs"]
mod tests;
