use crate::foundation::core::Viewport;

/// Paint color token extracted from markup.
///
/// The pipeline resolves no real colors: anything that is not `none` is
/// painted with the active foreground color at rasterization time. Unknown
/// tokens are carried through untouched so an embedder inspecting the
/// document still sees what the markup said.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorToken {
    /// The `currentColor` sentinel: paint with the active foreground color.
    Foreground,
    /// The `none` sentinel: do not paint this operation at all.
    None,
    /// Any other token, passed through unresolved.
    Custom(String),
}

impl ColorToken {
    /// Classify a raw attribute value.
    pub fn parse(raw: &str) -> ColorToken {
        match raw {
            "currentColor" => ColorToken::Foreground,
            "none" => ColorToken::None,
            other => ColorToken::Custom(other.to_string()),
        }
    }

    /// True for the `none` sentinel.
    pub fn is_none(&self) -> bool {
        matches!(self, ColorToken::None)
    }
}

/// Winding rule applied when filling a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillRule {
    /// Non-zero winding rule (the default).
    NonZero,
    /// Even-odd rule.
    EvenOdd,
}

impl FillRule {
    pub(crate) fn parse(raw: &str) -> Option<FillRule> {
        match raw {
            "nonzero" => Some(FillRule::NonZero),
            "evenodd" => Some(FillRule::EvenOdd),
            _ => None,
        }
    }
}

/// One drawable shape: raw path command text plus paint attributes.
///
/// `data` stays uninterpreted until rasterization so the weight transformer
/// can rewrite attributes cheaply without re-deriving geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyledPath {
    /// Raw path mini-language text (`M`/`L`/`H`/`V`/`C`/`Z` dialect).
    pub data: String,
    /// Fill paint, if the element declared one.
    pub fill: Option<ColorToken>,
    /// Stroke paint, if the element declared one.
    pub stroke: Option<ColorToken>,
    /// Stroke width in viewport units. Always finite and > 0 when present.
    pub stroke_width: Option<f64>,
    /// Fill winding rule, if the element declared one.
    pub fill_rule: Option<FillRule>,
    /// Per-path layer opacity in `[0, 1]`; `None` means fully opaque.
    /// Only the duotone weight transform produces values below 1.
    pub opacity: Option<f64>,
}

impl StyledPath {
    /// A path with geometry data only, no paint attributes.
    pub fn bare(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            fill: None,
            stroke: None,
            stroke_width: None,
            fill_rule: None,
            opacity: None,
        }
    }
}

/// Parsed icon markup: a viewport plus a non-empty list of styled paths in
/// draw order. Immutable after construction; shared read-only between
/// concurrent renders through the document cache.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IconDocument {
    /// Coordinate space of the path data.
    pub viewport: Viewport,
    /// Styled paths in draw order (later paths draw on top).
    pub paths: Vec<StyledPath>,
}
