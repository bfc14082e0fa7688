pub use kurbo::{Affine, BezPath, PathEl, Point, Rect, Vec2};

/// Axis-aligned rectangle defining the coordinate space icon geometry is
/// authored in. Mapped onto the output bitmap via uniform scale + centering.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Origin x in markup units.
    pub x: f64,
    /// Origin y in markup units.
    pub y: f64,
    /// Width in markup units. Always finite and > 0.
    pub width: f64,
    /// Height in markup units. Always finite and > 0.
    pub height: f64,
}

impl Viewport {
    /// Fallback viewport used when markup carries no usable declaration.
    pub const DEFAULT: Viewport = Viewport {
        x: 0.0,
        y: 0.0,
        width: 256.0,
        height: 256.0,
    };
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Output bitmap dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct IconSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl IconSize {
    /// Square size helper.
    pub fn square(px: u32) -> Self {
        Self {
            width: px,
            height: px,
        }
    }
}

/// Named stylistic variant derived algorithmically from one canonical path
/// set. Variants are attribute rewrites, not geometry reconstruction.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Thinnest outline variant.
    Thin,
    /// Light outline variant.
    Light,
    /// The canonical styling, passed through untouched.
    #[default]
    Regular,
    /// Heavier strokes, or a forced thick outline for stroke-less icons.
    Bold,
    /// Solid fill, strokes dropped.
    Fill,
    /// Solid fill with alternating per-path layer opacity.
    Duotone,
}

impl Weight {
    /// All weights, in canonical order.
    pub const ALL: [Weight; 6] = [
        Weight::Thin,
        Weight::Light,
        Weight::Regular,
        Weight::Bold,
        Weight::Fill,
        Weight::Duotone,
    ];

    /// Stable lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Weight::Thin => "thin",
            Weight::Light => "light",
            Weight::Regular => "regular",
            Weight::Bold => "bold",
            Weight::Fill => "fill",
            Weight::Duotone => "duotone",
        }
    }
}

impl std::str::FromStr for Weight {
    type Err = crate::foundation::error::IkonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weight::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| {
                crate::foundation::error::IkonaError::markup(format!("unknown weight: {s:?}"))
            })
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
