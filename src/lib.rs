//! Ikona renders vector icons on demand.
//!
//! One canonical path set is parsed per icon; every visual weight
//! (thin/light/regular/bold/fill/duotone) and every pixel size is derived
//! from it algorithmically at request time, so nothing is pre-rasterized and
//! no per-variant assets ship with an application.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `icon id -> markup text` via a [`MarkupSource`]
//! 2. **Parse**: markup text -> [`IconDocument`] (cached per icon id)
//! 3. **Transform**: canonical document + [`Weight`] -> styled document
//! 4. **Rasterize**: styled document -> [`IconBitmap`] (cached per
//!    icon/weight/size)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a render is a pure function of its inputs; repeated
//!   requests produce byte-identical bitmaps.
//! - **Always drawable**: missing or broken markup renders a placeholder
//!   glyph; only an unallocatable target size is an error.
//! - **Short critical sections**: cache locks are never held across parsing
//!   or rasterization, so concurrent renders do not serialize.
//!
//! # Getting started
//!
//! Construct one [`IconRenderer`] over a [`MarkupSource`] and share it:
//!
//! ```no_run
//! use std::sync::Arc;
//! use ikona::{DirSource, IconRenderer, IconRendererOpts, IconSize, Weight};
//!
//! let renderer = IconRenderer::new(
//!     Arc::new(DirSource::new("assets/icons")),
//!     IconRendererOpts::default(),
//! );
//! let bitmap = renderer.render("arrow-left", Weight::Bold, IconSize::square(64))?;
//! # Ok::<(), ikona::IkonaError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cache;
mod foundation;
mod markup;
mod pipeline;
mod render;
mod style;

pub use cache::store::{BitmapKey, CacheStats};
pub use foundation::core::{
    Affine, BezPath, IconSize, PathEl, Point, Rect, Vec2, Viewport, Weight,
};
pub use foundation::error::{IkonaError, IkonaResult};
pub use markup::document::{ColorToken, FillRule, IconDocument, StyledPath};
pub use markup::parse::parse_markup;
pub use markup::path_data::interpret_path_data;
pub use pipeline::renderer::{
    DirSource, IconRenderer, IconRendererOpts, MarkupSource, StaticSource,
};
pub use render::raster::{IconBitmap, rasterize};
pub use style::weight::{DEFAULT_STROKE_WIDTH, DUOTONE_SECONDARY_OPACITY, apply_weight};
