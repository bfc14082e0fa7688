use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::cache::store::{BitmapKey, CacheStats, IconCaches, StatCounters};
use crate::foundation::core::{IconSize, Weight};
use crate::foundation::error::IkonaResult;
use crate::markup::document::IconDocument;
use crate::markup::parse::parse_markup;
use crate::render::raster::{IconBitmap, rasterize};
use crate::style::weight::apply_weight;

/// Supplies raw markup text for icon identifiers.
///
/// Resolution happens outside the pipeline's locking domain (it may do file
/// IO); absence is not an error — the pipeline falls back to the built-in
/// placeholder glyph.
pub trait MarkupSource: Send + Sync {
    /// Return the markup text for `icon_id`, or `None` when unknown.
    fn resolve(&self, icon_id: &str) -> Option<String>;
}

/// Markup source reading `<root>/<id>.svg` files.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Serve markup files from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl MarkupSource for DirSource {
    fn resolve(&self, icon_id: &str) -> Option<String> {
        // Identifiers are plain file stems; anything path-like is rejected
        // rather than resolved outside the root.
        if icon_id.is_empty()
            || icon_id
                .chars()
                .any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
            || icon_id.contains("..")
        {
            return None;
        }
        std::fs::read_to_string(self.root.join(format!("{icon_id}.svg"))).ok()
    }
}

/// In-memory markup source, for bundled (`include_str!`) icon sets and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    entries: HashMap<String, String>,
}

impl StaticSource {
    /// Build a source from `(id, markup)` pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl MarkupSource for StaticSource {
    fn resolve(&self, icon_id: &str) -> Option<String> {
        self.entries.get(icon_id).cloned()
    }
}

/// Box-with-a-cross glyph rendered whenever markup is missing or unusable,
/// so callers always get something visibly drawable back.
const PLACEHOLDER_MARKUP: &str = concat!(
    r#"<svg viewBox="0 0 256 256">"#,
    r#"<path d="M48,48 L208,48 L208,208 L48,208 Z" fill="none" stroke="currentColor" stroke-width="14"/>"#,
    r#"<path d="M92,92 L164,164" fill="none" stroke="currentColor" stroke-width="14"/>"#,
    r#"<path d="M92,164 L164,92" fill="none" stroke="currentColor" stroke-width="14"/>"#,
    r#"</svg>"#,
);

fn placeholder_document() -> &'static Arc<IconDocument> {
    static DOC: OnceLock<Arc<IconDocument>> = OnceLock::new();
    DOC.get_or_init(|| {
        Arc::new(parse_markup(PLACEHOLDER_MARKUP).expect("built-in placeholder markup must parse"))
    })
}

/// Configuration for an [`IconRenderer`].
#[derive(Clone, Copy, Debug)]
pub struct IconRendererOpts {
    /// Straight-alpha RGBA8 color painted for every non-`none` color token.
    pub foreground_rgba: [u8; 4],
    /// Soft entry bound for the parsed-document tier. One document serves
    /// every weight and size of its icon, so this stays small.
    pub document_capacity: usize,
    /// Soft entry bound for the rendered-bitmap tier.
    pub bitmap_capacity: usize,
}

impl Default for IconRendererOpts {
    fn default() -> Self {
        Self {
            foreground_rgba: [0, 0, 0, 255],
            document_capacity: 64,
            bitmap_capacity: 512,
        }
    }
}

/// On-demand icon renderer: markup in, weight- and size-specific bitmaps
/// out, with two-tier caching.
///
/// One renderer is meant to be constructed explicitly and shared (via
/// `Arc`) by every caller that renders icons; all methods take `&self` and
/// are safe to call from concurrent threads. Cache locks are held per map
/// operation only, so concurrent renders of different icons never serialize
/// behind each other's parsing or rasterization.
pub struct IconRenderer {
    source: Arc<dyn MarkupSource>,
    caches: IconCaches,
    stats: StatCounters,
    opts: IconRendererOpts,
}

impl IconRenderer {
    /// Build a renderer over the given markup source.
    pub fn new(source: Arc<dyn MarkupSource>, opts: IconRendererOpts) -> Self {
        Self {
            source,
            caches: IconCaches::new(opts.document_capacity, opts.bitmap_capacity),
            stats: StatCounters::default(),
            opts,
        }
    }

    /// Render one icon at the given weight and pixel size.
    ///
    /// Deterministic per `(icon_id, weight, size)`: repeated calls return
    /// byte-identical bitmaps, cached or not. Unknown identifiers and
    /// unparseable markup render the placeholder glyph instead of failing;
    /// the only error is a target size that cannot be allocated.
    #[tracing::instrument(skip(self), fields(icon = icon_id, weight = %weight))]
    pub fn render(
        &self,
        icon_id: &str,
        weight: Weight,
        size: IconSize,
    ) -> IkonaResult<Arc<IconBitmap>> {
        let key = BitmapKey {
            icon: icon_id.to_string(),
            weight,
            width: size.width,
            height: size.height,
        };
        if let Some(hit) = self.caches.bitmap(&key) {
            StatCounters::bump(&self.stats.bitmap_hits);
            tracing::debug!("bitmap cache hit");
            return Ok(hit);
        }
        StatCounters::bump(&self.stats.bitmap_misses);

        let (doc, is_placeholder) = self.document_for(icon_id);
        let styled = apply_weight(&doc, weight);
        let bitmap = Arc::new(rasterize(&styled, size, self.opts.foreground_rgba)?);

        // Placeholder output is never cached: a later-registered icon or a
        // transient resolution failure should not be pinned to the fallback.
        if !is_placeholder {
            self.caches.store_bitmap(key, Arc::clone(&bitmap));
        }
        Ok(bitmap)
    }

    /// Drop every cached document and bitmap.
    ///
    /// Safe to call at any time, including concurrently with in-flight
    /// renders (e.g. from a memory-pressure signal). Costs recomputation,
    /// never correctness.
    pub fn clear_caches(&self) {
        self.caches.clear();
        tracing::debug!("icon caches cleared");
    }

    /// Snapshot of cache effectiveness counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    fn document_for(&self, icon_id: &str) -> (Arc<IconDocument>, bool) {
        if let Some(doc) = self.caches.document(icon_id) {
            StatCounters::bump(&self.stats.document_hits);
            return (doc, false);
        }
        StatCounters::bump(&self.stats.document_misses);

        StatCounters::bump(&self.stats.resolutions);
        let Some(text) = self.source.resolve(icon_id) else {
            tracing::warn!(icon = icon_id, "no markup for icon, rendering placeholder");
            return (Arc::clone(placeholder_document()), true);
        };
        match parse_markup(&text) {
            Ok(doc) => {
                let doc = Arc::new(doc);
                self.caches
                    .store_document(icon_id.to_string(), Arc::clone(&doc));
                (doc, false)
            }
            Err(err) => {
                tracing::warn!(icon = icon_id, error = %err, "markup parse failed, rendering placeholder");
                (Arc::clone(placeholder_document()), true)
            }
        }
    }
}

impl std::fmt::Debug for IconRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconRenderer")
            .field("documents", &self.caches.document_len())
            .field("bitmaps", &self.caches.bitmap_len())
            .field("opts", &self.opts)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/renderer.rs"]
mod tests;
