use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::foundation::core::Weight;
use crate::markup::document::IconDocument;
use crate::render::raster::IconBitmap;

/// Key identifying one rendered bitmap: a render is unique per this tuple.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitmapKey {
    /// Icon identifier.
    pub icon: String,
    /// Requested weight variant.
    pub weight: Weight,
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
}

/// Bounded map with approximate least-recently-used eviction.
///
/// The bound is a soft count limit; recency order is bookkeeping, not a
/// correctness contract. Values are cloned out, so tiers store `Arc`s.
pub(crate) struct BoundedCache<K, V> {
    map: HashMap<K, V>,
    recency: VecDeque<K>,
    capacity: usize,
}

impl<K: Clone + Eq + Hash, V: Clone> BoundedCache<K, V> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            map: HashMap::new(),
            recency: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub(crate) fn get(&mut self, key: &K) -> Option<V> {
        let value = self.map.get(key).cloned()?;
        self.touch(key);
        Some(value)
    }

    pub(crate) fn put(&mut self, key: K, value: V) {
        self.map.insert(key.clone(), value);
        self.touch(&key);
        while self.map.len() > self.capacity {
            let Some(old) = self.recency.pop_front() else {
                break;
            };
            self.map.remove(&old);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.recency.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    fn touch(&mut self, key: &K) {
        if let Some(pos) = self.recency.iter().position(|k| k == key) {
            self.recency.remove(pos);
        }
        self.recency.push_back(key.clone());
    }
}

/// The two independent cache tiers behind the render pipeline.
///
/// Each tier has its own lock, held only for a single map operation — never
/// across parse, transform or rasterization — so renders of different keys
/// only ever serialize behind map bookkeeping. A same-key race simply costs
/// a duplicate (deterministic) computation.
pub(crate) struct IconCaches {
    documents: Mutex<BoundedCache<String, Arc<IconDocument>>>,
    bitmaps: Mutex<BoundedCache<BitmapKey, Arc<IconBitmap>>>,
}

impl IconCaches {
    pub(crate) fn new(document_capacity: usize, bitmap_capacity: usize) -> Self {
        Self {
            documents: Mutex::new(BoundedCache::new(document_capacity)),
            bitmaps: Mutex::new(BoundedCache::new(bitmap_capacity)),
        }
    }

    pub(crate) fn document(&self, icon: &str) -> Option<Arc<IconDocument>> {
        lock(&self.documents).get(&icon.to_string())
    }

    pub(crate) fn store_document(&self, icon: String, doc: Arc<IconDocument>) {
        lock(&self.documents).put(icon, doc);
    }

    pub(crate) fn bitmap(&self, key: &BitmapKey) -> Option<Arc<IconBitmap>> {
        lock(&self.bitmaps).get(key)
    }

    pub(crate) fn store_bitmap(&self, key: BitmapKey, bitmap: Arc<IconBitmap>) {
        lock(&self.bitmaps).put(key, bitmap);
    }

    pub(crate) fn clear(&self) {
        lock(&self.documents).clear();
        lock(&self.bitmaps).clear();
    }

    pub(crate) fn document_len(&self) -> usize {
        lock(&self.documents).len()
    }

    pub(crate) fn bitmap_len(&self) -> usize {
        lock(&self.bitmaps).len()
    }
}

/// Lock a tier, recovering the guard if a previous holder panicked. The
/// protected state is a plain map that is valid between operations.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Point-in-time cache effectiveness counters for one renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Bitmap-tier hits.
    pub bitmap_hits: u64,
    /// Bitmap-tier misses.
    pub bitmap_misses: u64,
    /// Document-tier hits.
    pub document_hits: u64,
    /// Document-tier misses.
    pub document_misses: u64,
    /// Calls made to the external markup source.
    pub resolutions: u64,
}

#[derive(Debug, Default)]
pub(crate) struct StatCounters {
    pub(crate) bitmap_hits: AtomicU64,
    pub(crate) bitmap_misses: AtomicU64,
    pub(crate) document_hits: AtomicU64,
    pub(crate) document_misses: AtomicU64,
    pub(crate) resolutions: AtomicU64,
}

impl StatCounters {
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            bitmap_hits: self.bitmap_hits.load(Ordering::Relaxed),
            bitmap_misses: self.bitmap_misses.load(Ordering::Relaxed),
            document_hits: self.document_hits.load(Ordering::Relaxed),
            document_misses: self.document_misses.load(Ordering::Relaxed),
            resolutions: self.resolutions.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/store.rs"]
mod tests;
