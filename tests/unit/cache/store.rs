use super::*;

use crate::foundation::core::Viewport;
use crate::markup::document::StyledPath;

fn doc() -> Arc<IconDocument> {
    Arc::new(IconDocument {
        viewport: Viewport::DEFAULT,
        paths: vec![StyledPath::bare("M0,0 L1,1")],
    })
}

fn bitmap() -> Arc<IconBitmap> {
    Arc::new(IconBitmap {
        width: 1,
        height: 1,
        data: vec![0; 4],
        premultiplied: true,
    })
}

fn key(icon: &str) -> BitmapKey {
    BitmapKey {
        icon: icon.to_string(),
        weight: Weight::Regular,
        width: 16,
        height: 16,
    }
}

#[test]
fn bounded_cache_evicts_least_recently_used() {
    let mut cache = BoundedCache::new(2);
    cache.put("a", 1);
    cache.put("b", 2);

    // Touch `a` so `b` is the eviction candidate.
    assert_eq!(cache.get(&"a"), Some(1));
    cache.put("c", 3);

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"a"), Some(1));
    assert_eq!(cache.get(&"c"), Some(3));
}

#[test]
fn bounded_cache_overwrites_in_place() {
    let mut cache = BoundedCache::new(2);
    cache.put("a", 1);
    cache.put("a", 2);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&"a"), Some(2));
}

#[test]
fn bounded_cache_clear_empties_everything() {
    let mut cache = BoundedCache::new(4);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.clear();
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.get(&"a"), None);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut cache = BoundedCache::new(0);
    cache.put("a", 1);
    assert_eq!(cache.get(&"a"), Some(1));
    cache.put("b", 2);
    assert_eq!(cache.len(), 1);
}

#[test]
fn tiers_are_independent() {
    let caches = IconCaches::new(4, 4);
    caches.store_document("arrow".to_string(), doc());
    caches.store_bitmap(key("arrow"), bitmap());

    assert!(caches.document("arrow").is_some());
    assert!(caches.document("other").is_none());
    assert!(caches.bitmap(&key("arrow")).is_some());
    assert!(caches.bitmap(&key("other")).is_none());

    caches.clear();
    assert_eq!(caches.document_len(), 0);
    assert_eq!(caches.bitmap_len(), 0);
}

#[test]
fn bitmap_keys_distinguish_every_tuple_component() {
    let base = key("arrow");

    let mut other_weight = key("arrow");
    other_weight.weight = Weight::Bold;
    let mut other_size = key("arrow");
    other_size.width = 32;

    assert_ne!(base, key("check"));
    assert_ne!(base, other_weight);
    assert_ne!(base, other_size);

    let caches = IconCaches::new(4, 4);
    caches.store_bitmap(base.clone(), bitmap());
    assert!(caches.bitmap(&other_weight).is_none());
    assert!(caches.bitmap(&other_size).is_none());
}

#[test]
fn stat_counters_snapshot() {
    let counters = StatCounters::default();
    StatCounters::bump(&counters.bitmap_hits);
    StatCounters::bump(&counters.bitmap_misses);
    StatCounters::bump(&counters.bitmap_misses);

    let snap = counters.snapshot();
    assert_eq!(snap.bitmap_hits, 1);
    assert_eq!(snap.bitmap_misses, 2);
    assert_eq!(snap.document_hits, 0);
    assert_eq!(snap.resolutions, 0);
}
