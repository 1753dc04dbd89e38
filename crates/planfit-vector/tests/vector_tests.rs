use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use planfit_core::traits::TextEmbedder;
use planfit_embed::HashingEmbedder;
use planfit_vector::{hash_content, SemanticEngine, VectorCache};

/// Hashing embedder that counts how many texts it actually computes.
struct CountingEmbedder {
    inner: HashingEmbedder,
    computed: Arc<AtomicUsize>,
}

impl CountingEmbedder {
    fn new() -> (Self, Arc<AtomicUsize>) {
        let computed = Arc::new(AtomicUsize::new(0));
        let embedder = Self {
            inner: HashingEmbedder::new(),
            computed: Arc::clone(&computed),
        };
        (embedder, computed)
    }
}

impl TextEmbedder for CountingEmbedder {
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn dim(&self) -> usize {
        self.inner.dim()
    }

    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        self.computed.fetch_add(texts.len(), Ordering::SeqCst);
        self.inner.embed_batch(texts)
    }
}

fn engine_in(dir: &std::path::Path, max_mem: usize, max_disk: u64) -> SemanticEngine {
    let cache = VectorCache::new(dir, max_mem, max_disk).expect("cache");
    SemanticEngine::new(Box::new(HashingEmbedder::new()), cache)
}

const VEC_BYTES: u64 = 384 * 4;

#[test]
fn repeated_embed_hits_the_cache() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let (counting, computed) = CountingEmbedder::new();
    let cache = VectorCache::new(tmp.path(), 100, 10 * 1024 * 1024).expect("cache");
    let engine = SemanticEngine::new(Box::new(counting), cache);

    let v1 = engine.embed("grilled salmon with rice").expect("embed");
    let v2 = engine.embed("grilled salmon with rice").expect("embed");
    assert_eq!(v1, v2);
    assert_eq!(
        computed.load(Ordering::SeqCst),
        1,
        "second call must be a cache hit"
    );

    let stats = engine.cache_stats();
    assert_eq!(stats.memory_items, 1);
    assert_eq!(stats.disk_files, 1);
    assert_eq!(stats.disk_size_bytes, VEC_BYTES);
}

#[test]
fn batch_computes_only_misses_and_preserves_order() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let (counting, computed) = CountingEmbedder::new();
    let cache = VectorCache::new(tmp.path(), 100, 10 * 1024 * 1024).expect("cache");
    let engine = SemanticEngine::new(Box::new(counting), cache);

    let warm = engine.embed("oatmeal with berries").expect("embed");
    let texts = vec![
        "lentil curry".to_string(),
        "oatmeal with berries".to_string(),
        "tofu scramble".to_string(),
    ];
    let batch = engine.embed_batch(&texts).expect("embed_batch");
    assert_eq!(batch.len(), 3);
    assert_eq!(batch[1], warm, "cached vector stays at its input position");
    assert_eq!(
        computed.load(Ordering::SeqCst),
        3,
        "one warm call plus two batch misses"
    );
}

#[test]
fn disk_tier_survives_a_fresh_memory_tier() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let first = engine_in(tmp.path(), 100, 10 * 1024 * 1024);
    let v1 = first.embed("barbell squat session").expect("embed");

    // Same directory, empty memory tier: must be served from disk.
    let second = engine_in(tmp.path(), 100, 10 * 1024 * 1024);
    assert_eq!(second.cache_stats().memory_items, 0);
    let v2 = second.embed("barbell squat session").expect("embed");
    assert_eq!(v1, v2);
    let stats = second.cache_stats();
    assert_eq!(stats.disk_files, 1, "hit must not duplicate the disk file");
    assert_eq!(stats.memory_items, 1, "disk hit is promoted to memory");
}

#[test]
fn memory_tier_evicts_oldest_first() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let engine = engine_in(tmp.path(), 2, 10 * 1024 * 1024);

    engine.embed("first").expect("embed");
    engine.embed("second").expect("embed");
    engine.embed("third").expect("embed");

    let stats = engine.cache_stats();
    assert_eq!(stats.memory_items, 2);
    assert_eq!(stats.disk_files, 3, "disk tier is not bounded by the memory cap");
}

#[test]
fn disk_tier_evicts_oldest_files_past_the_cap() {
    let tmp = tempfile::tempdir().expect("tempdir");
    // Cap fits two vectors; a third write overflows and evicts down to 80%.
    let engine = engine_in(tmp.path(), 100, 2 * VEC_BYTES + 100);

    engine.embed("first").expect("embed");
    std::thread::sleep(std::time::Duration::from_millis(20));
    engine.embed("second").expect("embed");
    std::thread::sleep(std::time::Duration::from_millis(20));
    engine.embed("third").expect("embed");

    let stats = engine.cache_stats();
    assert!(
        stats.disk_size_bytes <= stats.max_disk_bytes,
        "eviction must bring usage back under the cap"
    );
    assert_eq!(stats.disk_files, 1, "evicts to 80% of cap, not just under it");
    let newest = tmp.path().join(format!("{}.vec", hash_content("third")));
    assert!(newest.exists(), "the newest vector survives eviction");
}

#[test]
fn find_similar_ranks_and_truncates() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let engine = engine_in(tmp.path(), 100, 10 * 1024 * 1024);

    let texts = vec![
        "chicken wrap with lettuce".to_string(),
        "grilled chicken salad wrap".to_string(),
        "morning yoga flow".to_string(),
    ];
    let ids = vec!["r1".to_string(), "r2".to_string(), "w1".to_string()];
    let matches = engine
        .find_similar("chicken wrap", &texts, Some(&ids), 2)
        .expect("find_similar");

    assert_eq!(matches.len(), 2);
    assert!(matches[0].score >= matches[1].score);
    assert!(
        matches.iter().all(|m| m.id.starts_with('r')),
        "the yoga text must not outrank either chicken text"
    );
    assert!(matches[0].score > 0.0);
}

#[test]
fn find_similar_without_ids_returns_texts() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let engine = engine_in(tmp.path(), 100, 10 * 1024 * 1024);

    let texts = vec!["apple slices".to_string()];
    let matches = engine
        .find_similar("apple", &texts, None, 5)
        .expect("find_similar");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 0);
    assert_eq!(matches[0].id, "apple slices");
}

#[test]
fn clear_cache_empties_both_tiers() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let engine = engine_in(tmp.path(), 100, 10 * 1024 * 1024);

    engine.embed("something").expect("embed");
    engine.clear_cache().expect("clear");

    let stats = engine.cache_stats();
    assert_eq!(stats.memory_items, 0);
    assert_eq!(stats.disk_files, 0);
    assert_eq!(stats.disk_size_bytes, 0);
}

#[test]
fn hash_content_is_stable_and_hex() {
    let h = hash_content("overnight oats");
    assert_eq!(h, hash_content("overnight oats"));
    assert_ne!(h, hash_content("Overnight Oats"));
    assert_eq!(h.len(), 64);
    assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
}
