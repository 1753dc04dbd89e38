use planfit_core::traits::TextEmbedder;
use planfit_embed::{default_embedder, HashingEmbedder};

#[test]
fn hashing_embedder_shape_and_determinism() {
    let embedder = HashingEmbedder::new();
    let texts = vec!["hello world".to_string(), "hello world".to_string()];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");
    let v1 = &embs[0];
    let v2 = &embs[1];

    assert_eq!(v1.len(), 384, "embedding dim is 384");

    // Norm approximately 1.0
    let norm: f32 = v1.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() <= 1e-3, "vector is L2-normalized (norm={norm})");

    // Deterministic for same input, bit for bit
    assert_eq!(v1, v2);
}

#[test]
fn hashing_embedder_empty_input_is_zero_vector() {
    let embedder = HashingEmbedder::new();
    let embs = embedder
        .embed_batch(&[String::new(), "...!!!".to_string()])
        .expect("embed_batch");
    for v in &embs {
        assert_eq!(v.len(), 384);
        assert!(v.iter().all(|x| *x == 0.0), "no tokens means zero vector");
    }
}

#[test]
fn hashing_embedder_case_folds_tokens() {
    let embedder = HashingEmbedder::new();
    let embs = embedder
        .embed_batch(&["Tofu Scramble".to_string(), "tofu scramble".to_string()])
        .expect("embed_batch");
    assert_eq!(embs[0], embs[1]);
}

#[test]
fn distinct_texts_usually_differ() {
    let embedder = HashingEmbedder::new();
    let embs = embedder
        .embed_batch(&[
            "quinoa chickpea salad".to_string(),
            "barbell deadlift session".to_string(),
        ])
        .expect("embed_batch");
    assert_ne!(embs[0], embs[1]);
}

#[test]
fn default_embedder_honors_hash_override() {
    std::env::set_var("PLANFIT_USE_HASH_EMBEDDINGS", "1");
    let embedder = default_embedder().expect("embedder");
    assert_eq!(embedder.id(), "hash-v1");
    assert_eq!(embedder.dim(), 384);
}
