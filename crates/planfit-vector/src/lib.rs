//! Semantic matching engine: an embedding strategy fronted by the two-tier
//! vector cache, plus cosine ranking over candidate texts.

pub mod cache;
pub mod similarity;
pub mod store;

pub use cache::{CacheStats, VectorCache};
pub use similarity::cosine;

use planfit_core::traits::TextEmbedder;

/// Content hash used as the cache key. Hex-encoded blake3 of the raw text.
pub fn hash_content(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// A ranked match from [`SemanticEngine::find_similar`].
#[derive(Debug, Clone)]
pub struct Match {
    /// Position of the matched text in the candidate slice.
    pub index: usize,
    /// The caller-supplied id for that position, or the text itself when no
    /// ids were given.
    pub id: String,
    pub score: f32,
}

pub struct SemanticEngine {
    embedder: Box<dyn TextEmbedder>,
    cache: VectorCache,
}

impl SemanticEngine {
    pub fn new(embedder: Box<dyn TextEmbedder>, cache: VectorCache) -> Self {
        Self { embedder, cache }
    }

    pub fn embedder_id(&self) -> &str {
        self.embedder.id()
    }

    pub fn dim(&self) -> usize {
        self.embedder.dim()
    }

    pub fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let mut out = self.embed_batch(std::slice::from_ref(&text.to_string()))?;
        Ok(out.pop().unwrap_or_default())
    }

    /// Embed a batch, consulting the cache per text. Misses are computed in
    /// one embedder call and written through. Output order matches input.
    pub fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>> {
        let hashes: Vec<String> = texts.iter().map(|t| hash_content(t)).collect();
        let mut out: Vec<Option<Vec<f32>>> = Vec::with_capacity(texts.len());
        let mut miss_indices = Vec::new();
        let mut miss_texts = Vec::new();
        for (i, hash) in hashes.iter().enumerate() {
            match self.cache.get(hash) {
                Some(v) => out.push(Some(v)),
                None => {
                    out.push(None);
                    miss_indices.push(i);
                    miss_texts.push(texts[i].clone());
                }
            }
        }
        if !miss_texts.is_empty() {
            tracing::debug!(
                misses = miss_texts.len(),
                total = texts.len(),
                "computing embeddings"
            );
            let computed = self.embedder.embed_batch(&miss_texts)?;
            for (slot, vector) in miss_indices.iter().zip(computed.into_iter()) {
                self.cache.insert(&hashes[*slot], &vector);
                out[*slot] = Some(vector);
            }
        }
        Ok(out.into_iter().map(|v| v.unwrap_or_default()).collect())
    }

    pub fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine(a, b)
    }

    /// Rank candidate texts against a query, best first. Ties keep input
    /// order. `ids`, when given, must parallel `texts`.
    pub fn find_similar(
        &self,
        query: &str,
        texts: &[String],
        ids: Option<&[String]>,
        top_k: usize,
    ) -> anyhow::Result<Vec<Match>> {
        if texts.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }
        let query_vec = self.embed(query)?;
        let candidate_vecs = self.embed_batch(texts)?;
        let mut matches: Vec<Match> = candidate_vecs
            .iter()
            .enumerate()
            .map(|(i, v)| Match {
                index: i,
                id: match ids {
                    Some(ids) => ids.get(i).cloned().unwrap_or_default(),
                    None => texts[i].clone(),
                },
                score: cosine(&query_vec, v),
            })
            .collect();
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        matches.truncate(top_k);
        Ok(matches)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) -> anyhow::Result<()> {
        self.cache.clear()
    }
}
