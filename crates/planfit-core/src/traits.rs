/// Strategy seam for text vectorization. The engine fixes one implementation
/// at construction and keeps it for its lifetime.
pub trait TextEmbedder: Send + Sync {
    /// Stable identifier for the strategy; callers keying caches on content
    /// hashes should keep one cache directory per embedder id.
    fn id(&self) -> &str;
    fn dim(&self) -> usize;
    /// One vector per input text, in input order.
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}
