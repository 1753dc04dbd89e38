//! Text vectorization strategies.
//!
//! The hashing fallback is always available and fully deterministic; a local
//! sentence-transformer can be compiled in behind the `model` feature and is
//! picked up when `PLANFIT_MODEL_DIR` points at a model directory.

pub mod hashing;
#[cfg(feature = "model")]
pub mod model;

pub use hashing::HashingEmbedder;

use planfit_core::traits::TextEmbedder;

/// Select the embedding strategy once, at startup.
///
/// `PLANFIT_USE_HASH_EMBEDDINGS=1` forces the hashing fallback even when the
/// model feature is compiled in.
pub fn default_embedder() -> anyhow::Result<Box<dyn TextEmbedder>> {
    let force_hash = std::env::var("PLANFIT_USE_HASH_EMBEDDINGS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if force_hash {
        return Ok(Box::new(HashingEmbedder::new()));
    }

    #[cfg(feature = "model")]
    {
        match model::SentenceModel::new() {
            Ok(m) => return Ok(Box::new(m)),
            Err(e) => {
                tracing::warn!("sentence model unavailable, using hashing fallback: {e}");
            }
        }
    }

    Ok(Box::new(HashingEmbedder::new()))
}
