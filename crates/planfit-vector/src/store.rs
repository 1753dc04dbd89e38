//! Disk tier of the embedding cache.
//!
//! One flat file per vector, `<content-hash>.vec`, raw little-endian f32.
//! When the directory grows past its byte cap the oldest files (by mtime)
//! are deleted until usage drops to 80% of the cap.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

const VECTOR_EXT: &str = "vec";

/// Fraction of the byte cap to shrink down to once the cap is exceeded,
/// so eviction does not fire on every subsequent write.
const EVICT_TARGET_RATIO: f64 = 0.8;

pub struct DiskStore {
    dir: PathBuf,
    max_bytes: u64,
}

impl DiskStore {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: u64) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, max_bytes })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    fn path_for(&self, hash: &str) -> PathBuf {
        self.dir.join(format!("{hash}.{VECTOR_EXT}"))
    }

    /// Read a vector back, or `None` when the file is missing or unreadable.
    /// A torn file (length not a multiple of 4) is treated as a miss.
    pub fn load(&self, hash: &str) -> Option<Vec<f32>> {
        let path = self.path_for(hash);
        let bytes = fs::read(&path).ok()?;
        if bytes.len() % 4 != 0 {
            tracing::warn!("discarding malformed cache file {}", path.display());
            let _ = fs::remove_file(&path);
            return None;
        }
        Some(
            bytes
                .chunks_exact(4)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        )
    }

    pub fn save(&self, hash: &str, vector: &[f32]) -> std::io::Result<()> {
        let mut bytes = Vec::with_capacity(vector.len() * 4);
        for x in vector {
            bytes.extend_from_slice(&x.to_le_bytes());
        }
        fs::write(self.path_for(hash), bytes)
    }

    /// Delete oldest-first until usage is at or below 80% of the cap.
    /// Only runs once the cap itself is exceeded.
    pub fn evict_to_cap(&self) {
        let mut entries = self.entries();
        let mut total: u64 = entries.iter().map(|e| e.1).sum();
        if total <= self.max_bytes {
            return;
        }
        let target = (self.max_bytes as f64 * EVICT_TARGET_RATIO) as u64;
        entries.sort_by_key(|e| e.2);
        for (path, size, _) in entries {
            if total <= target {
                break;
            }
            match fs::remove_file(&path) {
                Ok(()) => total = total.saturating_sub(size),
                Err(e) => tracing::warn!("cache eviction failed for {}: {e}", path.display()),
            }
        }
    }

    pub fn file_count(&self) -> usize {
        self.entries().len()
    }

    pub fn total_bytes(&self) -> u64 {
        self.entries().iter().map(|e| e.1).sum()
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        for (path, _, _) in self.entries() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn entries(&self) -> Vec<(PathBuf, u64, SystemTime)> {
        let mut out = Vec::new();
        let Ok(read) = fs::read_dir(&self.dir) else {
            return out;
        };
        for entry in read.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(VECTOR_EXT) {
                continue;
            }
            let Ok(meta) = entry.metadata() else { continue };
            let mtime = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            out.push((path, meta.len(), mtime));
        }
        out
    }
}
