//! Two-tier embedding cache keyed by content hash.
//!
//! The memory tier is a bounded map with FIFO eviction by insertion order;
//! the disk tier persists every vector write-through. A disk hit is promoted
//! back into the memory tier. Disk failures degrade the cache to memory-only
//! behavior instead of failing the lookup.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::path::Path;

use serde::Serialize;

use crate::store::DiskStore;

#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub memory_items: usize,
    pub max_memory_items: usize,
    pub disk_files: usize,
    pub disk_size_bytes: u64,
    pub max_disk_bytes: u64,
}

struct MemTier {
    map: HashMap<String, Vec<f32>>,
    order: VecDeque<String>,
}

pub struct VectorCache {
    mem: RefCell<MemTier>,
    disk: DiskStore,
    max_memory_items: usize,
}

impl VectorCache {
    pub fn new(
        dir: impl AsRef<Path>,
        max_memory_items: usize,
        max_disk_bytes: u64,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            mem: RefCell::new(MemTier {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
            disk: DiskStore::new(dir.as_ref(), max_disk_bytes)?,
            max_memory_items,
        })
    }

    pub fn get(&self, hash: &str) -> Option<Vec<f32>> {
        if let Some(v) = self.mem.borrow().map.get(hash) {
            return Some(v.clone());
        }
        let v = self.disk.load(hash)?;
        self.insert_memory(hash, v.clone());
        Some(v)
    }

    /// Write-through insert. Eviction runs on both tiers after the write.
    pub fn insert(&self, hash: &str, vector: &[f32]) {
        self.insert_memory(hash, vector.to_vec());
        if let Err(e) = self.disk.save(hash, vector) {
            tracing::warn!("failed to persist vector {hash}: {e}");
            return;
        }
        self.disk.evict_to_cap();
    }

    fn insert_memory(&self, hash: &str, vector: Vec<f32>) {
        let mut mem = self.mem.borrow_mut();
        // Overwrite keeps the original queue position.
        if mem.map.insert(hash.to_string(), vector).is_none() {
            mem.order.push_back(hash.to_string());
        }
        while mem.map.len() > self.max_memory_items {
            let Some(oldest) = mem.order.pop_front() else {
                break;
            };
            mem.map.remove(&oldest);
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            memory_items: self.mem.borrow().map.len(),
            max_memory_items: self.max_memory_items,
            disk_files: self.disk.file_count(),
            disk_size_bytes: self.disk.total_bytes(),
            max_disk_bytes: self.disk.max_bytes(),
        }
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        {
            let mut mem = self.mem.borrow_mut();
            mem.map.clear();
            mem.order.clear();
        }
        self.disk.clear()
    }
}
