// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Derived cache of neighborhood-aggregation results
//!
//! Entries are keyed by disease id and hold only the base fields of a
//! [`DiseaseInfo`]. They are written solely by [`DiseaseCache::rebuild_all`]
//! and are never invalidated: after the graph changes, entries stay stale
//! until the next rebuild.

use super::cache_config::CacheConfig;
use super::error::CacheError;
use crate::query::{DiseaseInfo, QueryEngine};
use crate::storage::{Node, StorageDriver, StorageTree};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

/// Persisted cache entry: the non-ephemeral part of a disease query
pub type CacheEntry = DiseaseInfo;

/// Point-in-time cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_written: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Disease cache backed by a storage driver tree
pub struct DiseaseCache {
    tree: Box<dyn StorageTree>,
    hits: AtomicU64,
    misses: AtomicU64,
    entries_written: AtomicU64,
}

impl DiseaseCache {
    /// Open (or create) the cache tree named by `config`
    pub fn open(
        driver: &dyn StorageDriver<Tree = Box<dyn StorageTree>>,
        config: &CacheConfig,
    ) -> Result<Self, CacheError> {
        config.validate().map_err(CacheError::Config)?;
        let tree = driver.open_tree(&config.tree_name)?;
        Ok(Self {
            tree,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            entries_written: AtomicU64::new(0),
        })
    }

    /// Recompute and upsert the entry of every disease in the graph.
    ///
    /// Diseases are recomputed in parallel; each upsert replaces one entry
    /// on its own, so concurrent readers may see a mix of old and new
    /// entries until the rebuild finishes. Returns the number of entries
    /// held by the cache afterwards.
    pub fn rebuild_all(&self, engine: &QueryEngine<'_>) -> Result<usize, CacheError> {
        let diseases: Vec<&Node> = engine.diseases().collect();
        log::info!("Building cache for {} diseases", diseases.len());

        diseases.par_iter().try_for_each(|disease| {
            match engine.disease_info(&disease.id) {
                Some(entry) => self.upsert(&entry),
                None => Ok(()),
            }
        })?;
        self.tree.flush()?;

        let cached = self.len()?;
        log::info!("Cached {} diseases", cached);
        Ok(cached)
    }

    /// Replace the entry for `entry.id`
    pub fn upsert(&self, entry: &CacheEntry) -> Result<(), CacheError> {
        let data = bincode::serialize(entry)?;
        self.tree.insert(entry.id.as_bytes(), &data)?;
        self.entries_written.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Look up a cached entry
    pub fn get(&self, disease_id: &str) -> Result<Option<CacheEntry>, CacheError> {
        match self.tree.get(disease_id.as_bytes())? {
            Some(data) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(bincode::deserialize(&data)?))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    /// Number of cached entries
    pub fn len(&self) -> Result<usize, CacheError> {
        Ok(self.tree.len()?)
    }

    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.tree.is_empty()?)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_written: self.entries_written.load(Ordering::Relaxed),
        }
    }
}
