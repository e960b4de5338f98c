// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph Coordinator - process-owned entry point for Hetiograph
//!
//! Threads one graph store, one storage driver and one disease cache
//! through ingestion, querying and cache building.

use super::responses::{elapsed_ms, DataSource, DiseaseInfoResult, TreatmentSearchResult};
use crate::cache::{CacheStats, DiseaseCache};
use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::ingest::{EdgeLoadReport, IngestionPipeline, NodeLoadReport, RawRecord};
use crate::query::QueryEngine;
use crate::storage::{create_storage_driver, GraphSnapshot, GraphStats, GraphStore, SharedDriver};
use parking_lot::RwLock;
use std::path::Path;
use std::time::Instant;

/// Graph Coordinator - owns the store, the driver and the cache
///
/// Ingestion takes the store's write lock for the whole batch. Queries and
/// cache rebuilds share the read lock, so they can run concurrently once
/// ingestion is done.
pub struct GraphCoordinator {
    config: DatabaseConfig,
    driver: SharedDriver,
    store: RwLock<GraphStore>,
    cache: DiseaseCache,
}

impl GraphCoordinator {
    /// Open the database described by `config`
    ///
    /// Restores the saved graph snapshot if one exists, otherwise starts
    /// with an empty graph.
    ///
    /// # Example
    /// ```no_run
    /// use hetiograph::{DatabaseConfig, GraphCoordinator};
    ///
    /// let coordinator = GraphCoordinator::open(DatabaseConfig::new("./hetionet_db"))?;
    /// if let Some(result) = coordinator.get_disease_info("Disease::DOID:0050156", true)? {
    ///     println!("{} drugs", result.info.drugs.len());
    /// }
    /// # Ok::<(), hetiograph::HetioError>(())
    /// ```
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        config.validate()?;

        let driver = create_storage_driver(config.storage_type, &config.path)?;
        let store = GraphSnapshot::load(driver.as_ref())?;
        let cache = DiseaseCache::open(driver.as_ref(), &config.cache)?;

        log::info!(
            "Opened {} database at {} ({} nodes, {} edges)",
            config.storage_type,
            config.path.display(),
            store.node_count(),
            store.edge_count()
        );

        Ok(Self {
            config,
            driver,
            store: RwLock::new(store),
            cache,
        })
    }

    /// Open a process-local database
    pub fn in_memory() -> Result<Self> {
        Self::open(DatabaseConfig::in_memory())
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Normalize and load node rows
    pub fn load_nodes<I>(&self, records: I) -> Result<NodeLoadReport>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut store = self.store.write();
        Ok(IngestionPipeline::new(&mut store).load_nodes(records)?)
    }

    /// Normalize and load edge rows
    pub fn load_edges<I>(&self, records: I) -> Result<EdgeLoadReport>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut store = self.store.write();
        Ok(IngestionPipeline::new(&mut store).load_edges(records)?)
    }

    pub fn load_nodes_file(&self, path: impl AsRef<Path>) -> Result<NodeLoadReport> {
        let mut store = self.store.write();
        Ok(IngestionPipeline::new(&mut store).load_nodes_file(path)?)
    }

    pub fn load_edges_file(&self, path: impl AsRef<Path>) -> Result<EdgeLoadReport> {
        let mut store = self.store.write();
        Ok(IngestionPipeline::new(&mut store).load_edges_file(path)?)
    }

    /// Persist the current graph, replacing any earlier snapshot
    pub fn save_graph(&self) -> Result<GraphStats> {
        let store = self.store.read();
        Ok(GraphSnapshot::save(self.driver.as_ref(), &store)?)
    }

    /// Recompute the cache entry of every disease.
    ///
    /// Returns the number of entries in the cache afterwards.
    pub fn build_cache(&self) -> Result<usize> {
        if !self.config.cache.enabled {
            log::warn!("Cache is disabled, skipping rebuild");
            return Ok(0);
        }
        let store = self.store.read();
        Ok(self.cache.rebuild_all(&QueryEngine::new(&store))?)
    }

    /// Drugs, genes and locations of a disease
    ///
    /// With `use_cache` the answer comes only from the cache; a miss
    /// returns `None` even if the disease exists in the graph. Without it
    /// the graph is queried directly.
    pub fn get_disease_info(
        &self,
        disease_id: &str,
        use_cache: bool,
    ) -> Result<Option<DiseaseInfoResult>> {
        let start = Instant::now();

        let (info, data_source) = if use_cache {
            if !self.config.cache.enabled {
                log::warn!(
                    "Cache is disabled, treating lookup of {} as a miss",
                    disease_id
                );
                return Ok(None);
            }
            (self.cache.get(disease_id)?, DataSource::Cache)
        } else {
            let store = self.store.read();
            (
                QueryEngine::new(&store).disease_info(disease_id),
                DataSource::Direct,
            )
        };

        Ok(info.map(|info| DiseaseInfoResult {
            info,
            query_time_ms: elapsed_ms(start),
            data_source,
        }))
    }

    /// Compounds that could treat a disease through opposite regulation
    pub fn find_candidate_treatments(&self, disease_id: &str) -> TreatmentSearchResult {
        let start = Instant::now();
        let treatments = {
            let store = self.store.read();
            QueryEngine::new(&store).candidate_treatments(disease_id)
        };

        TreatmentSearchResult {
            disease_id: disease_id.to_string(),
            potential_treatments_count: treatments.len(),
            treatments,
            query_time_ms: elapsed_ms(start),
        }
    }

    pub fn graph_stats(&self) -> GraphStats {
        self.store.read().stats()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Flush the driver and release the database
    pub fn close(self) -> Result<()> {
        self.driver.shutdown()?;
        log::info!("Closed database at {}", self.config.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;

    fn node(id: &str, name: &str, kind: &str) -> RawRecord {
        RawRecord::new()
            .with("id", id)
            .with("name", name)
            .with("kind", kind)
    }

    fn edge(source: &str, target: &str, metaedge: &str) -> RawRecord {
        RawRecord::new()
            .with("source", source)
            .with("target", target)
            .with("metaedge", metaedge)
    }

    fn loaded(config: DatabaseConfig) -> GraphCoordinator {
        let coordinator = GraphCoordinator::open(config).unwrap();
        coordinator
            .load_nodes(vec![
                node("D1", "Flu", "Disease"),
                node("G1", "GeneA", "Gene"),
                node("C1", "DrugA", "Compound"),
                node("A1", "Lung", "Anatomy"),
            ])
            .unwrap();
        coordinator
            .load_edges(vec![
                edge("C1", "D1", "CtD"),
                edge("D1", "G1", "DaG"),
                edge("D1", "A1", "DlA"),
            ])
            .unwrap();
        coordinator
    }

    #[test]
    fn test_direct_lookup_reports_source() {
        let coordinator = loaded(DatabaseConfig::in_memory());
        let result = coordinator.get_disease_info("D1", false).unwrap().unwrap();
        assert_eq!(result.data_source, DataSource::Direct);
        assert_eq!(result.info.drugs.len(), 1);
        assert!(result.query_time_ms >= 0.0);
    }

    #[test]
    fn test_cache_lookup_misses_until_built() {
        let coordinator = loaded(DatabaseConfig::in_memory());
        assert!(coordinator.get_disease_info("D1", true).unwrap().is_none());

        assert_eq!(coordinator.build_cache().unwrap(), 1);
        let cached = coordinator.get_disease_info("D1", true).unwrap().unwrap();
        let direct = coordinator.get_disease_info("D1", false).unwrap().unwrap();
        assert_eq!(cached.data_source, DataSource::Cache);
        assert_eq!(cached.info, direct.info);
        assert_eq!(coordinator.cache_stats().hits, 1);
    }

    #[test]
    fn test_disabled_cache_is_a_miss() {
        let config = DatabaseConfig::in_memory().with_cache(CacheConfig::disabled());
        let coordinator = loaded(config);
        assert_eq!(coordinator.build_cache().unwrap(), 0);
        assert!(coordinator.get_disease_info("D1", true).unwrap().is_none());
        assert!(coordinator.get_disease_info("D1", false).unwrap().is_some());
    }

    #[test]
    fn test_unknown_disease_has_zero_treatments() {
        let coordinator = loaded(DatabaseConfig::in_memory());
        let result = coordinator.find_candidate_treatments("D404");
        assert_eq!(result.disease_id, "D404");
        assert_eq!(result.potential_treatments_count, 0);
        assert!(result.treatments.is_empty());
    }

    #[test]
    fn test_save_graph_reports_stats() {
        let coordinator = loaded(DatabaseConfig::in_memory());
        let stats = coordinator.save_graph().unwrap();
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(coordinator.graph_stats(), stats);
        coordinator.close().unwrap();
    }
}
