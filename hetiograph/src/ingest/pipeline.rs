// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Bulk ingestion pipeline
//!
//! Normalizes every record first, so a malformed row fails the whole batch
//! before anything is written, then loads one group per node kind or per
//! metaedge code.

use super::error::IngestError;
use super::records::{EdgeRecord, NodeRecord, RawRecord};
use super::tsv;
use crate::schema::{NodeKind, RelationshipType, TypeRegistry};
use crate::storage::GraphStore;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;

/// Nodes submitted for one kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindCount {
    pub kind: NodeKind,
    pub submitted: usize,
}

/// Outcome of a node load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeLoadReport {
    /// Per-kind counts in first-seen order
    pub kinds: Vec<KindCount>,
    /// Kinds whose index did not exist before this load
    pub indexes_created: Vec<NodeKind>,
}

impl NodeLoadReport {
    pub fn total_submitted(&self) -> usize {
        self.kinds.iter().map(|k| k.submitted).sum()
    }
}

/// Edges submitted and materialized for one metaedge code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipCount {
    pub metaedge: String,
    pub relationship: RelationshipType,
    pub submitted: usize,
    pub materialized: usize,
}

impl RelationshipCount {
    /// Count reported to operators as "created".
    ///
    /// This is the submitted count, not the materialized one: pairs whose
    /// endpoints are missing are still counted here. Compare with
    /// `materialized` to detect the gap.
    pub fn created(&self) -> usize {
        self.submitted
    }

    /// Pairs dropped because an endpoint was missing
    pub fn unmaterialized(&self) -> usize {
        self.submitted - self.materialized
    }
}

/// Outcome of an edge load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdgeLoadReport {
    /// Per-metaedge counts in first-seen order
    pub groups: Vec<RelationshipCount>,
}

impl EdgeLoadReport {
    pub fn total_submitted(&self) -> usize {
        self.groups.iter().map(|g| g.submitted).sum()
    }

    pub fn total_materialized(&self) -> usize {
        self.groups.iter().map(|g| g.materialized).sum()
    }

    /// True if any submitted pair was not materialized
    pub fn has_discrepancy(&self) -> bool {
        self.total_materialized() < self.total_submitted()
    }
}

/// Loads normalized records into a [`GraphStore`]
pub struct IngestionPipeline<'a> {
    store: &'a mut GraphStore,
}

impl<'a> IngestionPipeline<'a> {
    pub fn new(store: &'a mut GraphStore) -> Self {
        Self { store }
    }

    /// Normalize and load raw node rows
    pub fn load_nodes<I>(&mut self, records: I) -> Result<NodeLoadReport, IngestError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let normalized = records
            .into_iter()
            .enumerate()
            .map(|(i, raw)| NodeRecord::from_raw(&raw, i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.load_node_records(normalized))
    }

    /// Load already-normalized node records.
    ///
    /// Groups by kind preserving input order within each group, inserts each
    /// group once, then ensures an index for every observed kind and for the
    /// core kinds.
    pub fn load_node_records(&mut self, records: Vec<NodeRecord>) -> NodeLoadReport {
        let groups = group_in_order(records.into_iter().map(|r| (r.kind, (r.id, r.name))));

        let mut report = NodeLoadReport::default();
        for (kind, batch) in groups {
            let submitted = batch.len();
            self.store.insert_nodes(&kind, batch);
            log::info!("Created {} {} nodes", submitted, kind);
            report.kinds.push(KindCount { kind, submitted });
        }

        let observed = report.kinds.iter().map(|k| &k.kind);
        for kind in observed.chain(NodeKind::CORE.iter()) {
            if self.store.create_index(kind) {
                report.indexes_created.push(kind.clone());
            }
        }
        log::info!("Ensured indexes for {} kinds", self.store.kinds().len());

        report
    }

    /// Normalize and load raw edge rows
    pub fn load_edges<I>(&mut self, records: I) -> Result<EdgeLoadReport, IngestError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let normalized = records
            .into_iter()
            .enumerate()
            .map(|(i, raw)| EdgeRecord::from_raw(&raw, i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.load_edge_records(normalized))
    }

    /// Load already-normalized edge records.
    ///
    /// Groups by raw metaedge code and canonicalizes each code once.
    pub fn load_edge_records(&mut self, records: Vec<EdgeRecord>) -> EdgeLoadReport {
        let groups =
            group_in_order(records.into_iter().map(|r| (r.metaedge, (r.source, r.target))));

        let mut report = EdgeLoadReport::default();
        for (metaedge, pairs) in groups {
            let relationship = TypeRegistry::canonicalize(&metaedge);
            let submitted = pairs.len();
            let materialized = self.store.insert_edges(&relationship, pairs);

            log::info!("Created {} {} relationships", submitted, relationship);
            if materialized < submitted {
                log::warn!(
                    "{} of {} {} ({}) pairs reference missing nodes and were not materialized",
                    submitted - materialized,
                    submitted,
                    relationship,
                    metaedge
                );
            }

            report.groups.push(RelationshipCount {
                metaedge,
                relationship,
                submitted,
                materialized,
            });
        }
        report
    }

    /// Read and load a nodes TSV file
    pub fn load_nodes_file(&mut self, path: impl AsRef<Path>) -> Result<NodeLoadReport, IngestError> {
        log::info!("Loading nodes from {}", path.as_ref().display());
        let records = tsv::read_records_from_path(path)?;
        self.load_nodes(records)
    }

    /// Read and load an edges TSV file
    pub fn load_edges_file(&mut self, path: impl AsRef<Path>) -> Result<EdgeLoadReport, IngestError> {
        log::info!("Loading edges from {}", path.as_ref().display());
        let records = tsv::read_records_from_path(path)?;
        self.load_edges(records)
    }
}

/// Group values by key, keeping groups in first-seen order and values in
/// input order within each group
fn group_in_order<K, V, I>(items: I) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();
    for (key, value) in items {
        match positions.get(&key) {
            Some(&i) => groups[i].1.push(value),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![value]));
            }
        }
    }
    groups
}
