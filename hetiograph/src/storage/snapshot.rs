// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph snapshot adapter
//!
//! Persists a whole [`GraphStore`] through a storage driver and restores it.
//! Nodes are written in arena order and edges in insertion order, keyed by a
//! big-endian sequence number so a key-ordered scan replays them unchanged.

use crate::schema::{NodeKind, RelationshipType};
use crate::storage::graph_store::GraphStore;
use crate::storage::persistent::{KeyValue, StorageDriver, StorageTree};
use crate::storage::types::{Edge, GraphError, GraphStats, Node};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const NODES_TREE: &str = "graph_nodes";
const EDGES_TREE: &str = "graph_edges";
const METADATA_TREE: &str = "graph_metadata";
const METADATA_KEY: &[u8] = b"snapshot";

/// Summary stored next to a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub node_count: usize,
    pub edge_count: usize,
    /// Kinds with an index, including ones that hold no nodes
    pub kinds: Vec<NodeKind>,
    pub saved_at: DateTime<Utc>,
}

/// Reads and writes graph snapshots
pub struct GraphSnapshot;

impl GraphSnapshot {
    /// Replace any stored snapshot with `graph`
    ///
    /// A save that fails partway leaves no snapshot behind, so the next
    /// [`load`](Self::load) starts empty instead of restoring a mix of old
    /// and new trees.
    pub fn save(
        driver: &dyn StorageDriver<Tree = Box<dyn StorageTree>>,
        graph: &GraphStore,
    ) -> Result<GraphStats, GraphError> {
        let nodes = graph
            .nodes()
            .enumerate()
            .map(|(seq, node)| -> Result<KeyValue, GraphError> {
                Ok((Self::sequence_key(seq), bincode::serialize(node)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let edges = graph
            .edges()
            .enumerate()
            .map(|(seq, edge)| -> Result<KeyValue, GraphError> {
                Ok((Self::sequence_key(seq), bincode::serialize(&edge)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let metadata = SnapshotMetadata {
            node_count: nodes.len(),
            edge_count: edges.len(),
            kinds: graph.kinds().into_iter().cloned().collect(),
            saved_at: Utc::now(),
        };
        let metadata_bytes = serde_json::to_vec(&metadata)?;

        // The metadata key marks a complete snapshot: it is dropped before
        // the data trees change and written back only after both are in place
        let metadata_tree = driver.open_tree(METADATA_TREE)?;
        metadata_tree.remove(METADATA_KEY)?;
        metadata_tree.flush()?;
        driver.open_tree(NODES_TREE)?.replace_all(nodes)?;
        driver.open_tree(EDGES_TREE)?.replace_all(edges)?;
        driver.flush()?;
        metadata_tree.insert(METADATA_KEY, &metadata_bytes)?;
        driver.flush()?;

        log::info!(
            "Saved graph snapshot: {} nodes, {} edges",
            metadata.node_count,
            metadata.edge_count
        );
        Ok(graph.stats())
    }

    /// Restore the stored snapshot, or an empty graph if none was saved
    pub fn load(
        driver: &dyn StorageDriver<Tree = Box<dyn StorageTree>>,
    ) -> Result<GraphStore, GraphError> {
        let mut graph = GraphStore::new();
        let Some(metadata) = Self::metadata(driver)? else {
            if driver.open_tree(NODES_TREE)?.is_empty()? {
                log::debug!("No graph snapshot found, starting empty");
            } else {
                log::warn!("Ignoring incomplete graph snapshot, starting empty");
            }
            return Ok(graph);
        };

        let nodes_tree = driver.open_tree(NODES_TREE)?;
        let mut node_runs = Vec::new();
        for result in nodes_tree.iter()? {
            let (_, data) = result?;
            let node: Node = bincode::deserialize(&data)?;
            Self::push_run(&mut node_runs, node.kind, (node.id, node.name));
        }
        for (kind, batch) in node_runs {
            graph.insert_nodes(&kind, batch);
        }
        for kind in &metadata.kinds {
            graph.create_index(kind);
        }

        let edges_tree = driver.open_tree(EDGES_TREE)?;
        let mut edge_runs = Vec::new();
        for result in edges_tree.iter()? {
            let (_, data) = result?;
            let edge: Edge = bincode::deserialize(&data)?;
            Self::push_run(
                &mut edge_runs,
                edge.relationship_type,
                (edge.source_id, edge.target_id),
            );
        }
        for (relationship, batch) in edge_runs {
            Self::restore_edges(&mut graph, &relationship, batch)?;
        }

        if graph.node_count() != metadata.node_count || graph.edge_count() != metadata.edge_count
        {
            return Err(GraphError::InvalidSnapshot(format!(
                "expected {} nodes / {} edges, restored {} / {}",
                metadata.node_count,
                metadata.edge_count,
                graph.node_count(),
                graph.edge_count()
            )));
        }

        log::info!(
            "Loaded graph snapshot saved at {}: {} nodes, {} edges",
            metadata.saved_at.to_rfc3339(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Metadata of the stored snapshot, if any
    pub fn metadata(
        driver: &dyn StorageDriver<Tree = Box<dyn StorageTree>>,
    ) -> Result<Option<SnapshotMetadata>, GraphError> {
        let metadata_tree = driver.open_tree(METADATA_TREE)?;
        match metadata_tree.get(METADATA_KEY)? {
            Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
            None => Ok(None),
        }
    }

    fn restore_edges(
        graph: &mut GraphStore,
        relationship: &RelationshipType,
        batch: Vec<(String, String)>,
    ) -> Result<(), GraphError> {
        let expected = batch.len();
        let restored = graph.insert_edges(relationship, batch);
        if restored != expected {
            return Err(GraphError::InvalidSnapshot(format!(
                "{} of {} {} edges reference missing nodes",
                expected - restored,
                expected,
                relationship
            )));
        }
        Ok(())
    }

    /// Append `pair` to the last run if it has the same key, else start a new run
    fn push_run<K: PartialEq>(
        runs: &mut Vec<(K, Vec<(String, String)>)>,
        key: K,
        pair: (String, String),
    ) {
        if let Some((last, batch)) = runs.last_mut() {
            if *last == key {
                batch.push(pair);
                return;
            }
        }
        runs.push((key, vec![pair]));
    }

    fn sequence_key(seq: usize) -> Vec<u8> {
        (seq as u64).to_be_bytes().to_vec()
    }
}
