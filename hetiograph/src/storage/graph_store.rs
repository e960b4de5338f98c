// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-memory typed property graph
//!
//! Nodes live in an append-only arena and are partitioned by kind, each
//! partition carrying its own id index. Adjacency lists are partitioned by
//! relationship type so a traversal touches only the requested types.

use crate::schema::{NodeKind, RelationshipType};
use crate::storage::types::{Edge, GraphStats, Node, NodeSlot};
use std::collections::HashMap;

/// Nodes of one kind plus their id index
#[derive(Debug, Default, Clone)]
struct KindPartition {
    members: Vec<NodeSlot>,
    ids: HashMap<String, NodeSlot>,
}

#[derive(Debug, Clone)]
struct EdgeEntry {
    source: NodeSlot,
    target: NodeSlot,
    relationship: RelationshipType,
}

/// Adjacency for a single relationship type: node slot -> neighbor slots
type Adjacency = HashMap<NodeSlot, Vec<NodeSlot>>;

/// A node reached by a traversal, with the relationship that led to it
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    pub slot: NodeSlot,
    pub node: &'a Node,
    pub relationship: &'a RelationshipType,
}

/// Typed, indexed property graph
#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    /// Node arena; a slot is never reused for another id
    nodes: Vec<Node>,

    /// Global index: id -> slot
    id_index: HashMap<String, NodeSlot>,

    /// Index: kind -> members and per-kind id index
    partitions: HashMap<NodeKind, KindPartition>,

    /// Materialized edges in insertion order
    edges: Vec<EdgeEntry>,

    /// Relationship type -> outgoing adjacency
    adjacency_out: HashMap<RelationshipType, Adjacency>,

    /// Relationship type -> incoming adjacency
    adjacency_in: HashMap<RelationshipType, Adjacency>,
}

impl GraphStore {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `(id, name)` records as nodes of `kind`.
    ///
    /// A record whose id already exists overwrites the earlier node in place,
    /// moving it to `kind`'s partition if the kind changed. Every record
    /// materializes, so the return value always equals the number of records.
    pub fn insert_nodes<I>(&mut self, kind: &NodeKind, records: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut inserted = 0;
        for (id, name) in records {
            self.insert_node(Node::new(id, name, kind.clone()));
            inserted += 1;
        }
        inserted
    }

    fn insert_node(&mut self, node: Node) {
        if let Some(&slot) = self.id_index.get(&node.id) {
            let previous = std::mem::replace(&mut self.nodes[slot], node);
            let current_kind = self.nodes[slot].kind.clone();
            if previous.kind != current_kind {
                log::debug!(
                    "Node {} re-inserted as {} (was {})",
                    previous.id,
                    current_kind,
                    previous.kind
                );
                if let Some(partition) = self.partitions.get_mut(&previous.kind) {
                    partition.members.retain(|member| *member != slot);
                    partition.ids.remove(&previous.id);
                }
                let partition = self.partitions.entry(current_kind).or_default();
                partition.members.push(slot);
                partition.ids.insert(previous.id, slot);
            }
            return;
        }

        let slot = self.nodes.len();
        let partition = self.partitions.entry(node.kind.clone()).or_default();
        partition.members.push(slot);
        partition.ids.insert(node.id.clone(), slot);
        self.id_index.insert(node.id.clone(), slot);
        self.nodes.push(node);
    }

    /// Insert `(source_id, target_id)` pairs as edges of `relationship`.
    ///
    /// An edge materializes only when both endpoints resolve; otherwise the
    /// pair is dropped without error. Returns the number materialized, which
    /// callers compare with the number submitted to detect missing endpoints.
    /// Duplicate pairs are stored as given.
    pub fn insert_edges<I>(&mut self, relationship: &RelationshipType, pairs: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut materialized = 0;
        for (source_id, target_id) in pairs {
            let (Some(&source), Some(&target)) =
                (self.id_index.get(&source_id), self.id_index.get(&target_id))
            else {
                continue;
            };

            self.adjacency_out
                .entry(relationship.clone())
                .or_default()
                .entry(source)
                .or_default()
                .push(target);
            self.adjacency_in
                .entry(relationship.clone())
                .or_default()
                .entry(target)
                .or_default()
                .push(source);
            self.edges.push(EdgeEntry {
                source,
                target,
                relationship: relationship.clone(),
            });
            materialized += 1;
        }
        materialized
    }

    /// Ensure an id index exists for `kind`. Returns true if it was created.
    pub fn create_index(&mut self, kind: &NodeKind) -> bool {
        if self.partitions.contains_key(kind) {
            return false;
        }
        self.partitions.insert(kind.clone(), KindPartition::default());
        true
    }

    /// Check whether an id index exists for `kind`
    pub fn has_index(&self, kind: &NodeKind) -> bool {
        self.partitions.contains_key(kind)
    }

    /// Get a node by id, whatever its kind
    pub fn lookup_node(&self, id: &str) -> Option<&Node> {
        self.id_index.get(id).map(|slot| &self.nodes[*slot])
    }

    /// Get a node by id through the index of one kind
    pub fn lookup_in_kind(&self, kind: &NodeKind, id: &str) -> Option<(NodeSlot, &Node)> {
        let slot = *self.partitions.get(kind)?.ids.get(id)?;
        Some((slot, &self.nodes[slot]))
    }

    /// Get the node stored at `slot`
    pub fn node_at(&self, slot: NodeSlot) -> Option<&Node> {
        self.nodes.get(slot)
    }

    /// All nodes of a kind, in insertion order
    pub fn nodes_of_kind<'a>(&'a self, kind: &NodeKind) -> impl Iterator<Item = &'a Node> + 'a {
        self.partitions
            .get(kind)
            .into_iter()
            .flat_map(|partition| partition.members.iter())
            .map(move |slot| &self.nodes[*slot])
    }

    /// All nodes, in arena order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// All materialized edges, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|entry| {
            Edge::new(
                self.nodes[entry.source].id.clone(),
                self.nodes[entry.target].id.clone(),
                entry.relationship.clone(),
            )
        })
    }

    /// Kinds with an index, sorted
    pub fn kinds(&self) -> Vec<&NodeKind> {
        let mut kinds: Vec<&NodeKind> = self.partitions.keys().collect();
        kinds.sort();
        kinds
    }

    /// Outgoing neighbors of the node with `id` over any of `relationships`
    pub fn outgoing(&self, id: &str, relationships: &[RelationshipType]) -> Vec<Neighbor<'_>> {
        match self.id_index.get(id) {
            Some(&slot) => self.outgoing_from(slot, relationships),
            None => Vec::new(),
        }
    }

    /// Incoming neighbors of the node with `id` over any of `relationships`
    pub fn incoming(&self, id: &str, relationships: &[RelationshipType]) -> Vec<Neighbor<'_>> {
        match self.id_index.get(id) {
            Some(&slot) => self.incoming_to(slot, relationships),
            None => Vec::new(),
        }
    }

    /// Outgoing neighbors of the node at `slot`
    pub fn outgoing_from(
        &self,
        slot: NodeSlot,
        relationships: &[RelationshipType],
    ) -> Vec<Neighbor<'_>> {
        Self::collect_neighbors(&self.nodes, &self.adjacency_out, slot, relationships)
    }

    /// Incoming neighbors of the node at `slot`
    pub fn incoming_to(
        &self,
        slot: NodeSlot,
        relationships: &[RelationshipType],
    ) -> Vec<Neighbor<'_>> {
        Self::collect_neighbors(&self.nodes, &self.adjacency_in, slot, relationships)
    }

    fn collect_neighbors<'a>(
        nodes: &'a [Node],
        adjacency: &'a HashMap<RelationshipType, Adjacency>,
        slot: NodeSlot,
        relationships: &[RelationshipType],
    ) -> Vec<Neighbor<'a>> {
        let mut neighbors = Vec::new();
        for wanted in relationships {
            let Some((relationship, by_node)) = adjacency.get_key_value(wanted) else {
                continue;
            };
            if let Some(slots) = by_node.get(&slot) {
                neighbors.extend(slots.iter().map(|other| Neighbor {
                    slot: *other,
                    node: &nodes[*other],
                    relationship,
                }));
            }
        }
        neighbors
    }

    /// Get node count
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get edge count
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph is empty (no nodes and no edges)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            kind_count: self.partitions.len(),
            relationship_type_count: self.adjacency_out.len(),
        }
    }
}
