// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph storage implementation
//!
//! This module provides:
//! - In-memory typed graph with per-kind id indexes
//! - Adjacency lists partitioned by relationship type
//! - Pluggable key-value drivers (sled, memory)
//! - Snapshot persistence of the whole graph through a driver

pub mod graph_store;
pub mod persistent;
pub mod snapshot;
pub mod types;

pub use graph_store::{GraphStore, Neighbor};
pub use persistent::{
    create_storage_driver, SharedDriver, StorageDriver, StorageDriverError, StorageTree,
    StorageType,
};
pub use snapshot::{GraphSnapshot, SnapshotMetadata};
pub use types::{Edge, GraphError, GraphStats, Node, NodeSlot};
