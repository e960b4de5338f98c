// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query engine over a read-only graph store

use crate::schema::NodeKind;
use crate::storage::{GraphStore, Node};

/// Executes the domain queries as pattern matches over the store's
/// adjacency indexes. Borrowing the store keeps it read-only for the
/// engine's lifetime, so engines may run in parallel.
#[derive(Clone, Copy)]
pub struct QueryEngine<'g> {
    pub(super) store: &'g GraphStore,
}

impl<'g> QueryEngine<'g> {
    pub fn new(store: &'g GraphStore) -> Self {
        Self { store }
    }

    /// All disease nodes, in insertion order
    pub fn diseases(&self) -> impl Iterator<Item = &'g Node> + 'g {
        self.store.nodes_of_kind(&NodeKind::Disease)
    }
}
