// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage driver traits
//!
//! The graph snapshot and the disease cache only need ordered byte trees:
//! point reads and writes for cache entries, whole-tree replacement and
//! key-ordered scans for snapshots.

use super::types::{StorageResult, StorageType};

/// Owned key-value pair as stored in a tree
pub type KeyValue = (Vec<u8>, Vec<u8>);

/// A named, key-ordered collection of byte pairs within a driver.
///
/// Single-key writes are atomic with respect to concurrent readers.
pub trait StorageTree: Send + Sync {
    /// Insert a key-value pair, replacing any previous value
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()>;

    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &[u8]) -> StorageResult<()>;

    /// Replace the whole content of the tree with `entries` in one step.
    ///
    /// Readers see either the old content or the new one.
    fn replace_all(&self, entries: Vec<KeyValue>) -> StorageResult<()>;

    fn len(&self) -> StorageResult<usize>;

    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Iterate over all pairs in ascending key order
    fn iter(&self) -> StorageResult<Box<dyn Iterator<Item = StorageResult<KeyValue>> + '_>>;

    /// Flush pending writes of this tree to disk
    fn flush(&self) -> StorageResult<()>;
}

/// A key-value backend holding named trees
pub trait StorageDriver: Send + Sync {
    type Tree: StorageTree;

    /// Open or create a driver rooted at `path`
    fn open<P: AsRef<std::path::Path>>(path: P) -> StorageResult<Self>
    where
        Self: Sized;

    /// Open or create a named tree. Opening a name twice yields handles
    /// over the same data.
    fn open_tree(&self, name: &str) -> StorageResult<Self::Tree>;

    /// Flush all pending writes to disk
    fn flush(&self) -> StorageResult<()>;

    fn storage_type(&self) -> StorageType;

    /// Release the driver; the default just flushes
    fn shutdown(&self) -> StorageResult<()> {
        self.flush()
    }
}

impl StorageTree for Box<dyn StorageTree> {
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        (**self).insert(key, value)
    }

    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn remove(&self, key: &[u8]) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn replace_all(&self, entries: Vec<KeyValue>) -> StorageResult<()> {
        (**self).replace_all(entries)
    }

    fn len(&self) -> StorageResult<usize> {
        (**self).len()
    }

    fn iter(&self) -> StorageResult<Box<dyn Iterator<Item = StorageResult<KeyValue>> + '_>> {
        (**self).iter()
    }

    fn flush(&self) -> StorageResult<()> {
        (**self).flush()
    }
}
