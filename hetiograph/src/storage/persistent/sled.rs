// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Sled storage driver

use super::traits::{KeyValue, StorageDriver, StorageTree};
use super::types::{StorageDriverError, StorageResult, StorageType};
use std::path::Path;

impl From<sled::Error> for StorageDriverError {
    fn from(e: sled::Error) -> Self {
        match e {
            sled::Error::Io(io) => StorageDriverError::Io(io),
            other => StorageDriverError::BackendSpecific(other.to_string()),
        }
    }
}

/// Driver over one sled database directory
pub struct SledDriver {
    db: sled::Db,
}

/// Handle to one sled tree
pub struct SledTree {
    tree: sled::Tree,
}

impl StorageTree for SledTree {
    fn insert(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        self.tree.insert(key, value)?;
        Ok(())
    }

    fn get(&self, key: &[u8]) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.tree.get(key)?.map(|v| v.to_vec()))
    }

    fn remove(&self, key: &[u8]) -> StorageResult<()> {
        self.tree.remove(key)?;
        Ok(())
    }

    fn replace_all(&self, entries: Vec<KeyValue>) -> StorageResult<()> {
        // Removals and inserts go into one batch so the swap is atomic
        let mut batch = sled::Batch::default();
        for key in self.tree.iter().keys() {
            batch.remove(key?);
        }
        for (key, value) in entries {
            batch.insert(key, value);
        }
        self.tree.apply_batch(batch)?;
        Ok(())
    }

    fn len(&self) -> StorageResult<usize> {
        Ok(self.tree.len())
    }

    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.tree.is_empty())
    }

    fn iter(&self) -> StorageResult<Box<dyn Iterator<Item = StorageResult<KeyValue>> + '_>> {
        let iter = self.tree.iter().map(|result| {
            let (k, v) = result?;
            Ok((k.to_vec(), v.to_vec()))
        });
        Ok(Box::new(iter))
    }

    fn flush(&self) -> StorageResult<()> {
        self.tree.flush()?;
        Ok(())
    }
}

impl StorageDriver for SledDriver {
    type Tree = Box<dyn StorageTree>;

    fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let db = sled::Config::new().path(path.as_ref()).open()?;
        log::debug!("Opened sled database at {}", path.as_ref().display());
        Ok(SledDriver { db })
    }

    fn open_tree(&self, name: &str) -> StorageResult<Self::Tree> {
        let tree = self.db.open_tree(name)?;
        Ok(Box::new(SledTree { tree }))
    }

    fn flush(&self) -> StorageResult<()> {
        self.db.flush()?;
        Ok(())
    }

    fn storage_type(&self) -> StorageType {
        StorageType::Sled
    }
}
