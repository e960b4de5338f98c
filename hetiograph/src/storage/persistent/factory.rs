// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage driver factory

use super::traits::{StorageDriver, StorageTree};
use super::types::{StorageResult, StorageType};
use std::path::Path;
use std::sync::Arc;

/// Shared, type-erased driver handle
pub type SharedDriver = Arc<dyn StorageDriver<Tree = Box<dyn StorageTree>>>;

/// Create a storage driver for `storage_type` rooted at `path`.
///
/// The memory backend ignores `path`.
pub fn create_storage_driver<P: AsRef<Path>>(
    storage_type: StorageType,
    path: P,
) -> StorageResult<SharedDriver> {
    match storage_type {
        #[cfg(feature = "sled-backend")]
        StorageType::Sled => {
            use crate::storage::persistent::sled::SledDriver;
            let driver = SledDriver::open(path)?;
            Ok(Arc::new(driver) as SharedDriver)
        }
        #[cfg(not(feature = "sled-backend"))]
        StorageType::Sled => Err(super::types::StorageDriverError::BackendSpecific(
            "Sled backend not compiled in (enable the `sled-backend` feature)".to_string(),
        )),
        StorageType::Memory => {
            use crate::storage::persistent::memory::MemoryStorageDriver;
            let driver = MemoryStorageDriver::open(path)?;
            Ok(Arc::new(driver) as SharedDriver)
        }
    }
}
