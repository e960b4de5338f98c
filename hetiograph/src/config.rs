// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Database configuration

use crate::cache::CacheConfig;
use crate::error::{HetioError, Result};
use crate::storage::StorageType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where and how the graph snapshot and the disease cache are stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database directory (ignored by the memory backend)
    pub path: PathBuf,

    /// Key-value backend for snapshot and cache
    pub storage_type: StorageType,

    pub cache: CacheConfig,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./hetionet_db"),
            storage_type: StorageType::Sled,
            cache: CacheConfig::default(),
        }
    }
}

impl DatabaseConfig {
    /// Sled-backed database at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Process-local database, nothing touches disk
    pub fn in_memory() -> Self {
        Self {
            storage_type: StorageType::Memory,
            ..Self::default()
        }
    }

    pub fn with_storage_type(mut self, storage_type: StorageType) -> Self {
        self.storage_type = storage_type;
        self
    }

    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Read a JSON configuration file; absent keys take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            HetioError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            HetioError::Config(format!("Invalid configuration in {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.cache.validate().map_err(HetioError::Config)?;
        if self.storage_type == StorageType::Sled && self.path.as_os_str().is_empty() {
            return Err(HetioError::Config(
                "A database path is required for the sled backend".to_string(),
            ));
        }
        Ok(())
    }
}
