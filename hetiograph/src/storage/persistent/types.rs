// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Storage driver types and error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which key-value backend holds the graph snapshot and the disease cache
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    /// Sled - embedded, on-disk
    #[default]
    Sled,

    /// Memory - process-local, for tests and one-shot runs
    Memory,
}

impl std::str::FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sled" => Ok(StorageType::Sled),
            "memory" => Ok(StorageType::Memory),
            _ => Err(format!(
                "Unknown storage type: {}. Valid options: sled, memory",
                s
            )),
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageType::Sled => "sled",
            StorageType::Memory => "memory",
        };
        write!(f, "{}", name)
    }
}

/// Error type for storage driver operations
#[derive(Debug, Error)]
pub enum StorageDriverError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend failure other than I/O
    #[error("Storage driver error: {0}")]
    BackendSpecific(String),
}

/// Result type for storage driver operations
pub type StorageResult<T> = Result<T, StorageDriverError>;
