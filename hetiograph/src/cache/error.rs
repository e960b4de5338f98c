// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the disease cache

use crate::storage::StorageDriverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache storage error: {0}")]
    Storage(#[from] StorageDriverError),

    #[error("Cache entry encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("Invalid cache configuration: {0}")]
    Config(String),
}
