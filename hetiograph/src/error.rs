// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Crate-level error type

use crate::cache::CacheError;
use crate::ingest::IngestError;
use crate::storage::{GraphError, StorageDriverError};
use thiserror::Error;

/// Any failure surfaced by the public API.
///
/// An absent entity is not an error (queries return `None` or an empty
/// result), and neither is an edge whose endpoint is missing (it shows up
/// as a count difference in the load report).
#[derive(Error, Debug)]
pub enum HetioError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Storage(#[from] StorageDriverError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, HetioError>;
