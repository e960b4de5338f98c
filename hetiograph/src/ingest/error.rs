// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for bulk ingestion

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    /// A required column is absent (or blank under every alias)
    #[error("Record {record}: missing required field '{field}'")]
    MissingField { record: usize, field: &'static str },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TSV input: {0}")]
    Tsv(#[from] csv::Error),
}
