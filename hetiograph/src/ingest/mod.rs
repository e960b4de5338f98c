// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Bulk ingestion of node and edge records

pub mod error;
pub mod pipeline;
pub mod records;
pub mod tsv;

pub use error::IngestError;
pub use pipeline::{
    EdgeLoadReport, IngestionPipeline, KindCount, NodeLoadReport, RelationshipCount,
};
pub use records::{EdgeRecord, NodeRecord, RawRecord};
