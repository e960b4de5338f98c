// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Hetiograph - An embedded biomedical knowledge graph
//!
//! Hetiograph loads a heterogeneous network of genes, compounds, diseases
//! and anatomical sites from TSV node and edge lists, answers two domain
//! queries over it, and keeps a derived per-disease cache.
//!
//! # Features
//!
//! - **Typed Graph**: Per-kind id indexes and adjacency partitioned by relationship type
//! - **Metaedge Registry**: Short metaedge codes like `CtD` map to canonical relationship types
//! - **Disease Neighborhoods**: Treating compounds, associated genes and locations of a disease
//! - **Treatment Inference**: Compounds that regulate a gene opposite to a disease site
//! - **Embedded Storage**: Uses Sled for the graph snapshot and the cache
//!
//! # Usage
//!
//! Hetiograph is primarily used via the CLI:
//!
//! ```bash
//! # Load the graph and build the cache
//! hetiograph --path ./hetionet_db create --nodes-file nodes.tsv --edges-file edges.tsv --build-cache
//!
//! # Query a disease
//! hetiograph --path ./hetionet_db disease Disease::DOID:0050156
//!
//! # Find candidate treatments
//! hetiograph --path ./hetionet_db treatments Disease::DOID:0050156 --mechanisms
//! ```

pub mod cache;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod ingest;
pub mod query;
pub mod schema;
pub mod storage;

pub use cache::{CacheConfig, CacheStats};
pub use config::DatabaseConfig;
pub use coordinator::{DataSource, DiseaseInfoResult, GraphCoordinator, TreatmentSearchResult};
pub use error::{HetioError, Result};
pub use ingest::{EdgeLoadReport, NodeLoadReport, RawRecord};
pub use query::{CandidateTreatment, DiseaseInfo, DrugRef, GeneRef, LocationRef, Mechanism};
pub use schema::{NodeKind, RelationshipType, TypeRegistry};
pub use storage::{GraphStats, StorageType};

/// Hetiograph version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hetiograph crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
