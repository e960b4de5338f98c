// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Graph Coordinator - Central orchestration for ingestion and queries
//!
//! The GraphCoordinator provides a unified entry point, coordinating the
//! graph store, the storage driver and the disease cache.

pub mod graph_coordinator;
pub mod responses;

pub use graph_coordinator::GraphCoordinator;
pub use responses::{DataSource, DiseaseInfoResult, TreatmentSearchResult};
