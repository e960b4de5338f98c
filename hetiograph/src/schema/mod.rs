// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Type taxonomy for the knowledge graph
//!
//! This module provides:
//! - Node kinds (Gene, Compound, Disease, Anatomy, open fallback)
//! - Canonical relationship types with an open fallback
//! - The metaedge registry that derives relationship types at load time

pub mod registry;
pub mod types;

pub use registry::TypeRegistry;
pub use types::{NodeKind, Regulation, RelationshipType};
