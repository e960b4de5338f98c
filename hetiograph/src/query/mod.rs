// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Domain queries over the graph store
//!
//! - Neighborhood aggregation: drugs, genes and locations of a disease
//! - Opposite-regulation inference: candidate compounds for a disease

mod engine;
mod inference;
mod neighborhood;
pub mod results;

pub use engine::QueryEngine;
pub use results::{CandidateTreatment, DiseaseInfo, DrugRef, GeneRef, LocationRef, Mechanism};
