// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result types for the domain queries

use crate::schema::RelationshipType;
use serde::{Deserialize, Serialize};

/// Compound linked to a disease by TREATS or PALLIATES
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrugRef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
}

/// Gene linked from a disease by ASSOCIATES, UPREGULATES or DOWNREGULATES
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneRef {
    pub id: String,
    pub name: String,
    pub relationship: RelationshipType,
}

/// Anatomical site a disease localizes to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: String,
    pub name: String,
}

/// Neighborhood aggregation of one disease.
///
/// This is also the shape persisted in the disease cache; ephemeral fields
/// (timing, data source) are added by the coordinator at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub id: String,
    pub name: String,
    pub drugs: Vec<DrugRef>,
    pub genes: Vec<GeneRef>,
    pub locations: Vec<LocationRef>,
}

/// One opposite-regulation path supporting a candidate compound
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mechanism {
    pub gene: String,
    pub compound_effect: RelationshipType,
    pub anatomy: String,
    pub anatomy_effect: RelationshipType,
}

/// Compound proposed as a new treatment, with its supporting mechanisms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTreatment {
    pub compound_id: String,
    pub compound_name: String,
    pub mechanisms: Vec<Mechanism>,
}
