// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Node kinds and relationship types
//!
//! Known kinds and relationship types are explicit variants; anything else
//! is carried in an `Other` variant holding the raw (canonicalized) label so
//! the taxonomy stays open without string dispatch inside the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a graph entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Gene,
    Compound,
    Disease,
    Anatomy,
    /// Any other kind label found in the input (e.g. `Side Effect`)
    Other(String),
}

impl NodeKind {
    /// Kinds that always get an id index, whether or not they were observed
    pub const CORE: [NodeKind; 4] = [
        NodeKind::Gene,
        NodeKind::Compound,
        NodeKind::Disease,
        NodeKind::Anatomy,
    ];

    /// Label as it appears in input files
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Gene => "Gene",
            NodeKind::Compound => "Compound",
            NodeKind::Disease => "Disease",
            NodeKind::Anatomy => "Anatomy",
            NodeKind::Other(label) => label,
        }
    }

    /// Map a kind label to a variant. Labels are matched exactly.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Gene" => NodeKind::Gene,
            "Compound" => NodeKind::Compound,
            "Disease" => NodeKind::Disease,
            "Anatomy" => NodeKind::Anatomy,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for NodeKind {
    fn from(label: String) -> Self {
        NodeKind::from_label(&label)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Canonical edge label derived from a metaedge code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipType {
    Interacts,
    Regulates,
    Covaries,
    Treats,
    Palliates,
    Upregulates,
    Downregulates,
    Binds,
    Associates,
    LocalizesTo,
    Expresses,
    Resembles,
    /// Fallback for metaedge codes outside the fixed table
    Other(String),
}

impl RelationshipType {
    pub fn as_str(&self) -> &str {
        match self {
            RelationshipType::Interacts => "INTERACTS",
            RelationshipType::Regulates => "REGULATES",
            RelationshipType::Covaries => "COVARIES",
            RelationshipType::Treats => "TREATS",
            RelationshipType::Palliates => "PALLIATES",
            RelationshipType::Upregulates => "UPREGULATES",
            RelationshipType::Downregulates => "DOWNREGULATES",
            RelationshipType::Binds => "BINDS",
            RelationshipType::Associates => "ASSOCIATES",
            RelationshipType::LocalizesTo => "LOCALIZES_TO",
            RelationshipType::Expresses => "EXPRESSES",
            RelationshipType::Resembles => "RESEMBLES",
            RelationshipType::Other(name) => name,
        }
    }

    /// Parse a canonical relationship name (the inverse of [`as_str`]).
    ///
    /// [`as_str`]: RelationshipType::as_str
    pub fn from_name(name: &str) -> Self {
        match name {
            "INTERACTS" => RelationshipType::Interacts,
            "REGULATES" => RelationshipType::Regulates,
            "COVARIES" => RelationshipType::Covaries,
            "TREATS" => RelationshipType::Treats,
            "PALLIATES" => RelationshipType::Palliates,
            "UPREGULATES" => RelationshipType::Upregulates,
            "DOWNREGULATES" => RelationshipType::Downregulates,
            "BINDS" => RelationshipType::Binds,
            "ASSOCIATES" => RelationshipType::Associates,
            "LOCALIZES_TO" => RelationshipType::LocalizesTo,
            "EXPRESSES" => RelationshipType::Expresses,
            "RESEMBLES" => RelationshipType::Resembles,
            other => RelationshipType::Other(other.to_string()),
        }
    }

    /// Regulation direction carried by this relationship, if any
    pub fn regulation(&self) -> Option<Regulation> {
        match self {
            RelationshipType::Upregulates => Some(Regulation::Up),
            RelationshipType::Downregulates => Some(Regulation::Down),
            _ => None,
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RelationshipType {
    fn from(name: String) -> Self {
        RelationshipType::from_name(&name)
    }
}

impl From<RelationshipType> for String {
    fn from(rel: RelationshipType) -> Self {
        rel.as_str().to_string()
    }
}

/// Direction of a gene-regulation edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Regulation {
    Up,
    Down,
}

impl Regulation {
    pub fn opposite(self) -> Self {
        match self {
            Regulation::Up => Regulation::Down,
            Regulation::Down => Regulation::Up,
        }
    }

    pub fn relationship(self) -> RelationshipType {
        match self {
            Regulation::Up => RelationshipType::Upregulates,
            Regulation::Down => RelationshipType::Downregulates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_round_trip_through_other() {
        assert_eq!(NodeKind::from_label("Disease"), NodeKind::Disease);
        assert_eq!(
            NodeKind::from_label("Side Effect"),
            NodeKind::Other("Side Effect".to_string())
        );
        assert_eq!(NodeKind::from_label("Side Effect").to_string(), "Side Effect");
    }

    #[test]
    fn test_regulation_directions() {
        assert_eq!(
            RelationshipType::Upregulates.regulation(),
            Some(Regulation::Up)
        );
        assert_eq!(RelationshipType::Treats.regulation(), None);
        assert_eq!(Regulation::Up.opposite(), Regulation::Down);
        assert_eq!(
            Regulation::Down.relationship(),
            RelationshipType::Downregulates
        );
    }

    #[test]
    fn test_relationship_serializes_as_canonical_name() {
        let json = serde_json::to_string(&RelationshipType::LocalizesTo).unwrap();
        assert_eq!(json, "\"LOCALIZES_TO\"");
        let parsed: RelationshipType = serde_json::from_str("\"CUSTOM_REL\"").unwrap();
        assert_eq!(parsed, RelationshipType::Other("CUSTOM_REL".to_string()));
    }
}
