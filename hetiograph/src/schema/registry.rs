// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Metaedge code registry
//!
//! Canonicalizes short metaedge codes (`CtD`, `Gr>G`, ...) into relationship
//! types. The mapping is total: unknown codes fall back to an uppercased
//! label instead of failing.

use super::types::RelationshipType;

/// Stateless registry of metaedge codes
pub struct TypeRegistry;

impl TypeRegistry {
    /// Canonicalize a metaedge code into a relationship type.
    ///
    /// Direction markers (`>`, `<`) are stripped before the table lookup.
    /// Codes outside the table become `RelationshipType::from_name` of the
    /// uppercased code, so a fallback that spells a known name resolves to
    /// that known variant.
    pub fn canonicalize(metaedge: &str) -> RelationshipType {
        let stripped: String = metaedge.chars().filter(|c| !Self::is_marker(*c)).collect();

        if let Some(known) = Self::lookup(&stripped) {
            return known;
        }

        let fallback: String = stripped
            .to_uppercase()
            .chars()
            .map(|c| if Self::is_marker(c) { '_' } else { c })
            .collect();
        RelationshipType::from_name(&fallback)
    }

    fn is_marker(c: char) -> bool {
        c == '>' || c == '<'
    }

    fn lookup(code: &str) -> Option<RelationshipType> {
        let rel = match code {
            "GiG" => RelationshipType::Interacts,
            "GrG" => RelationshipType::Regulates,
            "GcG" => RelationshipType::Covaries,
            "CtD" => RelationshipType::Treats,
            "CpD" => RelationshipType::Palliates,
            "CuG" | "DuG" | "AuG" => RelationshipType::Upregulates,
            "CdG" | "DdG" | "AdG" => RelationshipType::Downregulates,
            "CbG" => RelationshipType::Binds,
            "DaG" => RelationshipType::Associates,
            "DlA" => RelationshipType::LocalizesTo,
            "AeG" => RelationshipType::Expresses,
            "CRC" | "DRD" | "GRG" => RelationshipType::Resembles,
            _ => return None,
        };
        Some(rel)
    }
}
