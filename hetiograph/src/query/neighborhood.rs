// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Neighborhood aggregation: everything one hop away from a disease

use super::engine::QueryEngine;
use super::results::{DiseaseInfo, DrugRef, GeneRef, LocationRef};
use crate::schema::{NodeKind, RelationshipType};
use crate::storage::{Neighbor, NodeSlot};
use std::collections::HashSet;

const DRUG_RELATIONSHIPS: [RelationshipType; 2] =
    [RelationshipType::Treats, RelationshipType::Palliates];

const GENE_RELATIONSHIPS: [RelationshipType; 3] = [
    RelationshipType::Associates,
    RelationshipType::Upregulates,
    RelationshipType::Downregulates,
];

const LOCATION_RELATIONSHIPS: [RelationshipType; 1] = [RelationshipType::LocalizesTo];

impl<'g> QueryEngine<'g> {
    /// Summarize a disease's drugs, genes and locations.
    ///
    /// Returns `None` when no Disease node has `disease_id`. A disease with
    /// no relationships yields empty lists. Each list is distinct over
    /// (node, relationship type) and keeps traversal order.
    pub fn disease_info(&self, disease_id: &str) -> Option<DiseaseInfo> {
        let (disease, node) = self
            .store
            .lookup_in_kind(&NodeKind::Disease, disease_id)?;

        let drugs = distinct_by_kind(
            self.store.incoming_to(disease, &DRUG_RELATIONSHIPS),
            NodeKind::Compound,
            true,
        )
        .map(|n| DrugRef {
            id: n.node.id.clone(),
            name: n.node.name.clone(),
            relationship_type: n.relationship.clone(),
        })
        .collect();

        let genes = distinct_by_kind(
            self.store.outgoing_from(disease, &GENE_RELATIONSHIPS),
            NodeKind::Gene,
            true,
        )
        .map(|n| GeneRef {
            id: n.node.id.clone(),
            name: n.node.name.clone(),
            relationship: n.relationship.clone(),
        })
        .collect();

        let locations = distinct_by_kind(
            self.store.outgoing_from(disease, &LOCATION_RELATIONSHIPS),
            NodeKind::Anatomy,
            false,
        )
        .map(|n| LocationRef {
            id: n.node.id.clone(),
            name: n.node.name.clone(),
        })
        .collect();

        Some(DiseaseInfo {
            id: node.id.clone(),
            name: node.name.clone(),
            drugs,
            genes,
            locations,
        })
    }
}

/// Keep neighbors of `kind`, dropping repeats of the same node (and, when
/// `per_relationship` is set, of the same node under the same relationship)
fn distinct_by_kind<'a>(
    neighbors: Vec<Neighbor<'a>>,
    kind: NodeKind,
    per_relationship: bool,
) -> impl Iterator<Item = Neighbor<'a>> + 'a {
    let mut seen: HashSet<(NodeSlot, Option<&'a RelationshipType>)> = HashSet::new();
    neighbors.into_iter().filter(move |n| {
        n.node.is(&kind) && seen.insert((n.slot, per_relationship.then_some(n.relationship)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::GraphStore;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    fn flu_graph() -> GraphStore {
        let mut store = GraphStore::new();
        store.insert_nodes(&NodeKind::Disease, pairs(&[("D1", "Flu"), ("D2", "Empty")]));
        store.insert_nodes(&NodeKind::Gene, pairs(&[("G1", "GeneA")]));
        store.insert_nodes(&NodeKind::Compound, pairs(&[("C1", "DrugA")]));
        store.insert_nodes(&NodeKind::Anatomy, pairs(&[("A1", "Lung")]));
        store.insert_edges(&RelationshipType::Treats, pairs(&[("C1", "D1"), ("C1", "D1")]));
        store.insert_edges(&RelationshipType::Palliates, pairs(&[("C1", "D1")]));
        store.insert_edges(&RelationshipType::Associates, pairs(&[("D1", "G1")]));
        store.insert_edges(&RelationshipType::LocalizesTo, pairs(&[("D1", "A1"), ("D1", "A1")]));
        store
    }

    #[test]
    fn test_disease_info_collects_each_branch() {
        let store = flu_graph();
        let info = QueryEngine::new(&store).disease_info("D1").unwrap();

        assert_eq!(info.name, "Flu");
        assert_eq!(
            info.drugs,
            vec![
                DrugRef {
                    id: "C1".to_string(),
                    name: "DrugA".to_string(),
                    relationship_type: RelationshipType::Treats,
                },
                DrugRef {
                    id: "C1".to_string(),
                    name: "DrugA".to_string(),
                    relationship_type: RelationshipType::Palliates,
                },
            ]
        );
        assert_eq!(info.genes.len(), 1);
        assert_eq!(info.genes[0].relationship, RelationshipType::Associates);
        assert_eq!(
            info.locations,
            vec![LocationRef {
                id: "A1".to_string(),
                name: "Lung".to_string()
            }]
        );
    }

    #[test]
    fn test_disease_without_relationships_has_empty_lists() {
        let store = flu_graph();
        let info = QueryEngine::new(&store).disease_info("D2").unwrap();
        assert!(info.drugs.is_empty());
        assert!(info.genes.is_empty());
        assert!(info.locations.is_empty());

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["drugs"], serde_json::json!([]));
    }

    #[test]
    fn test_unknown_or_non_disease_id_is_not_found() {
        let store = flu_graph();
        let engine = QueryEngine::new(&store);
        assert!(engine.disease_info("D404").is_none());
        assert!(engine.disease_info("G1").is_none());
    }

    #[test]
    fn test_neighbors_of_the_wrong_kind_are_ignored() {
        let mut store = flu_graph();
        store.insert_edges(&RelationshipType::Associates, pairs(&[("D1", "A1")]));
        let info = QueryEngine::new(&store).disease_info("D1").unwrap();
        assert_eq!(info.genes.len(), 1);
    }
}
