// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Opposite-regulation inference
//!
//! Finds compounds that regulate a gene in the direction opposite to how one
//! of the disease's anatomical sites regulates the same gene. Work is driven
//! from the genes the disease's anatomies regulate, so the cost follows
//! `sum over genes of |regulating compounds| x |regulating anatomies|`
//! instead of the compound x anatomy cross-product.

use super::engine::QueryEngine;
use super::results::{CandidateTreatment, Mechanism};
use crate::schema::{NodeKind, Regulation, RelationshipType};
use crate::storage::NodeSlot;
use std::collections::{BTreeMap, BTreeSet, HashSet};

const REGULATION_RELATIONSHIPS: [RelationshipType; 2] = [
    RelationshipType::Upregulates,
    RelationshipType::Downregulates,
];

const KNOWN_TREATMENT_RELATIONSHIPS: [RelationshipType; 2] =
    [RelationshipType::Treats, RelationshipType::Palliates];

/// (gene, compound direction, anatomy, anatomy direction)
type MechanismKey = (NodeSlot, Regulation, NodeSlot, Regulation);

impl<'g> QueryEngine<'g> {
    /// Compounds that could treat `disease_id` through opposite regulation.
    ///
    /// Compounds already linked to the disease by TREATS or PALLIATES are
    /// excluded. Each result lists its distinct mechanisms. Results are
    /// sorted by compound name, then compound id. An unknown disease yields
    /// no results.
    pub fn candidate_treatments(&self, disease_id: &str) -> Vec<CandidateTreatment> {
        let Some((disease, _)) = self.store.lookup_in_kind(&NodeKind::Disease, disease_id)
        else {
            log::debug!("Disease {} not found, no candidates", disease_id);
            return Vec::new();
        };

        let anatomies: BTreeSet<NodeSlot> = self
            .store
            .outgoing_from(disease, &[RelationshipType::LocalizesTo])
            .into_iter()
            .filter(|n| n.node.is(&NodeKind::Anatomy))
            .map(|n| n.slot)
            .collect();

        let gene_effects = self.anatomy_effects_by_gene(&anatomies);

        let known_treatments: HashSet<NodeSlot> = self
            .store
            .incoming_to(disease, &KNOWN_TREATMENT_RELATIONSHIPS)
            .into_iter()
            .map(|n| n.slot)
            .collect();

        let mut seen: HashSet<(NodeSlot, MechanismKey)> = HashSet::new();
        let mut by_compound: BTreeMap<NodeSlot, Vec<MechanismKey>> = BTreeMap::new();
        for (&gene, effects) in &gene_effects {
            for regulator in self.store.incoming_to(gene, &REGULATION_RELATIONSHIPS) {
                if !regulator.node.is(&NodeKind::Compound)
                    || known_treatments.contains(&regulator.slot)
                {
                    continue;
                }
                let Some(compound_direction) = regulator.relationship.regulation() else {
                    continue;
                };
                for &(anatomy, anatomy_direction) in effects {
                    if anatomy_direction != compound_direction.opposite() {
                        continue;
                    }
                    let key = (gene, compound_direction, anatomy, anatomy_direction);
                    if seen.insert((regulator.slot, key)) {
                        by_compound.entry(regulator.slot).or_default().push(key);
                    }
                }
            }
        }

        let mut candidates: Vec<CandidateTreatment> = by_compound
            .into_iter()
            .filter_map(|(compound, keys)| self.candidate(compound, keys))
            .collect();
        candidates.sort_by(|a, b| {
            a.compound_name
                .cmp(&b.compound_name)
                .then_with(|| a.compound_id.cmp(&b.compound_id))
        });

        log::debug!(
            "{} candidate treatments for {} from {} anatomies and {} genes",
            candidates.len(),
            disease_id,
            anatomies.len(),
            gene_effects.len()
        );
        candidates
    }

    /// Reverse index: gene -> distinct (anatomy, direction) over `anatomies`
    fn anatomy_effects_by_gene(
        &self,
        anatomies: &BTreeSet<NodeSlot>,
    ) -> BTreeMap<NodeSlot, Vec<(NodeSlot, Regulation)>> {
        let mut effects: BTreeMap<NodeSlot, Vec<(NodeSlot, Regulation)>> = BTreeMap::new();
        for &anatomy in anatomies {
            for target in self.store.outgoing_from(anatomy, &REGULATION_RELATIONSHIPS) {
                if !target.node.is(&NodeKind::Gene) {
                    continue;
                }
                let Some(direction) = target.relationship.regulation() else {
                    continue;
                };
                let gene = effects.entry(target.slot).or_default();
                if !gene.contains(&(anatomy, direction)) {
                    gene.push((anatomy, direction));
                }
            }
        }
        effects
    }

    fn candidate(&self, compound: NodeSlot, keys: Vec<MechanismKey>) -> Option<CandidateTreatment> {
        let node = self.store.node_at(compound)?;
        let mechanisms = keys
            .into_iter()
            .filter_map(|(gene, compound_direction, anatomy, anatomy_direction)| {
                Some(Mechanism {
                    gene: self.store.node_at(gene)?.name.clone(),
                    compound_effect: compound_direction.relationship(),
                    anatomy: self.store.node_at(anatomy)?.name.clone(),
                    anatomy_effect: anatomy_direction.relationship(),
                })
            })
            .collect();
        Some(CandidateTreatment {
            compound_id: node.id.clone(),
            compound_name: node.name.clone(),
            mechanisms,
        })
    }
}
