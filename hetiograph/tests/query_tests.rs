//! Disease neighborhood and treatment inference tests
//!
//! Runs both domain queries end to end through GraphCoordinator.

#[path = "testutils/mod.rs"]
mod testutils;

use hetiograph::{
    DataSource, DrugRef, GeneRef, LocationRef, Mechanism, RelationshipType,
};
use testutils::test_fixture::{edge, node, TestFixture};

#[test]
fn test_disease_info_scenario() {
    let fixture = TestFixture::with_scenario_data().expect("Failed to create test fixture");

    let result = fixture
        .coordinator()
        .get_disease_info("Disease::D1", false)
        .unwrap()
        .expect("D1 should exist");

    assert_eq!(result.info.name, "Flu");
    assert_eq!(result.data_source, DataSource::Direct);
    assert_eq!(
        result.info.drugs,
        vec![DrugRef {
            id: "Compound::C1".to_string(),
            name: "DrugA".to_string(),
            relationship_type: RelationshipType::Treats,
        }]
    );
    assert_eq!(
        result.info.genes,
        vec![GeneRef {
            id: "Gene::G1".to_string(),
            name: "GeneA".to_string(),
            relationship: RelationshipType::Associates,
        }]
    );
    assert_eq!(
        result.info.locations,
        vec![LocationRef {
            id: "Anatomy::A1".to_string(),
            name: "Lung".to_string(),
        }]
    );
}

#[test]
fn test_disease_info_json_shape() {
    let fixture = TestFixture::with_scenario_data().expect("Failed to create test fixture");
    let result = fixture
        .coordinator()
        .get_disease_info("Disease::D1", false)
        .unwrap()
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["drugs"][0]["type"], "TREATS");
    assert_eq!(json["genes"][0]["relationship"], "ASSOCIATES");
    assert_eq!(json["locations"][0]["name"], "Lung");
    assert_eq!(json["data_source"], "graph (direct)");
    assert!(json["query_time_ms"].is_number());
}

#[test]
fn test_unknown_disease_is_not_found() {
    let fixture = TestFixture::with_scenario_data().expect("Failed to create test fixture");
    assert!(fixture
        .coordinator()
        .get_disease_info("Disease::D404", false)
        .unwrap()
        .is_none());
}

#[test]
fn test_non_disease_id_is_not_found() {
    let fixture = TestFixture::with_scenario_data().expect("Failed to create test fixture");
    // Gene::G1 exists, but not as a Disease
    assert!(fixture
        .coordinator()
        .get_disease_info("Gene::G1", false)
        .unwrap()
        .is_none());
}

#[test]
fn test_inference_scenario() {
    let fixture = TestFixture::with_inference_data().expect("Failed to create test fixture");

    let result = fixture
        .coordinator()
        .find_candidate_treatments("Disease::D1");

    assert_eq!(result.disease_id, "Disease::D1");
    assert_eq!(result.potential_treatments_count, 1);
    let candidate = &result.treatments[0];
    assert_eq!(candidate.compound_id, "Compound::C2");
    assert_eq!(candidate.compound_name, "Zeta");
    assert_eq!(
        candidate.mechanisms,
        vec![Mechanism {
            gene: "GeneA".to_string(),
            compound_effect: RelationshipType::Upregulates,
            anatomy: "Lung".to_string(),
            anatomy_effect: RelationshipType::Downregulates,
        }]
    );
}

#[test]
fn test_known_treatment_never_a_candidate() {
    let fixture = TestFixture::with_inference_data().expect("Failed to create test fixture");
    let result = fixture
        .coordinator()
        .find_candidate_treatments("Disease::D1");
    assert!(result
        .treatments
        .iter()
        .all(|t| t.compound_id != "Compound::C1"));
}

#[test]
fn test_palliating_compound_is_excluded() {
    let fixture = TestFixture::with_inference_data().expect("Failed to create test fixture");
    fixture
        .coordinator()
        .load_edges(vec![edge("Compound::C2", "Disease::D1", "CpD")])
        .unwrap();

    let result = fixture
        .coordinator()
        .find_candidate_treatments("Disease::D1");
    assert_eq!(result.potential_treatments_count, 0);
}

#[test]
fn test_duplicate_regulation_edges_do_not_duplicate_mechanisms() {
    let fixture = TestFixture::with_inference_data().expect("Failed to create test fixture");
    fixture
        .coordinator()
        .load_edges(vec![
            edge("Compound::C2", "Gene::G1", "CuG"),
            edge("Anatomy::A1", "Gene::G1", "AdG"),
        ])
        .unwrap();

    let result = fixture
        .coordinator()
        .find_candidate_treatments("Disease::D1");
    assert_eq!(result.treatments[0].mechanisms.len(), 1);
}

#[test]
fn test_candidates_sorted_by_name() {
    let fixture = TestFixture::with_inference_data().expect("Failed to create test fixture");
    fixture
        .coordinator()
        .load_nodes(vec![node("Compound::C3", "Alpha", "Compound")])
        .unwrap();
    fixture
        .coordinator()
        .load_edges(vec![edge("Compound::C3", "Gene::G1", "CuG")])
        .unwrap();

    let result = fixture
        .coordinator()
        .find_candidate_treatments("Disease::D1");
    let names: Vec<&str> = result
        .treatments
        .iter()
        .map(|t| t.compound_name.as_str())
        .collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);
}

#[test]
fn test_downregulating_compound_is_a_candidate() {
    let fixture = TestFixture::with_scenario_data().expect("Failed to create test fixture");
    fixture
        .coordinator()
        .load_nodes(vec![node("Compound::C5", "Beta", "Compound")])
        .unwrap();
    fixture
        .coordinator()
        .load_edges(vec![
            edge("Compound::C5", "Gene::G1", "CdG"),
            edge("Anatomy::A1", "Gene::G1", "AuG"),
        ])
        .unwrap();

    let result = fixture
        .coordinator()
        .find_candidate_treatments("Disease::D1");
    assert_eq!(result.potential_treatments_count, 1);
    let candidate = &result.treatments[0];
    assert_eq!(candidate.compound_id, "Compound::C5");
    assert_eq!(
        candidate.mechanisms,
        vec![Mechanism {
            gene: "GeneA".to_string(),
            compound_effect: RelationshipType::Downregulates,
            anatomy: "Lung".to_string(),
            anatomy_effect: RelationshipType::Upregulates,
        }]
    );
}

#[test]
fn test_non_compound_regulators_are_ignored() {
    let fixture = TestFixture::with_inference_data().expect("Failed to create test fixture");
    fixture
        .coordinator()
        .load_nodes(vec![node("Disease::D2", "Cold", "Disease")])
        .unwrap();
    fixture
        .coordinator()
        .load_edges(vec![edge("Disease::D2", "Gene::G1", "DuG")])
        .unwrap();

    let result = fixture
        .coordinator()
        .find_candidate_treatments("Disease::D1");
    let ids: Vec<&str> = result
        .treatments
        .iter()
        .map(|t| t.compound_id.as_str())
        .collect();
    assert_eq!(ids, vec!["Compound::C2"]);
}
