//! On-disk persistence tests
//!
//! A saved graph and a built cache must survive closing and reopening the
//! database, the way separate CLI invocations use it.

#[path = "testutils/mod.rs"]
mod testutils;

use hetiograph::storage::{StorageDriver, StorageTree};
use hetiograph::DataSource;
use testutils::test_fixture::TestFixture;

#[test]
fn test_saved_graph_survives_reopen() {
    let fixture = TestFixture::with_inference_data().expect("Failed to create test fixture");
    let saved = fixture.coordinator().save_graph().unwrap();

    let fixture = fixture.reopen().expect("Failed to reopen database");
    assert_eq!(fixture.coordinator().graph_stats(), saved);

    let result = fixture
        .coordinator()
        .find_candidate_treatments("Disease::D1");
    assert_eq!(result.potential_treatments_count, 1);
    assert_eq!(result.treatments[0].compound_id, "Compound::C2");
}

#[test]
fn test_interrupted_save_reopens_empty_and_can_be_rebuilt() {
    let fixture = TestFixture::with_inference_data().expect("Failed to create test fixture");
    fixture.coordinator().save_graph().unwrap();

    // State left by a save that stopped after rewriting the node tree
    let fixture = fixture
        .reopen_after(|driver| {
            driver.open_tree("graph_metadata")?.remove(b"snapshot")?;
            driver.open_tree("graph_nodes")?.replace_all(Vec::new())?;
            Ok(())
        })
        .expect("Database with an incomplete snapshot should open");
    assert_eq!(fixture.coordinator().graph_stats().node_count, 0);

    fixture.insert_scenario_data().unwrap();
    fixture.insert_inference_data().unwrap();
    fixture.coordinator().save_graph().unwrap();

    let fixture = fixture.reopen().expect("Failed to reopen database");
    let result = fixture
        .coordinator()
        .find_candidate_treatments("Disease::D1");
    assert_eq!(result.potential_treatments_count, 1);
}

#[test]
fn test_unsaved_graph_is_lost_on_reopen() {
    let fixture = TestFixture::with_scenario_data().expect("Failed to create test fixture");
    let fixture = fixture.reopen().expect("Failed to reopen database");
    assert_eq!(fixture.coordinator().graph_stats().node_count, 0);
}

#[test]
fn test_cache_survives_reopen() {
    let fixture = TestFixture::with_scenario_data().expect("Failed to create test fixture");
    fixture.coordinator().build_cache().unwrap();

    let fixture = fixture.reopen().expect("Failed to reopen database");
    let cached = fixture
        .coordinator()
        .get_disease_info("Disease::D1", true)
        .unwrap()
        .expect("cache entry should persist");
    assert_eq!(cached.data_source, DataSource::Cache);
    assert_eq!(cached.info.locations[0].name, "Lung");
}

#[test]
fn test_database_directory_is_created() {
    let fixture = TestFixture::new().expect("Failed to create test fixture");
    assert!(fixture.db_path().exists());
}
