//! Test fixture for Hetiograph integration tests
//!
//! Provides isolated database instances through the public GraphCoordinator API,
//! with raw storage access only for reopening tests.

#![allow(dead_code)]

use hetiograph::storage::{create_storage_driver, SharedDriver, StorageDriver, StorageType};
use hetiograph::{DatabaseConfig, GraphCoordinator, RawRecord};
use std::path::{Path, PathBuf};

/// Test fixture with isolated database instance
pub struct TestFixture {
    coordinator: GraphCoordinator,
    db_path: PathBuf,
    temp_dir: tempfile::TempDir,
}

impl TestFixture {
    /// Create an empty sled-backed fixture in a fresh temporary directory
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        let db_path = temp_dir.path().join("hetiograph_test");
        let coordinator = GraphCoordinator::open(DatabaseConfig::new(&db_path))?;
        Ok(Self {
            coordinator,
            db_path,
            temp_dir,
        })
    }

    /// Fixture holding the Flu scenario graph
    pub fn with_scenario_data() -> Result<Self, Box<dyn std::error::Error>> {
        let fixture = Self::new()?;
        fixture.insert_scenario_data()?;
        Ok(fixture)
    }

    /// Fixture holding the Flu scenario plus the inference additions
    pub fn with_inference_data() -> Result<Self, Box<dyn std::error::Error>> {
        let fixture = Self::with_scenario_data()?;
        fixture.insert_inference_data()?;
        Ok(fixture)
    }

    /// D1 "Flu" treated by C1, associated with G1, localized to A1
    pub fn insert_scenario_data(&self) -> Result<(), hetiograph::HetioError> {
        self.coordinator.load_nodes(vec![
            node("Disease::D1", "Flu", "Disease"),
            node("Gene::G1", "GeneA", "Gene"),
            node("Compound::C1", "DrugA", "Compound"),
            node("Anatomy::A1", "Lung", "Anatomy"),
        ])?;
        self.coordinator.load_edges(vec![
            edge("Compound::C1", "Disease::D1", "CtD"),
            edge("Disease::D1", "Gene::G1", "DaG"),
            edge("Disease::D1", "Anatomy::A1", "DlA"),
        ])?;
        Ok(())
    }

    /// C2 up-regulates G1 where Lung down-regulates it; C1 does too but
    /// already treats D1
    pub fn insert_inference_data(&self) -> Result<(), hetiograph::HetioError> {
        self.coordinator
            .load_nodes(vec![node("Compound::C2", "Zeta", "Compound")])?;
        self.coordinator.load_edges(vec![
            edge("Compound::C2", "Gene::G1", "CuG"),
            edge("Compound::C1", "Gene::G1", "CuG"),
            edge("Anatomy::A1", "Gene::G1", "AdG"),
        ])?;
        Ok(())
    }

    pub fn coordinator(&self) -> &GraphCoordinator {
        &self.coordinator
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Close the database and open it again from disk
    pub fn reopen(self) -> Result<Self, Box<dyn std::error::Error>> {
        self.reopen_after(|_| Ok(()))
    }

    /// Close the database, run `edit` on its raw storage, then open it again
    pub fn reopen_after<F>(self, edit: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: FnOnce(&SharedDriver) -> Result<(), Box<dyn std::error::Error>>,
    {
        let Self {
            coordinator,
            db_path,
            temp_dir,
        } = self;
        coordinator.close()?;
        {
            let driver = create_storage_driver(StorageType::Sled, &db_path)?;
            edit(&driver)?;
            driver.shutdown()?;
        }
        let coordinator = GraphCoordinator::open(DatabaseConfig::new(&db_path))?;
        Ok(Self {
            coordinator,
            db_path,
            temp_dir,
        })
    }

    /// Write `contents` to a file in the fixture's temporary directory
    pub fn write_file(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

pub fn node(id: &str, name: &str, kind: &str) -> RawRecord {
    RawRecord::new()
        .with("id", id)
        .with("name", name)
        .with("kind", kind)
}

pub fn edge(source: &str, target: &str, metaedge: &str) -> RawRecord {
    RawRecord::new()
        .with("source", source)
        .with("target", target)
        .with("metaedge", metaedge)
}
