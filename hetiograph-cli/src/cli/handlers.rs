// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for Hetiograph

use colored::Colorize;
use std::path::PathBuf;

use super::commands::OutputFormat;
use super::output::ResultFormatter;
use hetiograph::{DatabaseConfig, GraphCoordinator};

/// Handle the create command
///
/// Loads nodes then edges, saves the graph snapshot and optionally
/// rebuilds the disease cache. The coordinator lives only for this command;
/// everything it needs later is persisted through the storage driver.
pub fn handle_create(
    config: DatabaseConfig,
    nodes_file: PathBuf,
    edges_file: PathBuf,
    build_cache: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Creating Hetionet database...".bold().green());

    let coordinator = GraphCoordinator::open(config)?;

    println!("  → Loading nodes from {}...", nodes_file.display());
    let nodes = coordinator.load_nodes_file(&nodes_file)?;

    println!("  → Loading edges from {}...", edges_file.display());
    let edges = coordinator.load_edges_file(&edges_file)?;

    println!("  → Saving graph...");
    let stats = coordinator.save_graph()?;
    println!(
        "    {} nodes, {} edges across {} relationship types",
        stats.node_count, stats.edge_count, stats.relationship_type_count
    );

    if build_cache {
        println!("  → Building disease cache...");
        let cached = coordinator.build_cache()?;
        println!("    Cached {} diseases", cached);
    }

    print!("\n{}", ResultFormatter::format_load(&nodes, &edges));
    println!("{}", "\nDatabase creation complete!".bold().green());

    coordinator.close()?;
    Ok(())
}

/// Handle the build-cache command
pub fn handle_build_cache(config: DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
    let coordinator = GraphCoordinator::open(config)?;
    if coordinator.graph_stats().node_count == 0 {
        println!(
            "{}",
            "No graph found. Run `hetiograph create` first.".yellow()
        );
    }

    let cached = coordinator.build_cache()?;
    println!("{}", format!("Cached {} diseases", cached).green());

    coordinator.close()?;
    Ok(())
}

/// Handle the disease command
pub fn handle_disease(
    config: DatabaseConfig,
    disease_id: String,
    no_cache: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let coordinator = GraphCoordinator::open(config)?;
    let result = coordinator.get_disease_info(&disease_id, !no_cache)?;

    print!(
        "{}",
        ResultFormatter::format_disease(&disease_id, result.as_ref(), format)
    );

    coordinator.close()?;
    Ok(())
}

/// Handle the treatments command
pub fn handle_treatments(
    config: DatabaseConfig,
    disease_id: String,
    mechanisms: bool,
    max_mechanisms: usize,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let coordinator = GraphCoordinator::open(config)?;
    let result = coordinator.find_candidate_treatments(&disease_id);

    print!(
        "{}",
        ResultFormatter::format_treatments(&result, mechanisms, max_mechanisms, format)
    );

    coordinator.close()?;
    Ok(())
}
