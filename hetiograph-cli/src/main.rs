// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Hetiograph CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments first to get log level
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        // Default to Warn (can still be overridden by RUST_LOG env var)
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let config = cli.database_config()?;

    match cli.command {
        Commands::Version => {
            println!("{} {}", "Hetiograph".bold().green(), hetiograph::VERSION);
            println!("Biomedical knowledge graph");
            Ok(())
        }

        Commands::Create {
            nodes_file,
            edges_file,
            build_cache,
        } => cli::handle_create(config, nodes_file, edges_file, build_cache),

        Commands::BuildCache => cli::handle_build_cache(config),

        Commands::Disease {
            id,
            no_cache,
            format,
        } => cli::handle_disease(config, id, no_cache, format),

        Commands::Treatments {
            id,
            mechanisms,
            max_mechanisms,
            format,
        } => cli::handle_treatments(config, id, mechanisms, max_mechanisms, format),
    }
}
