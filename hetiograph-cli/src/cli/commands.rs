// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use hetiograph::{DatabaseConfig, StorageType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hetiograph")]
#[command(about = "Hetiograph - biomedical knowledge graph", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON configuration file; --path and --storage override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database directory [default: ./hetionet_db]
    #[arg(long, global = true)]
    pub path: Option<PathBuf>,

    /// Storage backend (sled, memory) [default: sled]
    #[arg(long, global = true)]
    pub storage: Option<StorageType>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<log::Level>,
}

impl Cli {
    /// Configuration file or defaults, with command-line overrides applied
    pub fn database_config(&self) -> hetiograph::Result<DatabaseConfig> {
        let mut config = match &self.config {
            Some(file) => DatabaseConfig::from_json_file(file)?,
            None => DatabaseConfig::default(),
        };
        if let Some(path) = &self.path {
            config.path = path.clone();
        }
        if let Some(storage) = self.storage {
            config.storage_type = storage;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load nodes and edges from TSV files and save the graph
    Create {
        /// Nodes TSV (id, name, kind)
        #[arg(long)]
        nodes_file: PathBuf,

        /// Edges TSV (source, target, metaedge)
        #[arg(long)]
        edges_file: PathBuf,

        /// Rebuild the disease cache after loading
        #[arg(long)]
        build_cache: bool,
    },

    /// Rebuild the disease cache from the saved graph
    BuildCache,

    /// Show drugs, genes and locations of a disease
    Disease {
        /// Disease id
        id: String,

        /// Query the graph directly instead of the cache
        #[arg(long)]
        no_cache: bool,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Find compounds that could treat a disease
    Treatments {
        /// Disease id
        id: String,

        /// Show regulation mechanisms
        #[arg(long)]
        mechanisms: bool,

        /// Mechanisms shown per compound
        #[arg(long, default_value = "3")]
        max_mechanisms: usize,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
