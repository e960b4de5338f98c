// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Cache configuration

use serde::{Deserialize, Serialize};

/// Disease cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Serve cache-mode reads from the cache store. When disabled every
    /// cache-mode read is a miss; reads are never rerouted to the graph.
    pub enabled: bool,

    /// Name of the driver tree holding cache entries
    pub tree_name: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tree_name: "disease_cache".to_string(),
        }
    }
}

impl CacheConfig {
    /// Configuration with the cache switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.tree_name.trim().is_empty() {
            return Err("Cache tree name must not be empty".to_string());
        }
        if self.tree_name.starts_with("graph_") {
            return Err(format!(
                "Cache tree name '{}' collides with the graph snapshot trees",
                self.tree_name
            ));
        }
        Ok(())
    }
}
