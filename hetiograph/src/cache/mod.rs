// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Derived read cache for disease queries

pub mod cache_config;
pub mod disease_cache;
pub mod error;

pub use cache_config::CacheConfig;
pub use disease_cache::{CacheEntry, CacheStats, DiseaseCache};
pub use error::CacheError;
