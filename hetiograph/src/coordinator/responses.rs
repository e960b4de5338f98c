// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Client-facing result envelopes
//!
//! These wrap query results with ephemeral fields (elapsed time, data
//! source) that are computed per call and never persisted.

use crate::query::{CandidateTreatment, DiseaseInfo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Where a disease lookup was answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    #[serde(rename = "cache")]
    Cache,
    #[serde(rename = "graph (direct)")]
    Direct,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Cache => write!(f, "cache"),
            DataSource::Direct => write!(f, "graph (direct)"),
        }
    }
}

/// Disease lookup result with read-time fields attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseInfoResult {
    #[serde(flatten)]
    pub info: DiseaseInfo,
    pub query_time_ms: f64,
    pub data_source: DataSource,
}

/// Candidate treatments for a disease with elapsed time attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentSearchResult {
    pub disease_id: String,
    pub potential_treatments_count: usize,
    pub treatments: Vec<CandidateTreatment>,
    pub query_time_ms: f64,
}

/// Milliseconds since `start`, rounded to two decimals
pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    round_ms(start.elapsed().as_secs_f64())
}

fn round_ms(secs: f64) -> f64 {
    (secs * 100_000.0).round() / 100.0
}
