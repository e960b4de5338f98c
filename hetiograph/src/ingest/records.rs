// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Input records and field normalization
//!
//! Raw records keep their header names as found in the input. Normalization
//! resolves header aliases case-insensitively (`Id`/`id`/`ID`, ...) into the
//! typed node and edge records the pipeline loads.

use super::error::IngestError;
use crate::schema::NodeKind;

/// A row as read from input: header name -> value, in header order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field append
    pub fn with(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((header.into(), value.into()));
        self
    }

    /// First non-blank value whose header matches `name` ignoring case
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .filter(|(header, _)| header.trim().eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim())
            .find(|value| !value.is_empty())
    }

    fn required(&self, name: &'static str, record: usize) -> Result<&str, IngestError> {
        self.field(name).ok_or(IngestError::MissingField {
            record,
            field: name,
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Normalized node record `{id, name, kind}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
}

impl NodeRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Normalize a raw row. `record` is the 1-based row number used in errors.
    ///
    /// `id` and `kind` are required; a blank `name` is accepted as empty.
    pub fn from_raw(raw: &RawRecord, record: usize) -> Result<Self, IngestError> {
        Ok(Self {
            id: raw.required("id", record)?.to_string(),
            name: raw.field("name").unwrap_or_default().to_string(),
            kind: NodeKind::from_label(raw.required("kind", record)?),
        })
    }
}

/// Normalized edge record `{source, target, metaedge}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    /// Raw metaedge code, e.g. `CtD` or `Gr>G`
    pub metaedge: String,
}

impl EdgeRecord {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        metaedge: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            metaedge: metaedge.into(),
        }
    }

    /// Normalize a raw row. All three fields are required.
    pub fn from_raw(raw: &RawRecord, record: usize) -> Result<Self, IngestError> {
        Ok(Self {
            source: raw.required("source", record)?.to_string(),
            target: raw.required("target", record)?.to_string(),
            metaedge: raw.required("metaedge", record)?.to_string(),
        })
    }
}
