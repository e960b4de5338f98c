// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Persistent storage backends
//!
//! Trait-based key-value storage so the graph snapshot and the disease
//! cache can use different backends interchangeably.
//!
//! ```text
//! GraphSnapshot / DiseaseCache (application data structures)
//!     ↓
//! StorageDriver (key-value abstraction)
//!     ↓
//! Concrete implementations (Sled, Memory)
//! ```

pub mod factory;
pub mod memory;
#[cfg(feature = "sled-backend")]
pub mod sled;
pub mod traits;
pub mod types;

pub use factory::{create_storage_driver, SharedDriver};
pub use traits::{KeyValue, StorageDriver, StorageTree};
pub use types::{StorageDriverError, StorageResult, StorageType};
