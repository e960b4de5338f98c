// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for Hetiograph
//!
//! Provides command-line interface for loading the graph, building the
//! disease cache, and running the two disease queries.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{handle_build_cache, handle_create, handle_disease, handle_treatments};
