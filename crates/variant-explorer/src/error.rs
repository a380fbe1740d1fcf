// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the variant explorer.
//!
//! All of these are precondition failures raised at configuration or
//! initialization time. Once a generator has been initialized, its
//! enumeration is infallible and always terminates.

/// Errors that can occur while configuring the explorer.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// Pipeline text could not be parsed.
    #[error("pipeline parse error: {0}")]
    Parse(#[from] pipeline_ir::ParseError),

    /// The accelerator inventory could not be built or restricted.
    #[error("accelerator registry error: {0}")]
    Registry(#[from] accelerator_registry::RegistryError),

    /// A tuning dimension has no candidate values to enumerate.
    #[error("no candidate values for tuning dimension '{dimension}'")]
    EmptyCandidates { dimension: &'static str },

    /// An inference stage is missing a parameter required for grouping.
    #[error("cannot group stage {index} ('{kind}'): {detail}")]
    UnsupportedStage {
        index: usize,
        kind: String,
        detail: String,
    },

    /// Configuration file or TOML error.
    #[error("configuration error: {0}")]
    Config(String),
}
