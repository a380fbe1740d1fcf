// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the accelerator registry.

/// Errors that can occur while building or restricting an inventory.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// An identifier did not match any known accelerator class.
    #[error("unrecognized accelerator identifier '{id}': expected a CPU, GPU, or NPU device")]
    UnknownClass { id: String },

    /// A requested device is not present on this system.
    #[error("device '{requested}' is not available on this system; available devices: {available:?}")]
    NotAvailable {
        requested: String,
        available: Vec<String>,
    },
}
