// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Accelerator class resolution.
//!
//! Device identifiers are free-form strings like `"GPU.1"` or
//! `"CPU"`; the class token embedded in the identifier decides which
//! pre-processing backend and memory domain an inference stage needs.
//! The class is resolved once per identifier, with an explicit error
//! for anything unrecognized.

use crate::RegistryError;

/// The class of an accelerator, deciding backend and memory-domain rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcceleratorClass {
    /// Host CPU — system memory, OpenCV pre-processing.
    Cpu,
    /// Integrated or discrete GPU — VA surface sharing.
    Gpu,
    /// Neural processing unit — VA pre-processing, GPU-resident frames.
    Npu,
}

impl AcceleratorClass {
    /// Resolves the class from a device identifier (e.g. `"GPU.1"` → `Gpu`).
    pub fn from_identifier(id: &str) -> Result<Self, RegistryError> {
        if id.contains("GPU") {
            Ok(Self::Gpu)
        } else if id.contains("NPU") {
            Ok(Self::Npu)
        } else if id.contains("CPU") {
            Ok(Self::Cpu)
        } else {
            Err(RegistryError::UnknownClass { id: id.to_string() })
        }
    }

    /// Returns a human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Npu => "npu",
        }
    }
}

impl std::fmt::Display for AcceleratorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
