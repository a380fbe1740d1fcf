// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Explorer configuration loaded from TOML files or constructed
//! programmatically.
//!
//! # TOML Format
//! ```toml
//! allowed_devices = ["GPU", "CPU"]   # optional; omit to use all detected
//! batch_sizes = [1, 2, 4, 8, 16, 32]
//! nireq_depths = [1, 2, 3, 4, 5, 6, 7, 8]
//! ```

use crate::generator::batch::{BatchSizeVariants, DEFAULT_BATCH_SIZES};
use crate::generator::device::DeviceVariants;
use crate::generator::nireq::{ConcurrencyVariants, DEFAULT_NIREQ_DEPTHS};
use crate::ExplorerError;
use accelerator_registry::AcceleratorInventory;
use std::path::Path;

/// Configuration for a configuration-space exploration run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExplorerConfig {
    /// Restrict device tuning to these device names (matched against the
    /// detected inventory). `None` uses every detected accelerator.
    #[serde(default)]
    pub allowed_devices: Option<Vec<String>>,
    /// Candidate batch sizes.
    #[serde(default = "default_batch_sizes")]
    pub batch_sizes: Vec<u32>,
    /// Candidate in-flight request depths.
    #[serde(default = "default_nireq_depths")]
    pub nireq_depths: Vec<u32>,
}

fn default_batch_sizes() -> Vec<u32> {
    DEFAULT_BATCH_SIZES.to_vec()
}

fn default_nireq_depths() -> Vec<u32> {
    DEFAULT_NIREQ_DEPTHS.to_vec()
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            allowed_devices: None,
            batch_sizes: default_batch_sizes(),
            nireq_depths: default_nireq_depths(),
        }
    }
}

impl ExplorerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ExplorerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExplorerError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ExplorerError> {
        toml::from_str(toml_str)
            .map_err(|e| ExplorerError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, ExplorerError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExplorerError::Config(format!("TOML serialise error: {e}")))
    }

    /// Validates that every enabled dimension has candidates.
    pub fn validate(&self) -> Result<(), ExplorerError> {
        if self.batch_sizes.is_empty() {
            return Err(ExplorerError::EmptyCandidates {
                dimension: "batch-size",
            });
        }
        if self.nireq_depths.is_empty() {
            return Err(ExplorerError::EmptyCandidates { dimension: "nireq" });
        }
        if matches!(&self.allowed_devices, Some(devices) if devices.is_empty()) {
            return Err(ExplorerError::EmptyCandidates { dimension: "device" });
        }
        Ok(())
    }

    /// Builds the device generator, applying the allow-list if present.
    pub fn device_generator(
        &self,
        inventory: &AcceleratorInventory,
    ) -> Result<DeviceVariants, ExplorerError> {
        let inventory = match &self.allowed_devices {
            Some(allowed) => inventory.restrict(allowed)?,
            None => inventory.clone(),
        };
        Ok(DeviceVariants::new(inventory))
    }

    /// Builds the batch-size generator with the configured candidates.
    pub fn batch_generator(&self) -> BatchSizeVariants {
        BatchSizeVariants::with_candidates(self.batch_sizes.clone())
    }

    /// Builds the concurrency generator with the configured candidates.
    pub fn concurrency_generator(&self) -> ConcurrencyVariants {
        ConcurrencyVariants::with_candidates(self.nireq_depths.clone())
    }
}
