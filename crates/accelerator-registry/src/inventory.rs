// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The accelerator inventory: the ordered candidate list for device tuning.
//!
//! The inventory is built once from the identifier list returned by the
//! platform's device-enumeration call and is immutable afterwards. Its
//! ordering defines the enumeration order of the device tuning dimension,
//! so it is preserved exactly as reported (or as requested via
//! [`AcceleratorInventory::restrict`]).

use crate::{AcceleratorClass, RegistryError};

/// A single accelerator: its platform identifier plus resolved class.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Accelerator {
    /// Platform identifier, used verbatim as the `device` parameter value
    /// (e.g. `"GPU.1"`).
    pub id: String,
    /// Class resolved from the identifier at construction time.
    pub class: AcceleratorClass,
}

impl Accelerator {
    /// Parses an accelerator from its platform identifier.
    pub fn parse(id: &str) -> Result<Self, RegistryError> {
        Ok(Self {
            id: id.to_string(),
            class: AcceleratorClass::from_identifier(id)?,
        })
    }
}

/// The ordered list of accelerators available for tuning.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AcceleratorInventory {
    accelerators: Vec<Accelerator>,
}

impl AcceleratorInventory {
    /// Builds an inventory from the identifier strings reported by the
    /// host platform's device-enumeration facility.
    pub fn from_identifiers<I, S>(ids: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let accelerators = ids
            .into_iter()
            .map(|id| Accelerator::parse(id.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(
            "accelerators detected on system: {:?}",
            accelerators.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
        );
        Ok(Self { accelerators })
    }

    /// Restricts the inventory to an explicit allow-list of device names.
    ///
    /// Each requested name must match (by substring) at least one
    /// available identifier; otherwise the call fails with
    /// [`RegistryError::NotAvailable`]. The resulting inventory uses the
    /// requested names, in the requested order, as the candidate list —
    /// so `restrict(["GPU"])` tunes with `device=GPU` even when the
    /// platform reports `GPU.0`.
    pub fn restrict<S: AsRef<str>>(&self, requested: &[S]) -> Result<Self, RegistryError> {
        let mut accelerators = Vec::with_capacity(requested.len());
        for name in requested {
            let name = name.as_ref();
            if !self.accelerators.iter().any(|a| a.id.contains(name)) {
                return Err(RegistryError::NotAvailable {
                    requested: name.to_string(),
                    available: self.ids().map(str::to_string).collect(),
                });
            }
            accelerators.push(Accelerator::parse(name)?);
        }
        Ok(Self { accelerators })
    }

    /// Returns the accelerator at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; callers index with odometer
    /// digits, which are always `< len()`.
    pub fn get(&self, index: usize) -> &Accelerator {
        &self.accelerators[index]
    }

    /// Iterates over the accelerators in order.
    pub fn iter(&self) -> impl Iterator<Item = &Accelerator> {
        self.accelerators.iter()
    }

    /// Iterates over the identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.accelerators.iter().map(|a| a.id.as_str())
    }

    /// Returns the number of accelerators.
    pub fn len(&self) -> usize {
        self.accelerators.len()
    }

    /// Returns `true` if no accelerators are present.
    pub fn is_empty(&self) -> bool {
        self.accelerators.is_empty()
    }
}
