// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # accelerator-registry
//!
//! Typed view over the accelerators available for inference offload.
//!
//! The host platform's device-enumeration facility (an external
//! collaborator) produces a flat list of identifier strings such as
//! `["CPU", "GPU.0", "GPU.1", "NPU"]`. This crate turns that list into
//! an [`AcceleratorInventory`] of [`Accelerator`]s, each carrying a
//! closed [`AcceleratorClass`] resolved once at construction — so the
//! rest of the system never re-derives the class by string matching.
//!
//! # Example
//! ```
//! use accelerator_registry::{AcceleratorClass, AcceleratorInventory};
//!
//! let inv = AcceleratorInventory::from_identifiers(["CPU", "GPU.0"]).unwrap();
//! assert_eq!(inv.len(), 2);
//! assert_eq!(inv.get(1).class, AcceleratorClass::Gpu);
//! ```

mod class;
mod error;
mod inventory;

pub use class::AcceleratorClass;
pub use error::RegistryError;
pub use inventory::{Accelerator, AcceleratorInventory};
