// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # variant-explorer
//!
//! Enumerates the tuning configuration space of a media-analytics
//! pipeline so an external benchmarking driver can measure each variant
//! and pick the best.
//!
//! Three tuning dimensions, each with its own generator:
//!
//! | Generator | Parameter | Candidates | Grouping |
//! |---|---|---|---|
//! | [`DeviceVariants`] | `device` | detected accelerators | by model instance |
//! | [`BatchSizeVariants`] | `batch-size` | {1, 2, 4, 8, 16, 32} | per stage |
//! | [`ConcurrencyVariants`] | `nireq` | {1..8} | per stage |
//!
//! Each generator drives a mixed-radix [`Odometer`] — one digit per
//! group — and per step materializes a complete rewritten
//! [`PipelineDescription`](pipeline_ir::PipelineDescription) from the
//! immutable base captured at `init`. The enumeration visits the full
//! cartesian product over the dimension's groups exactly once, group 0
//! fastest, then terminates.
//!
//! The explorer only *produces* the candidate list: it runs nothing,
//! measures nothing, and composing dimensions against each other is the
//! caller's concern.
//!
//! # Example
//! ```
//! use accelerator_registry::AcceleratorInventory;
//! use pipeline_ir::PipelineDescription;
//! use variant_explorer::{DeviceVariants, VariantGenerator};
//!
//! let base = PipelineDescription::parse(
//!     "filesrc location=cam.mp4 ! decodebin ! gvadetect model=yolo.xml ! fakesink",
//! ).unwrap();
//! let inventory = AcceleratorInventory::from_identifiers(["GPU.0", "CPU"]).unwrap();
//!
//! let mut variants = DeviceVariants::new(inventory);
//! variants.init(&base).unwrap();
//! assert_eq!(variants.count(), 2);
//! ```

mod config;
mod error;
mod generator;
mod grouping;
mod odometer;
mod rewrite;

pub use config::ExplorerConfig;
pub use error::ExplorerError;
pub use generator::batch::{BatchSizeVariants, DEFAULT_BATCH_SIZES};
pub use generator::device::DeviceVariants;
pub use generator::nireq::{ConcurrencyVariants, DEFAULT_NIREQ_DEPTHS};
pub use generator::VariantGenerator;
pub use grouping::{assign_instance_ids, group_by_instance, singleton_groups, TrackedStage};
pub use odometer::Odometer;
pub use rewrite::{apply_batch_size, apply_device, apply_nireq};
