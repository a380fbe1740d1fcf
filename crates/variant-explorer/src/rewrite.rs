// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Pipeline rewriting: applying one chosen tuning value to one stage.
//!
//! Batch size and request depth are pure parameter edits. A device
//! choice additionally selects the pre-processing backend and, for
//! GPU/NPU targets, requires the frame to arrive in GPU-resident memory,
//! which means splicing a format-normalization stage plus a memory-domain
//! caps filter directly before the inference stage.
//!
//! Rewrites are always applied to a fresh copy of the immutable base
//! pipeline (the generators guarantee this), so repeated enumeration
//! never stacks inserted stages.

use accelerator_registry::{Accelerator, AcceleratorClass};
use pipeline_ir::StageDescriptor;

/// Applies a device choice to an inference stage.
///
/// Sets the `device` and `pre-process-backend` parameters and returns
/// the adjacency stages to splice directly before the stage, in pipeline
/// order: `vapostproc ! video/x-raw(memory:VAMemory)` for GPU and NPU
/// targets, nothing for CPU (frames stay in system memory).
pub fn apply_device(stage: &mut StageDescriptor, accelerator: &Accelerator) -> Vec<StageDescriptor> {
    let adjacency = match accelerator.class {
        AcceleratorClass::Gpu => {
            stage.params.set("pre-process-backend", "va-surface-sharing");
            gpu_memory_adjacency()
        }
        AcceleratorClass::Npu => {
            stage.params.set("pre-process-backend", "va");
            gpu_memory_adjacency()
        }
        AcceleratorClass::Cpu => {
            stage.params.set("pre-process-backend", "opencv");
            Vec::new()
        }
    };
    stage.params.set("device", accelerator.id.clone());
    adjacency
}

/// Applies a batch size to an inference stage.
pub fn apply_batch_size(stage: &mut StageDescriptor, batch_size: u32) {
    stage.params.set("batch-size", batch_size.to_string());
}

/// Applies an in-flight inference request count to an inference stage.
pub fn apply_nireq(stage: &mut StageDescriptor, nireq: u32) {
    stage.params.set("nireq", nireq.to_string());
}

fn gpu_memory_adjacency() -> Vec<StageDescriptor> {
    vec![
        StageDescriptor::bare("vapostproc"),
        StageDescriptor::bare("video/x-raw(memory:VAMemory)"),
    ]
}
