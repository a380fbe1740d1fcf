// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`VariantGenerator`] trait and the three dimension generators.
//!
//! Each generator owns a mixed-radix [`crate::Odometer`] over its tuning
//! dimension and, per step, materializes a full rewritten pipeline from
//! the immutable base description captured at `init`. Generators never
//! mutate accumulated state across emissions, so structural insertions
//! (device adjacency stages) cannot stack.
//!
//! Cross-dimension composition (device × batch × nireq) is the calling
//! driver's concern; each generator exhausts one dimension on its own.

pub mod batch;
pub mod device;
pub mod nireq;

use crate::{ExplorerError, Odometer, TrackedStage};
use pipeline_ir::{PipelineDescription, StageDescriptor};

/// Shared contract of the variant generators.
///
/// A generator is a pure in-memory state machine: `init` captures the
/// base pipeline and resets the counter, `next_variant` steps the
/// enumeration. `None` signals exhaustion and is terminal — further
/// calls keep returning `None`. Distinct generator instances own
/// disjoint state and may be driven from separate threads.
pub trait VariantGenerator: Send {
    /// Name of the tuning dimension this generator explores.
    fn dimension(&self) -> &'static str;

    /// Captures `base` as the immutable snapshot to rewrite from and
    /// resets the enumeration to its first combination.
    ///
    /// Fails fast with [`ExplorerError::EmptyCandidates`] if the
    /// dimension has no candidate values; enumeration itself cannot fail.
    fn init(&mut self, base: &PipelineDescription) -> Result<(), ExplorerError>;

    /// Produces the next variant, or `None` once the full cartesian
    /// product over this dimension's groups has been emitted.
    fn next_variant(&mut self) -> Option<PipelineDescription>;
}

/// Materializes a parameter-only variant: clones the base pipeline and
/// applies `apply(stage, digit)` to every tracked stage.
pub(crate) fn materialize_params(
    base: &PipelineDescription,
    tracked: &[TrackedStage],
    odometer: &Odometer,
    apply: impl Fn(&mut StageDescriptor, usize),
) -> PipelineDescription {
    let mut pipeline = base.clone();
    for t in tracked {
        apply(&mut pipeline.stages_mut()[t.index], odometer.digit(t.group_id));
    }
    pipeline
}
