// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Instance grouping: which inference stages must be tuned together.
//!
//! Stages that declare the same `model-instance-id` share one loaded
//! model instance, so a device choice must be applied to all of them at
//! once — that is [`group_by_instance`]. Batch size and request depth
//! may legitimately differ per occurrence, so those dimensions use
//! [`singleton_groups`] instead. The asymmetry is deliberate.

use crate::ExplorerError;
use pipeline_ir::PipelineDescription;
use std::collections::HashMap;

/// An inference stage selected for tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedStage {
    /// Position of the stage in the pipeline description.
    pub index: usize,
    /// Tuning group this stage belongs to.
    pub group_id: usize,
}

/// Scans the pipeline and groups inference stages by declared model instance.
///
/// Stages sharing a `model-instance-id` value reuse one group; a stage
/// without the parameter always gets its own fresh group. Group ids are
/// sequential integers starting at 0, in order of first appearance.
/// Returns the tracked stages plus the number of distinct groups.
pub fn group_by_instance(pipeline: &PipelineDescription) -> (Vec<TrackedStage>, usize) {
    let mut instance_groups: HashMap<String, usize> = HashMap::new();
    let mut tracked = Vec::new();
    let mut num_groups = 0;

    for (index, stage) in pipeline.stages().iter().enumerate() {
        if !stage.kind.is_inference() {
            continue;
        }

        let group_id = match stage.params.get("model-instance-id") {
            Some(id) => *instance_groups.entry(id.to_string()).or_insert_with(|| {
                let g = num_groups;
                num_groups += 1;
                g
            }),
            None => {
                let g = num_groups;
                num_groups += 1;
                g
            }
        };

        tracked.push(TrackedStage { index, group_id });
    }

    (tracked, num_groups)
}

/// Scans the pipeline giving every inference stage its own group.
///
/// Used by the batch-size and concurrency dimensions, which vary each
/// stage independently even when stages share a model instance.
pub fn singleton_groups(pipeline: &PipelineDescription) -> (Vec<TrackedStage>, usize) {
    let tracked: Vec<TrackedStage> = pipeline
        .stages()
        .iter()
        .enumerate()
        .filter(|(_, stage)| stage.kind.is_inference())
        .enumerate()
        .map(|(group_id, (index, _))| TrackedStage { index, group_id })
        .collect();
    let num_groups = tracked.len();
    (tracked, num_groups)
}

/// Stamps `model-instance-id=infN` onto every inference stage, reusing
/// the same id for stages that reference the same `model` file.
///
/// This is the preprocessing step that lets [`group_by_instance`] merge
/// linked stages. An inference stage with no `model` parameter cannot be
/// assigned an identity and is rejected.
pub fn assign_instance_ids(pipeline: &mut PipelineDescription) -> Result<(), ExplorerError> {
    let mut ids_by_model: HashMap<String, String> = HashMap::new();
    let mut next_id = 0;

    for (index, stage) in pipeline.stages_mut().iter_mut().enumerate() {
        if !stage.kind.is_inference() {
            continue;
        }

        let model = stage
            .params
            .get("model")
            .ok_or_else(|| ExplorerError::UnsupportedStage {
                index,
                kind: stage.raw_kind.clone(),
                detail: "missing 'model' parameter".to_string(),
            })?
            .to_string();

        let instance_id = ids_by_model
            .entry(model)
            .or_insert_with(|| {
                let id = format!("inf{next_id}");
                next_id += 1;
                id
            })
            .clone();

        stage.params.set("model-instance-id", instance_id);
    }

    Ok(())
}
