// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Device variant generator: accelerator assignment per model instance.
//!
//! Candidates come from the [`AcceleratorInventory`]; grouping merges
//! stages that share a `model-instance-id`, so linked stages always run
//! on the same device. Materialization rewrites the `device` and
//! `pre-process-backend` parameters and splices the memory-domain
//! adjacency stages before each GPU/NPU-targeted inference stage.

use crate::generator::VariantGenerator;
use crate::rewrite::apply_device;
use crate::{group_by_instance, ExplorerError, Odometer, TrackedStage};
use accelerator_registry::AcceleratorInventory;
use pipeline_ir::PipelineDescription;
use std::collections::HashMap;

/// Enumerates every accelerator assignment across instance groups.
#[derive(Debug)]
pub struct DeviceVariants {
    inventory: AcceleratorInventory,
    base: PipelineDescription,
    tracked: Vec<TrackedStage>,
    odometer: Odometer,
}

impl DeviceVariants {
    /// Creates a generator over the given inventory. Call
    /// [`VariantGenerator::init`] before iterating.
    pub fn new(inventory: AcceleratorInventory) -> Self {
        Self {
            inventory,
            base: PipelineDescription::default(),
            tracked: Vec::new(),
            odometer: Odometer::sealed(),
        }
    }

    /// Total number of variants this generator will emit after `init`.
    pub fn num_variants(&self) -> usize {
        self.odometer.num_combinations()
    }

    fn materialize(&self) -> PipelineDescription {
        let group_of: HashMap<usize, usize> = self
            .tracked
            .iter()
            .map(|t| (t.index, t.group_id))
            .collect();

        let mut stages = Vec::with_capacity(self.base.len());
        for (index, stage) in self.base.stages().iter().enumerate() {
            match group_of.get(&index) {
                Some(&group_id) => {
                    let accelerator = self.inventory.get(self.odometer.digit(group_id));
                    let mut stage = stage.clone();
                    let adjacency = apply_device(&mut stage, accelerator);
                    stages.extend(adjacency);
                    stages.push(stage);
                }
                None => stages.push(stage.clone()),
            }
        }
        PipelineDescription::from_stages(stages)
    }
}

impl VariantGenerator for DeviceVariants {
    fn dimension(&self) -> &'static str {
        "device"
    }

    fn init(&mut self, base: &PipelineDescription) -> Result<(), ExplorerError> {
        let (tracked, num_groups) = group_by_instance(base);
        // An empty inventory surfaces here as base 0.
        self.odometer = Odometer::new(num_groups, self.inventory.len(), "device")?;
        self.base = base.clone();
        self.tracked = tracked;
        tracing::info!(
            "devices allowed for tuning: {:?} ({} instance groups, {} variants)",
            self.inventory.ids().collect::<Vec<_>>(),
            num_groups,
            self.odometer.num_combinations(),
        );
        Ok(())
    }

    fn next_variant(&mut self) -> Option<PipelineDescription> {
        if !self.odometer.advance() {
            return None;
        }
        let combination: Vec<&str> = self
            .odometer
            .digits()
            .iter()
            .map(|&d| self.inventory.get(d).id.as_str())
            .collect();
        tracing::info!("testing device combination: {combination:?}");
        Some(self.materialize())
    }
}

impl Iterator for DeviceVariants {
    type Item = PipelineDescription;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_variant()
    }
}
