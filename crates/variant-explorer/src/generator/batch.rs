// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Batch-size variant generator.
//!
//! Every inference stage is its own group — batch size may legitimately
//! differ between stages even when they share a model instance, so no
//! merging is applied (unlike the device dimension).

use crate::generator::{materialize_params, VariantGenerator};
use crate::rewrite::apply_batch_size;
use crate::{singleton_groups, ExplorerError, Odometer, TrackedStage};
use pipeline_ir::PipelineDescription;

/// Default batch-size candidate set.
pub const DEFAULT_BATCH_SIZES: [u32; 6] = [1, 2, 4, 8, 16, 32];

/// Enumerates every batch-size assignment across inference stages.
#[derive(Debug)]
pub struct BatchSizeVariants {
    candidates: Vec<u32>,
    base: PipelineDescription,
    tracked: Vec<TrackedStage>,
    odometer: Odometer,
}

impl BatchSizeVariants {
    /// Creates a generator over [`DEFAULT_BATCH_SIZES`].
    pub fn new() -> Self {
        Self::with_candidates(DEFAULT_BATCH_SIZES.to_vec())
    }

    /// Creates a generator over a custom candidate list.
    pub fn with_candidates(candidates: Vec<u32>) -> Self {
        Self {
            candidates,
            base: PipelineDescription::default(),
            tracked: Vec::new(),
            odometer: Odometer::sealed(),
        }
    }

    /// Total number of variants this generator will emit after `init`.
    pub fn num_variants(&self) -> usize {
        self.odometer.num_combinations()
    }
}

impl Default for BatchSizeVariants {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantGenerator for BatchSizeVariants {
    fn dimension(&self) -> &'static str {
        "batch-size"
    }

    fn init(&mut self, base: &PipelineDescription) -> Result<(), ExplorerError> {
        let (tracked, num_groups) = singleton_groups(base);
        self.odometer = Odometer::new(num_groups, self.candidates.len(), "batch-size")?;
        self.base = base.clone();
        self.tracked = tracked;
        Ok(())
    }

    fn next_variant(&mut self) -> Option<PipelineDescription> {
        if !self.odometer.advance() {
            return None;
        }
        let combination: Vec<u32> = self
            .odometer
            .digits()
            .iter()
            .map(|&d| self.candidates[d])
            .collect();
        tracing::info!("testing batch-size combination: {combination:?}");
        Some(materialize_params(
            &self.base,
            &self.tracked,
            &self.odometer,
            |stage, digit| apply_batch_size(stage, self.candidates[digit]),
        ))
    }
}

impl Iterator for BatchSizeVariants {
    type Item = PipelineDescription;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init(text: &str) -> BatchSizeVariants {
        let mut g = BatchSizeVariants::new();
        g.init(&PipelineDescription::parse(text).unwrap()).unwrap();
        g
    }

    #[test]
    fn test_first_variant_uses_smallest_batch() {
        let mut g = init("gvadetect model=a.xml ! fakesink");
        let v = g.next_variant().unwrap();
        assert_eq!(v.stages()[0].params.get("batch-size"), Some("1"));
    }

    #[test]
    fn test_single_stage_emits_all_candidates() {
        let g = init("gvadetect model=a.xml");
        let batches: Vec<String> = g
            .map(|v| v.stages()[0].params.get("batch-size").unwrap().to_string())
            .collect();
        assert_eq!(batches, vec!["1", "2", "4", "8", "16", "32"]);
    }

    #[test]
    fn test_two_stages_full_product() {
        let g = init("gvadetect model=a.xml ! gvaclassify model=b.xml");
        assert_eq!(g.num_variants(), 36);
        assert_eq!(g.count(), 36);
    }

    #[test]
    fn test_shared_instance_still_varies_independently() {
        // Same model-instance-id, but batch grouping is singleton.
        let g = init(
            "gvaclassify model=c.xml model-instance-id=inf0 \
             ! gvaclassify model=c.xml model-instance-id=inf0",
        );
        assert_eq!(g.num_variants(), 36);
    }

    #[test]
    fn test_group_zero_rotates_fastest() {
        let mut g = init("gvadetect model=a.xml ! gvaclassify model=b.xml");
        let first = g.next_variant().unwrap();
        let second = g.next_variant().unwrap();

        assert_eq!(first.stages()[0].params.get("batch-size"), Some("1"));
        assert_eq!(first.stages()[1].params.get("batch-size"), Some("1"));
        // Second variant: stage 0 (group 0) advances, stage 1 stays.
        assert_eq!(second.stages()[0].params.get("batch-size"), Some("2"));
        assert_eq!(second.stages()[1].params.get("batch-size"), Some("1"));
    }

    #[test]
    fn test_no_structural_change() {
        let mut g = init("decodebin ! gvadetect model=a.xml ! fakesink");
        let v = g.next_variant().unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v.stages()[0].raw_kind, "decodebin");
        assert_eq!(v.stages()[2].raw_kind, "fakesink");
    }

    #[test]
    fn test_custom_candidates() {
        let mut g = BatchSizeVariants::with_candidates(vec![4, 64]);
        g.init(&PipelineDescription::parse("gvadetect model=a.xml").unwrap())
            .unwrap();
        let batches: Vec<String> = g
            .map(|v| v.stages()[0].params.get("batch-size").unwrap().to_string())
            .collect();
        assert_eq!(batches, vec!["4", "64"]);
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let mut g = BatchSizeVariants::with_candidates(Vec::new());
        let err = g
            .init(&PipelineDescription::parse("gvadetect model=a.xml").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::EmptyCandidates { dimension: "batch-size" }
        ));
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let mut g = init("gvadetect model=a.xml");
        for _ in 0..6 {
            assert!(g.next_variant().is_some());
        }
        assert!(g.next_variant().is_none());
        assert!(g.next_variant().is_none());
    }
}
