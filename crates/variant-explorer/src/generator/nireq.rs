// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Concurrency variant generator: in-flight inference request depth.
//!
//! Grouping matches the batch-size dimension — every inference stage is
//! varied independently, with no merging by model instance.

use crate::generator::{materialize_params, VariantGenerator};
use crate::rewrite::apply_nireq;
use crate::{singleton_groups, ExplorerError, Odometer, TrackedStage};
use pipeline_ir::PipelineDescription;

/// Default in-flight request depth candidate set.
pub const DEFAULT_NIREQ_DEPTHS: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Enumerates every request-depth assignment across inference stages.
#[derive(Debug)]
pub struct ConcurrencyVariants {
    candidates: Vec<u32>,
    base: PipelineDescription,
    tracked: Vec<TrackedStage>,
    odometer: Odometer,
}

impl ConcurrencyVariants {
    /// Creates a generator over [`DEFAULT_NIREQ_DEPTHS`].
    pub fn new() -> Self {
        Self::with_candidates(DEFAULT_NIREQ_DEPTHS.to_vec())
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

impl Default for ConcurrencyVariants {
    fn default() -> Self {
        Self::new()
    }
}

impl VariantGenerator for ConcurrencyVariants {
    fn dimension(&self) -> &'static str {
        "nireq"
    }

    fn init(&mut self, base: &PipelineDescription) -> Result<(), ExplorerError> {
        let (tracked, num_groups) = singleton_groups(base);
        self.odometer = Odometer::new(num_groups, self.candidates.len(), "nireq")?;
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
        tracing::info!("testing nireq combination: {combination:?}");
        Some(materialize_params(
            &self.base,
            &self.tracked,
            &self.odometer,
            |stage, digit| apply_nireq(stage, self.candidates[digit]),
        ))
    }
}

impl Iterator for ConcurrencyVariants {
    type Item = PipelineDescription;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_variant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init(text: &str) -> ConcurrencyVariants {
        let mut g = ConcurrencyVariants::new();
        g.init(&PipelineDescription::parse(text).unwrap()).unwrap();
        g
    }

    #[test]
    fn test_single_stage_emits_all_depths() {
        let g = init("gvadetect model=a.xml");
        let depths: Vec<String> = g
            .map(|v| v.stages()[0].params.get("nireq").unwrap().to_string())
            .collect();
        assert_eq!(depths, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_two_stages_full_product() {
        let g = init("gvadetect model=a.xml ! gvaclassify model=b.xml");
        assert_eq!(g.num_variants(), 64);
        assert_eq!(g.count(), 64);
    }

    #[test]
    fn test_no_merging_by_instance() {
        let g = init(
            "gvadetect model=a.xml model-instance-id=inf0 \
             ! gvaclassify model=a.xml model-instance-id=inf0",
        );
        assert_eq!(g.num_variants(), 64);
    }

    #[test]
    fn test_existing_nireq_is_overwritten() {
        let mut g = init("gvadetect model=a.xml nireq=5");
        let first = g.next_variant().unwrap();
        assert_eq!(first.stages()[0].params.get("nireq"), Some("1"));
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let mut g = ConcurrencyVariants::with_candidates(Vec::new());
        let err = g
            .init(&PipelineDescription::parse("gvadetect model=a.xml").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ExplorerError::EmptyCandidates { dimension: "nireq" }
        ));
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let mut g = init("gvadetect model=a.xml");
        assert_eq!(g.by_ref().count(), 8);
        assert!(g.next_variant().is_none());
    }
}
