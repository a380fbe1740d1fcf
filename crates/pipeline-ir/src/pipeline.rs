// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The full pipeline description: an ordered sequence of stages.
//!
//! Re-serializing a [`PipelineDescription`] always yields a valid
//! pipeline string with stage separators in place, regardless of how
//! many stages have been rewritten or spliced in since parsing.

use crate::{ParseError, StageDescriptor};

/// The symbol separating stages in pipeline text.
pub const STAGE_SEPARATOR: char = '!';

/// An ordered sequence of [`StageDescriptor`]s representing the full
/// processing chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PipelineDescription {
    stages: Vec<StageDescriptor>,
}

impl PipelineDescription {
    /// Creates a pipeline from an already-built stage list.
    pub fn from_stages(stages: Vec<StageDescriptor>) -> Self {
        Self { stages }
    }

    /// Parses a full pipeline string by splitting on [`STAGE_SEPARATOR`]
    /// and parsing each segment as one stage.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let stages = text
            .split(STAGE_SEPARATOR)
            .map(StageDescriptor::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { stages })
    }

    /// Serializes the pipeline back to text with ` ! ` between stages.
    pub fn serialize(&self) -> String {
        self.stages
            .iter()
            .map(StageDescriptor::serialize)
            .collect::<Vec<_>>()
            .join(" ! ")
    }

    /// Returns the stages in order.
    pub fn stages(&self) -> &[StageDescriptor] {
        &self.stages
    }

    /// Returns mutable access to the stages.
    pub fn stages_mut(&mut self) -> &mut [StageDescriptor] {
        &mut self.stages
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl std::fmt::Display for PipelineDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}
