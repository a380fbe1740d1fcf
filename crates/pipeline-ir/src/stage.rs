// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Stage descriptors: one named unit of a processing pipeline.
//!
//! A [`StageDescriptor`] keeps the raw stage-type token for faithful
//! re-serialization, plus a [`StageKind`] classification resolved once
//! at parse time so downstream code never matches on free-form strings.

use crate::{ParamMap, ParseError};

/// Closed classification of a stage-type token.
///
/// Unrecognized tokens resolve to [`StageKind::Other`] — an explicit
/// fallback variant rather than a silent non-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Object-detection inference stage (`gvadetect`).
    Detect,
    /// Classification inference stage (`gvaclassify`).
    Classify,
    /// Post-processing / format-normalization stage (`vapostproc`).
    PostProc,
    /// A caps filter constraining media format or memory domain
    /// (e.g. `video/x-raw(memory:VAMemory)`).
    CapsFilter,
    /// Any other stage type (sources, sinks, decoders, ...).
    Other,
}

impl StageKind {
    /// Classifies a stage-type token.
    pub fn from_token(token: &str) -> Self {
        match token {
            "gvadetect" => Self::Detect,
            "gvaclassify" => Self::Classify,
            "vapostproc" => Self::PostProc,
            t if t.contains('/') => Self::CapsFilter,
            _ => Self::Other,
        }
    }

    /// Returns `true` if this stage performs a model inference pass.
    pub fn is_inference(&self) -> bool {
        matches!(self, Self::Detect | Self::Classify)
    }
}

/// One stage of a processing pipeline: a type token plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StageDescriptor {
    /// The raw stage-type token, exactly as written in the pipeline text.
    pub raw_kind: String,
    /// Classification of `raw_kind`, resolved at parse time.
    pub kind: StageKind,
    /// `key=value` parameters in insertion order.
    pub params: ParamMap,
}

impl StageDescriptor {
    /// Creates a stage with no parameters (e.g. `vapostproc` or a caps filter).
    pub fn bare(kind_token: &str) -> Self {
        Self {
            raw_kind: kind_token.to_string(),
            kind: StageKind::from_token(kind_token),
            params: ParamMap::new(),
        }
    }

    /// Parses one stage from its textual form.
    ///
    /// The first whitespace-separated token is the stage type; every
    /// remaining token must be a single `key=value` pair. A token with
    /// zero or more than one `=`, or an empty key, is rejected with
    /// [`ParseError::MalformedParameter`].
    ///
    /// Duplicate keys are not expected; if one appears, the last value
    /// wins and a warning is logged.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut tokens = text.split_whitespace();
        let raw_kind = tokens.next().ok_or(ParseError::EmptyStage)?;

        let mut params = ParamMap::new();
        for token in tokens {
            let mut parts = token.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) if !key.is_empty() => {
                    if params.contains(key) {
                        tracing::warn!("duplicate parameter '{key}' in stage '{raw_kind}'");
                    }
                    params.set(key, value);
                }
                _ => {
                    return Err(ParseError::MalformedParameter {
                        token: token.to_string(),
                    })
                }
            }
        }

        Ok(Self {
            raw_kind: raw_kind.to_string(),
            kind: StageKind::from_token(raw_kind),
            params,
        })
    }

    /// Serializes the stage back to text: the type token followed by
    /// `key=value` pairs in stored order, single-space separated.
    pub fn serialize(&self) -> String {
        let mut out = self.raw_kind.clone();
        for (key, value) in self.params.iter() {
            out.push(' ');
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

impl std::fmt::Display for StageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}
