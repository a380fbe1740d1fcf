// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # pipeline-ir
//!
//! A lightweight intermediate representation (IR) for textual
//! media-analytics pipelines.
//!
//! Rather than depending on the full streaming framework, this crate
//! captures exactly what the configuration-space explorer needs:
//!
//! - [`StageKind`] — closed classification of the stage-type token,
//!   resolved once at parse time.
//! - [`StageDescriptor`] — one pipeline stage: kind plus an
//!   insertion-ordered parameter map.
//! - [`ParamMap`] — `key=value` parameters with stable re-serialization
//!   order.
//! - [`PipelineDescription`] — the full processing chain as an ordered
//!   stage sequence.
//!
//! # Pipeline Text Format
//! Stages are separated by `!`; within a stage, the first
//! whitespace-separated token is the stage type and every further token
//! is a `key=value` parameter:
//!
//! ```text
//! filesrc location=in.mp4 ! decodebin ! gvadetect model=yolo.xml device=CPU ! fakesink
//! ```
//!
//! # Example
//! ```
//! use pipeline_ir::PipelineDescription;
//!
//! let p = PipelineDescription::parse(
//!     "filesrc location=in.mp4 ! gvadetect model=yolo.xml ! fakesink",
//! ).unwrap();
//! assert_eq!(p.len(), 3);
//! assert!(p.stages()[1].kind.is_inference());
//! ```

mod error;
mod params;
mod pipeline;
mod stage;

pub use error::ParseError;
pub use params::ParamMap;
pub use pipeline::{PipelineDescription, STAGE_SEPARATOR};
pub use stage::{StageDescriptor, StageKind};
