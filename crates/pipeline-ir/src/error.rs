// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for pipeline descriptor parsing.

/// Errors that can occur while parsing pipeline text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A stage contained no tokens at all (e.g. two consecutive separators).
    #[error("empty stage descriptor")]
    EmptyStage,

    /// A parameter token did not contain exactly one `=` with a non-empty key.
    #[error("malformed parameter token '{token}': expected exactly one 'key=value'")]
    MalformedParameter { token: String },
}
