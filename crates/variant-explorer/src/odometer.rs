// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Mixed-radix odometer over per-group tuning digits.
//!
//! One digit per group, each ranging over `[0, base)` where `base` is
//! the number of candidate values for the dimension. [`Odometer::advance`]
//! steps through every combination exactly once, group 0 fastest, then
//! settles into a sticky exhausted state.

use crate::ExplorerError;

/// Owned counter state for one variant generator.
#[derive(Debug, Clone)]
pub struct Odometer {
    digits: Vec<usize>,
    base: usize,
    started: bool,
    exhausted: bool,
}

impl Odometer {
    /// Creates an odometer with `num_groups` digits over `[0, base)`.
    ///
    /// `base == 0` means the dimension has nothing to enumerate and is
    /// rejected up front, so the enumeration loop itself can never fail.
    pub fn new(
        num_groups: usize,
        base: usize,
        dimension: &'static str,
    ) -> Result<Self, ExplorerError> {
        if base == 0 {
            return Err(ExplorerError::EmptyCandidates { dimension });
        }
        Ok(Self {
            digits: vec![0; num_groups],
            base,
            started: false,
            exhausted: false,
        })
    }

    /// An already-exhausted odometer, used as the pre-init placeholder
    /// inside generators.
    pub fn sealed() -> Self {
        Self {
            digits: Vec::new(),
            base: 1,
            started: true,
            exhausted: true,
        }
    }

    /// Steps to the next digit combination.
    ///
    /// Returns `true` if a combination is available (the current digits
    /// are the state to materialize), or `false` once every combination
    /// has been visited. The first call leaves the digits untouched so
    /// the all-zero combination — the pipeline's original configuration
    /// for this dimension — is emitted first. Exhaustion is terminal:
    /// further calls keep returning `false`.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if !self.started {
            self.started = true;
            return true;
        }

        // Carry propagation: group 0 rotates fastest. A digit that wraps
        // to zero pushes the carry into the next group; a full wrap of
        // every digit means the product has been exhausted.
        for digit in &mut self.digits {
            *digit = (*digit + 1) % self.base;
            if *digit != 0 {
                return true;
            }
        }

        self.exhausted = true;
        false
    }

    /// Returns the current digit for `group`.
    pub fn digit(&self, group: usize) -> usize {
        self.digits[group]
    }

    /// Returns all digits, group 0 first.
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Returns `true` once every combination has been visited.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Total number of combinations this odometer will visit.
    pub fn num_combinations(&self) -> usize {
        self.base.pow(self.digits.len() as u32)
    }
}
