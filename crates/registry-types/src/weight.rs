//! # Dispatch Weight
//!
//! Two-dimensional execution weight: computation time and proof size.
//! Matches the WeightV2 shape contract callers pass as a gas limit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-dimensional dispatch weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Weight {
    /// Computational time, in picoseconds of reference hardware.
    pub ref_time: u64,
    /// Size of the proof needed to verify the call, in bytes.
    pub proof_size: u64,
}

impl Weight {
    /// The zero weight.
    pub const ZERO: Self = Self {
        ref_time: 0,
        proof_size: 0,
    };

    /// Creates a weight from its two components.
    #[must_use]
    pub const fn from_parts(ref_time: u64, proof_size: u64) -> Self {
        Self {
            ref_time,
            proof_size,
        }
    }

    /// Component-wise saturating addition.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self {
            ref_time: self.ref_time.saturating_add(other.ref_time),
            proof_size: self.proof_size.saturating_add(other.proof_size),
        }
    }

    /// Component-wise saturating subtraction.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        Self {
            ref_time: self.ref_time.saturating_sub(other.ref_time),
            proof_size: self.proof_size.saturating_sub(other.proof_size),
        }
    }

    /// Checked addition; `None` on overflow of either component.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            ref_time: self.ref_time.checked_add(other.ref_time)?,
            proof_size: self.proof_size.checked_add(other.proof_size)?,
        })
    }

    /// True if both components are less than or equal to `other`'s.
    ///
    /// Weights are only partially ordered; a gas limit is respected when
    /// the consumed weight is `all_lte` the limit.
    #[must_use]
    pub fn all_lte(&self, other: &Self) -> bool {
        self.ref_time <= other.ref_time && self.proof_size <= other.proof_size
    }

    /// True if either component exceeds `other`'s.
    #[must_use]
    pub fn any_gt(&self, other: &Self) -> bool {
        !self.all_lte(other)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weight(ref_time: {}, proof_size: {})",
            self.ref_time, self.proof_size
        )
    }
}
