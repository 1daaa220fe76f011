// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Selection state controller: the current `(n, r, mode)` tuple.
//!
//! Every mutation clamps its input, so `0 <= r <= n` and `N_MIN <= n <= N_MAX`
//! hold after any call. Derived values (items, result) are recomputed on read.

use std::fmt;
use std::ops::RangeInclusive;

use comboviz_math::{combination_count, permutation_count};
use serde::{Deserialize, Serialize};

/// Smallest allowed item count.
pub const N_MIN: u32 = 1;
/// Largest allowed item count.
pub const N_MAX: u32 = 10;
/// Smallest allowed selection size.
pub const R_MIN: u32 = 0;

/// Whether the order of chosen items matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Ordered selection, `P(n, r)`.
    Permutation,
    /// Unordered selection, `C(n, r)`.
    #[default]
    Combination,
}

impl Mode {
    /// Single-letter symbol used in formulas (`P` or `C`).
    pub fn symbol(self) -> char {
        match self {
            Mode::Permutation => 'P',
            Mode::Combination => 'C',
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Permutation => Mode::Combination,
            Mode::Combination => Mode::Permutation,
        }
    }

    /// True for [`Mode::Permutation`].
    pub fn order_matters(self) -> bool {
        matches!(self, Mode::Permutation)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Permutation => f.write_str("Permutation"),
            Mode::Combination => f.write_str("Combination"),
        }
    }
}

/// Count for `(n, r, mode)`; `0` when `r > n`.
///
/// Exposed separately from [`Selection`] so the guard can be exercised with a
/// tuple the controller would never hold.
pub fn compute_result(n: u32, r: u32, mode: Mode) -> u64 {
    if r > n {
        return 0;
    }
    match mode {
        Mode::Permutation => permutation_count(n, r),
        Mode::Combination => combination_count(n, r),
    }
}

/// Clamp a signed request into `[lo, hi]`.
fn clamp_to(requested: i64, lo: u32, hi: u32) -> u32 {
    if requested <= i64::from(lo) {
        lo
    } else if requested >= i64::from(hi) {
        hi
    } else {
        u32::try_from(requested).unwrap_or(hi)
    }
}

/// Current `(n, r, mode)`; only changed through the clamping setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    n: u32,
    r: u32,
    mode: Mode,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            n: 5,
            r: 3,
            mode: Mode::Combination,
        }
    }
}

impl Selection {
    /// Build a selection from arbitrary requests; `n` is clamped first, then `r` against it.
    pub fn new(n: i64, r: i64, mode: Mode) -> Self {
        let mut sel = Self {
            n: N_MIN,
            r: R_MIN,
            mode,
        };
        sel.set_n(n);
        sel.set_r(r);
        sel
    }

    /// Total number of items.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Number of items chosen.
    pub fn r(&self) -> u32 {
        self.r
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Set `n` clamped to `[N_MIN, N_MAX]`, pulling `r` down if it no longer fits.
    pub fn set_n(&mut self, requested: i64) {
        self.n = clamp_to(requested, N_MIN, N_MAX);
        if self.r > self.n {
            self.r = self.n;
        }
    }

    /// Set `r` clamped to `[R_MIN, n]`.
    pub fn set_r(&mut self, requested: i64) {
        self.r = clamp_to(requested, R_MIN, self.n);
    }

    /// Replace the mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Stepper `+` on `n`.
    pub fn increment_n(&mut self) {
        self.set_n(i64::from(self.n) + 1);
    }

    /// Stepper `-` on `n`.
    pub fn decrement_n(&mut self) {
        self.set_n(i64::from(self.n) - 1);
    }

    /// Stepper `+` on `r`.
    pub fn increment_r(&mut self) {
        self.set_r(i64::from(self.r) + 1);
    }

    /// Stepper `-` on `r`.
    pub fn decrement_r(&mut self) {
        self.set_r(i64::from(self.r) - 1);
    }

    /// Items `1..=n`.
    pub fn items(&self) -> RangeInclusive<u32> {
        1..=self.n
    }

    /// Count of possible selections for the current tuple.
    pub fn compute_result(&self) -> u64 {
        compute_result(self.n, self.r, self.mode)
    }
}
