// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Combinatorics engine for ComboViz.
//!
//! Stateless, side-effect free helpers for counting selections of `r` items
//! out of `n`:
//! - [`factorial`]: `k!` with `0! = 1! = 1`.
//! - [`permutation_count`]: `P(n, r) = n! / (n - r)!` (order matters).
//! - [`combination_count`]: `C(n, r) = n! / (r! · (n - r)!)` (order does not matter).
//!
//! Invariants:
//! - Inputs are unsigned, so negative arguments cannot be expressed.
//! - Both counts are `0` when `r > n`; callers that keep `r <= n` never see it.
//! - Results are exact for `n <= MAX_FACTORIAL_INPUT`. Above that bound
//!   `factorial` saturates at `u64::MAX` and the counts stop being meaningful.

/// Largest `k` for which `k!` fits in a `u64` (`20! = 2_432_902_008_176_640_000`).
pub const MAX_FACTORIAL_INPUT: u32 = 20;

/// Return `k!`.
///
/// `factorial(0) == factorial(1) == 1`; otherwise the product `2 × 3 × … × k`.
/// Saturates at `u64::MAX` past [`MAX_FACTORIAL_INPUT`].
pub fn factorial(k: u32) -> u64 {
    if k <= 1 {
        return 1;
    }
    (2..=u64::from(k)).fold(1, u64::saturating_mul)
}

/// Number of ordered selections of `r` items out of `n`: `n! / (n - r)!`.
///
/// Returns `0` when `r > n`.
pub fn permutation_count(n: u32, r: u32) -> u64 {
    let Some(rest) = n.checked_sub(r) else {
        return 0;
    };
    factorial(n) / factorial(rest)
}

/// Number of unordered selections of `r` items out of `n`: `n! / (r! · (n - r)!)`.
///
/// Returns `0` when `r > n`.
pub fn combination_count(n: u32, r: u32) -> u64 {
    let Some(rest) = n.checked_sub(r) else {
        return 0;
    };
    factorial(n) / factorial(r).saturating_mul(factorial(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_known_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(2), 2);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(MAX_FACTORIAL_INPUT), 2_432_902_008_176_640_000);
    }

    #[test]
    fn factorial_saturates_past_u64() {
        assert_eq!(factorial(MAX_FACTORIAL_INPUT + 1), u64::MAX);
    }

    #[test]
    fn counts_for_five_choose_three() {
        assert_eq!(permutation_count(5, 3), 60);
        assert_eq!(combination_count(5, 3), 10);
    }

    #[test]
    fn empty_and_full_selections() {
        assert_eq!(permutation_count(7, 0), 1);
        assert_eq!(combination_count(7, 0), 1);
        assert_eq!(permutation_count(10, 10), 3_628_800);
        assert_eq!(combination_count(10, 10), 1);
    }

    #[test]
    fn out_of_domain_counts_are_zero() {
        assert_eq!(permutation_count(3, 4), 0);
        assert_eq!(combination_count(3, 4), 0);
        assert_eq!(combination_count(0, u32::MAX), 0);
    }
}
