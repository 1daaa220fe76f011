// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `P(n, r)` / `C(n, r)` table for every `r` of one `n`.

use comboviz_app_core::view::group_thousands;
use comboviz_math::{combination_count, permutation_count};
use comfy_table::Table;

/// Build the table for `n` (already clamped by the caller).
pub fn count_table(n: u32) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["r".to_owned(), format!("P({n}, r)"), format!("C({n}, r)")]);
    for r in 0..=n {
        table.add_row(vec![
            r.to_string(),
            group_thousands(permutation_count(n, r)),
            group_thousands(combination_count(n, r)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_r() {
        assert_eq!(count_table(4).row_iter().count(), 5);
    }

    #[test]
    fn rendered_table_contains_counts() {
        let text = count_table(10).to_string();
        assert!(text.contains("P(10, r)"));
        assert!(text.contains("3,628,800"));
        assert!(text.contains("252"));
    }
}
