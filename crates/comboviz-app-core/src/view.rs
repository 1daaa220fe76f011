// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render-ready snapshot of a [`Selection`].

use serde::Serialize;

use crate::selection::{Mode, Selection};

/// One cell of the item grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Item label (`1..=n`).
    pub value: u32,
    /// Part of the previewed selection (the first `r` items).
    pub selected: bool,
}

/// Everything a front end needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    /// Total items.
    pub n: u32,
    /// Items chosen.
    pub r: u32,
    /// Current mode.
    pub mode: Mode,
    /// Item grid with the preview selection flagged.
    pub items: Vec<ItemView>,
    /// Number of possible selections.
    pub result: u64,
    /// `result` with thousands separators.
    pub result_display: String,
    /// One-line description of what is being counted.
    pub caption: String,
    /// Formula for the current mode, e.g. `C(5, 3) = 5! / (3! × (5-3)!)`.
    pub formula: String,
}

impl SelectionView {
    /// Snapshot `sel`.
    pub fn of(sel: &Selection) -> Self {
        let (n, r, mode) = (sel.n(), sel.r(), sel.mode());
        let items = sel
            .items()
            .map(|value| ItemView {
                value,
                selected: value <= r,
            })
            .collect();
        let result = sel.compute_result();
        Self {
            n,
            r,
            mode,
            items,
            result,
            result_display: group_thousands(result),
            caption: caption(r, mode),
            formula: formula(n, r, mode),
        }
    }
}

impl Selection {
    /// Render-ready snapshot of this selection.
    pub fn view(&self) -> SelectionView {
        SelectionView::of(self)
    }
}

/// `Picking 3 items where order DOES NOT matter`.
pub fn caption(r: u32, mode: Mode) -> String {
    if mode.order_matters() {
        format!("Picking {r} items where order DOES matter")
    } else {
        format!("Picking {r} items where order DOES NOT matter")
    }
}

/// Symbolic formula for `(n, r, mode)`.
pub fn formula(n: u32, r: u32, mode: Mode) -> String {
    let sym = mode.symbol();
    match mode {
        Mode::Combination => format!("{sym}({n}, {r}) = {n}! / ({r}! × ({n}-{r})!)"),
        Mode::Permutation => format!("{sym}({n}, {r}) = {n}! / ({n}-{r})!"),
    }
}

/// Format with `,` every three digits (`3628800` -> `3,628,800`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
