// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure state transitions for ComboViz front ends (steppers, mode toggle, prefs).

use crate::selection::{Mode, Selection};

/// User intent, as translated by a front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// `+` on the item count.
    IncrementN,
    /// `-` on the item count.
    DecrementN,
    /// `+` on the selection size.
    IncrementR,
    /// `-` on the selection size.
    DecrementR,
    /// Typed item count (clamped).
    SetN(i64),
    /// Typed selection size (clamped).
    SetR(i64),
    /// Pick a mode.
    SetMode(Mode),
    /// Flip between permutation and combination.
    ToggleMode,
    /// Back to the initial `C(5, 3)` state.
    Reset,
    /// Persist the current selection.
    SavePrefs,
    /// Leave the app.
    Quit,
}

/// Side effects the front end must carry out after a reduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Write the current selection to the prefs store.
    SavePrefs,
    /// Stop the event loop.
    Quit,
}

/// Apply `ev` to `sel`, returning the next state and any effects.
pub fn reduce(sel: &Selection, ev: UiEvent) -> (Selection, Vec<UiEffect>) {
    let mut next = *sel;
    let mut fx = Vec::new();
    match ev {
        UiEvent::IncrementN => next.increment_n(),
        UiEvent::DecrementN => next.decrement_n(),
        UiEvent::IncrementR => next.increment_r(),
        UiEvent::DecrementR => next.decrement_r(),
        UiEvent::SetN(n) => next.set_n(n),
        UiEvent::SetR(r) => next.set_r(r),
        UiEvent::SetMode(mode) => next.set_mode(mode),
        UiEvent::ToggleMode => next.set_mode(sel.mode().toggled()),
        UiEvent::Reset => next = Selection::default(),
        UiEvent::SavePrefs => fx.push(UiEffect::SavePrefs),
        UiEvent::Quit => {
            // quitting also remembers where the user left off
            fx.push(UiEffect::SavePrefs);
            fx.push(UiEffect::Quit);
        }
    }
    (next, fx)
}
