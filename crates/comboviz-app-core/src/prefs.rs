// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved ComboViz preferences: the last selection the user was looking at.

use serde::{Deserialize, Serialize};

use crate::selection::{Mode, Selection};

/// Config key the prefs blob is stored under.
pub const PREFS_KEY: &str = "comboviz_prefs";

/// Persisted selection. Fields are raw requests; they are clamped on the way
/// back into a [`Selection`], so a hand-edited file cannot break the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboPrefs {
    /// Last item count.
    pub n: i64,
    /// Last selection size.
    pub r: i64,
    /// Last mode.
    pub mode: Mode,
}

impl Default for ComboPrefs {
    fn default() -> Self {
        Self::from(&Selection::default())
    }
}

impl From<&Selection> for ComboPrefs {
    fn from(sel: &Selection) -> Self {
        Self {
            n: i64::from(sel.n()),
            r: i64::from(sel.r()),
            mode: sel.mode(),
        }
    }
}

impl ComboPrefs {
    /// Clamp into a valid selection.
    pub fn to_selection(&self) -> Selection {
        Selection::new(self.n, self.r, self.mode)
    }
}
