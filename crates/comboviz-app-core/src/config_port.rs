// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Prefs port shared across ComboViz front ends.

use tracing::warn;

use crate::config::{ConfigError, ConfigService, ConfigStore};
use crate::prefs::{ComboPrefs, PREFS_KEY};

/// Loading/saving the last selection.
pub trait PrefsPort {
    /// Load saved prefs (returns None if missing or unreadable).
    fn load_prefs(&self) -> Option<ComboPrefs>;
    /// Persist prefs.
    fn save_prefs(&self, prefs: &ComboPrefs) -> Result<(), ConfigError>;
}

impl<S> PrefsPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_prefs(&self) -> Option<ComboPrefs> {
        match self.load(PREFS_KEY) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(%err, "ignoring unreadable prefs");
                None
            }
        }
    }

    fn save_prefs(&self, prefs: &ComboPrefs) -> Result<(), ConfigError> {
        self.save(PREFS_KEY, prefs)
    }
}
