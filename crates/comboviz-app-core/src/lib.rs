// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application core for ComboViz front ends (selection state, view
//! model, reducer, prefs). Keeps UI adapters thin and framework-agnostic.

pub mod config;
pub mod config_port;
pub mod events;
pub mod prefs;
pub mod render_port;
pub mod selection;
pub mod view;

pub use selection::{compute_result, Mode, Selection};
pub use view::SelectionView;
