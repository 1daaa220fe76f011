// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port trait for front ends to present a selection without the core knowing
//! how it is drawn (terminal, GUI, test recorder).

use crate::view::SelectionView;

/// Presentation port; `present` is called once after every state change.
pub trait RenderPort {
    /// Error raised by the underlying surface.
    type Error;

    /// Draw `view`, replacing whatever was shown before.
    fn present(&mut self, view: &SelectionView) -> Result<(), Self::Error>;

    /// Show a short one-line message (hints, save failures).
    fn notice(&mut self, message: &str) -> Result<(), Self::Error>;
}
