// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Plain-text rendering of a selection view.

use std::fmt::Write as _;
use std::io::{self, Write};

use comboviz_app_core::render_port::RenderPort;
use comboviz_app_core::SelectionView;

/// Item grid: selected items are bracketed, e.g. `[1] [2] [3]  4   5 `.
pub fn grid_line(view: &SelectionView) -> String {
    let cells: Vec<String> = view
        .items
        .iter()
        .map(|item| {
            if item.selected {
                format!("[{}]", item.value)
            } else {
                format!(" {} ", item.value)
            }
        })
        .collect();
    cells.join(" ")
}

/// Full text block for `view`.
pub fn render_view(view: &SelectionView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})   n = {}   r = {}",
        view.mode,
        view.mode.symbol(),
        view.n,
        view.r
    );
    let _ = writeln!(out, "{}", view.caption);
    let _ = writeln!(out, "{}", grid_line(view));
    let _ = writeln!(out, "Total Possibilities: {}", view.result_display);
    let _ = writeln!(out, "Formula: {}", view.formula);
    out
}

/// Writes views and notices to any `io::Write`.
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RenderPort for TextRenderer<W> {
    type Error = io::Error;

    fn present(&mut self, view: &SelectionView) -> io::Result<()> {
        writeln!(self.out, "{}", render_view(view))?;
        self.out.flush()
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()
    }
}
