// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interactive session: one input line -> one event -> reduce -> re-render.

use std::io::BufRead;

use anyhow::{Context, Result};
use comboviz_app_core::config_port::PrefsPort;
use comboviz_app_core::events::{reduce, UiEffect, UiEvent};
use comboviz_app_core::prefs::ComboPrefs;
use comboviz_app_core::render_port::RenderPort;
use comboviz_app_core::{Mode, Selection};
use thiserror::Error;
use tracing::{debug, error};

pub const HELP: &str = "commands: n+ n- r+ r- | n <int> | r <int> | c p t | reset | save | help | q";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{0}` is not a whole number")]
    BadNumber(String),
}

/// Parse one trimmed, non-empty line.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let lower = line.trim().to_ascii_lowercase();
    let mut parts = lower.split_whitespace();
    let head = parts.next().unwrap_or_default();
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(ParseError::Unknown(line.trim().to_owned()));
    }

    let event = match (head, arg) {
        ("n+", None) => UiEvent::IncrementN,
        ("n-", None) => UiEvent::DecrementN,
        ("r+", None) => UiEvent::IncrementR,
        ("r-", None) => UiEvent::DecrementR,
        ("n", Some(v)) => UiEvent::SetN(parse_int(v)?),
        ("r", Some(v)) => UiEvent::SetR(parse_int(v)?),
        ("c" | "combination", None) => UiEvent::SetMode(Mode::Combination),
        ("p" | "permutation", None) => UiEvent::SetMode(Mode::Permutation),
        ("t" | "toggle", None) => UiEvent::ToggleMode,
        ("reset", None) => UiEvent::Reset,
        ("save", None) => UiEvent::SavePrefs,
        ("q" | "quit" | "exit", None) => UiEvent::Quit,
        ("help" | "?", None) => return Ok(Command::Help),
        _ => return Err(ParseError::Unknown(line.trim().to_owned())),
    };
    Ok(Command::Event(event))
}

fn parse_int(raw: &str) -> Result<i64, ParseError> {
    raw.parse().map_err(|_| ParseError::BadNumber(raw.to_owned()))
}

/// Drive a session until `q` or end of input; returns the final selection.
pub fn run<In, R, P>(input: In, renderer: &mut R, prefs: &P, start: Selection) -> Result<Selection>
where
    In: BufRead,
    R: RenderPort,
    R::Error: std::error::Error + Send + Sync + 'static,
    P: PrefsPort + ?Sized,
{
    let mut sel = start;
    renderer.present(&sel.view())?;
    renderer.notice(HELP)?;

    let mut lines = input.lines();
    loop {
        let line = match lines.next() {
            Some(line) => line.context("failed to read input")?,
            // end of input behaves like `q`
            None => "q".to_owned(),
        };
        if line.trim().is_empty() {
            continue;
        }

        let ev = match parse_command(&line) {
            Ok(Command::Event(ev)) => ev,
            Ok(Command::Help) => {
                renderer.notice(HELP)?;
                continue;
            }
            Err(err) => {
                renderer.notice(&err.to_string())?;
                continue;
            }
        };

        let (next, effects) = reduce(&sel, ev);
        debug!(?ev, n = next.n(), r = next.r(), mode = %next.mode(), "reduced");
        if next != sel {
            sel = next;
            renderer.present(&sel.view())?;
        }

        for fx in effects {
            match fx {
                UiEffect::SavePrefs => match prefs.save_prefs(&ComboPrefs::from(&sel)) {
                    Ok(()) => debug!("prefs saved"),
                    Err(err) => {
                        error!(%err, "failed to save prefs");
                        renderer.notice(&format!("could not save prefs: {err}"))?;
                    }
                },
                UiEffect::Quit => return Ok(sel),
            }
        }
    }
}
