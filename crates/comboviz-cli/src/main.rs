// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! comboviz: terminal front end for the ComboViz selection core.
//!
//! Wires clap arguments to the app core: `show` and `table` print once,
//! `interactive` runs a line-driven session and persists the last selection.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use comboviz_app_core::config::{ConfigService, MemoryConfigStore};
use comboviz_app_core::config_port::PrefsPort;
use comboviz_app_core::render_port::RenderPort;
use comboviz_app_core::Selection;
use comboviz_config_fs::FsConfigStore;
use tracing::{debug, info, warn, Level};

mod cli;
mod render;
mod repl;
mod table;

use cli::{Cli, Commands, ShowArgs, TableArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Some(Commands::Show(args)) => run_show(args),
        Some(Commands::Table(args)) => run_table(args),
        Some(Commands::Interactive) | None => run_interactive(&cli),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_max_level(level)
        .init();
}

/// Open the prefs store. Falls back to memory when the store cannot be opened;
/// the second value is a notice for the user in that case.
fn prefs_port(cli: &Cli) -> (Box<dyn PrefsPort>, Option<String>) {
    if cli.no_persist {
        debug!("prefs kept in memory");
        let port: Box<dyn PrefsPort> = Box::new(ConfigService::new(MemoryConfigStore::new()));
        return (port, None);
    }
    let opened = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    };
    match opened {
        Ok(store) => {
            debug!(path = %store.base().display(), "prefs on disk");
            let port: Box<dyn PrefsPort> = Box::new(ConfigService::new(store));
            (port, None)
        }
        Err(err) => {
            warn!(%err, "prefs store unavailable; using memory");
            let port: Box<dyn PrefsPort> = Box::new(ConfigService::new(MemoryConfigStore::new()));
            (port, Some(format!("prefs won't persist this session: {err}")))
        }
    }
}

fn run_show(args: &ShowArgs) -> Result<()> {
    let mut sel = Selection::default();
    if let Some(n) = args.n {
        sel.set_n(n);
    }
    if let Some(r) = args.r {
        sel.set_r(r);
    }
    if let Some(mode) = args.mode {
        sel.set_mode(mode.into());
    }
    let view = sel.view();

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &view).context("failed to encode view")?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render::render_view(&view))?;
    }
    Ok(())
}

fn run_table(args: &TableArgs) -> Result<()> {
    let mut sel = Selection::default();
    sel.set_n(args.n);
    let mut out = io::stdout().lock();
    writeln!(out, "{}", table::count_table(sel.n()))?;
    Ok(())
}

fn run_interactive(cli: &Cli) -> Result<()> {
    let (prefs, fallback_notice) = prefs_port(cli);
    let start = prefs
        .load_prefs()
        .map(|p| p.to_selection())
        .unwrap_or_default();
    info!(n = start.n(), r = start.r(), mode = %start.mode(), "starting session");

    let mut renderer = render::TextRenderer::new(io::stdout().lock());
    if let Some(message) = fallback_notice {
        renderer.notice(&message)?;
    }
    let end = repl::run(io::stdin().lock(), &mut renderer, prefs.as_ref(), start)?;
    debug!(n = end.n(), r = end.r(), "session ended");
    Ok(())
}
