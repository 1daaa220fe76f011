// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use comboviz_app_core::Mode;

#[derive(Parser, Debug)]
#[command(
    name = "comboviz",
    version,
    about = "Permutation and combination counts with a live item grid",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Store prefs under DIR instead of the platform config dir.
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Keep prefs in memory only.
    #[arg(long, global = true, conflicts_with = "config_dir")]
    pub no_persist: bool,

    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the view for one selection and exit.
    Show(ShowArgs),
    /// Print P(n, r) and C(n, r) for every r in 0..=n.
    Table(TableArgs),
    /// Step through selections interactively (default).
    Interactive,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Total items (clamped to 1..=10).
    #[arg(long, allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// Items chosen (clamped to 0..=n).
    #[arg(long, allow_negative_numbers = true)]
    pub r: Option<i64>,

    /// Whether order matters.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Emit the view as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Total items (clamped to 1..=10).
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    pub n: i64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    /// Order does not matter.
    #[value(alias = "c")]
    Combination,
    /// Order matters.
    #[value(alias = "p")]
    Permutation,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Combination => Mode::Combination,
            ModeArg::Permutation => Mode::Permutation,
        }
    }
}
