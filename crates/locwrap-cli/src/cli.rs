use std::io::Write;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::logging;
use crate::lookup::{LookupArgs, run_lookup};
use crate::stats::{StatsArgs, run_stats};
use crate::wrap::{WrapArgs, run_wrap};

#[derive(Debug, Parser)]
#[command(
    name = "locwrap",
    about = "Markup-aware line wrapping for localized game strings",
    version
)]
pub struct Cli {
    /// Debug logging for the wrapping and catalog crates (overridden by RUST_LOG).
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Wrap a file or stdin and print the result.
    Wrap(WrapArgs),

    /// Print one wrapped translation from a locale directory.
    Lookup(LookupArgs),

    /// Print entry counts per category.
    Stats(StatsArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_directives());
    run(cli)
}

impl Cli {
    /// Default log filter for this invocation.
    #[must_use]
    pub fn log_directives(&self) -> &'static str {
        match &self.command {
            _ if self.verbose => logging::VERBOSE_DIRECTIVES,
            Commands::Lookup(args) if args.debug_keys => logging::KEY_LOG_DIRECTIVES,
            _ => logging::QUIET_DIRECTIVES,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Dispatch `cli`, writing command output to `out`.
pub fn execute(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Wrap(args) => run_wrap(args, out),
        Commands::Lookup(args) => run_lookup(args, out),
        Commands::Stats(args) => run_stats(args, out),
    }
}
