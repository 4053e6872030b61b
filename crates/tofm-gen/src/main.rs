use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    build::{self, BuildArgs},
    check::{self, CheckArgs},
    list::{self, ListArgs},
    version::{self, VersionArgs},
};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "tofm-gen", about = "Formal-methods lesson notebook generator")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate lesson notebooks (the default when no subcommand is given).
    Build(BuildArgs),
    /// List the lessons defined in a catalog.
    List(ListArgs),
    /// Validate existing notebook files against the nbformat schema.
    Check(CheckArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let _logger = logging::init_logging(cli.verbose)?;
    match cli.command {
        None => build::run(&BuildArgs::default()),
        Some(Command::Build(args)) => build::run(&args),
        Some(Command::List(args)) => list::run(&args),
        Some(Command::Check(args)) => check::run(&args),
        Some(Command::Version(args)) => version::run(&args),
    }
}
