//! Warlife CLI - run, watch, and manage game-of-war grids.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Warlife - a multi-team game-of-life war simulator
#[derive(Parser, Debug)]
#[command(name = "warlife")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a game directory to completion
    Run {
        /// Game directory (one .config file, one .cells file)
        dir: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress all grid output, keep the summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Interactive TUI to watch a game round by round
    Watch {
        /// Game directory (one .config file, one .cells file)
        dir: PathBuf,

        /// Round delay in milliseconds (default: 250)
        #[arg(long, default_value = "250")]
        speed: u64,
    },

    /// Convert a .grid map into .cells and .config files
    Convert {
        /// Map file (.grid)
        file: PathBuf,

        /// Overwrite existing outputs
        #[arg(short, long)]
        force: bool,
    },

    /// List loadable games under a directory
    List {
        /// Root directory to scan (default: current directory)
        #[arg(default_value = ".")]
        root: PathBuf,
    },

    /// Validate a game directory's artifacts
    Validate {
        /// Game directory to check
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run { dir, format, quiet } => cli::run::execute(&dir, format, quiet),
        Commands::Watch { dir, speed } => cli::watch::execute(&dir, speed),
        Commands::Convert { file, force } => cli::convert::execute(&file, force),
        Commands::List { root } => cli::list::execute(&root),
        Commands::Validate { dir } => cli::validate::execute(&dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
