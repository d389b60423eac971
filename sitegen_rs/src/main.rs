//! sitegen - render the marketing site to static HTML files.

mod generate;
mod lint;
mod routes;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "sitegen", version)]
#[command(about = "Static page generator for the Kanex Fire marketing site")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show detailed progress
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render every registered route to an output directory
    Build {
        /// Output directory for the generated pages
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },

    /// List registered routes
    Routes {
        /// Emit a machine-readable JSON array
        #[arg(long)]
        json: bool,
    },

    /// Lint the content tables against the model invariants
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    // Logs go to stderr so `routes --json` stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Build { out } => {
            generate::build_site(&out)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Routes { json } => {
            routes::print_routes(json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => Ok(lint::run_check()),
    }
}
