//! kserver CLI
//!
//! Resolves Kotlin server generator options and prints the resulting
//! property bag and artifact plan.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::PlanArgs;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Kotlin server option resolver", "kserver".green().bold());
            println!();
            println!("Run {} for available commands.", "kserver --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Plan {
            dir,
            config,
            library,
            options,
            no_user_config,
            json,
        } => commands::run_plan(&PlanArgs {
            dir,
            config,
            library,
            overrides: options,
            no_user_config,
            json,
        }),
        Commands::Options { json } => commands::run_options(json),
        Commands::Libraries => commands::run_libraries(),
    }
}
