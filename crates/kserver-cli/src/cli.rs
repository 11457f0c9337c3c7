//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use kserver_core::RawOptions;
use std::path::PathBuf;

/// kserver - Resolve Kotlin server generator options into an artifact plan
#[derive(Parser, Debug)]
#[command(name = "kserver")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve options and print the property bag and artifact plan
    ///
    /// Options are merged from the user config file, the project file
    /// (kserver.toml) and -o overrides, in that order.
    ///
    /// Examples:
    ///   kserver plan                              # Defaults (ktor)
    ///   kserver plan -l jaxrs-spec                # Interface stubs only
    ///   kserver plan -o featureResources=false    # Override one flag
    ///   kserver plan --json                       # Machine-readable output
    Plan {
        /// Project directory searched for kserver.toml
        #[arg(short = 'C', long, default_value = ".")]
        dir: PathBuf,

        /// Explicit options file (replaces kserver.toml discovery)
        #[arg(short, long, env = "KSERVER_CONFIG")]
        config: Option<PathBuf>,

        /// Library to target (shortcut for -o library=NAME)
        #[arg(short, long)]
        library: Option<String>,

        /// Option override, repeatable
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_override)]
        options: Vec<(String, String)>,

        /// Ignore the user config file
        #[arg(long)]
        no_user_config: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every recognized option with its default
    Options {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List supported libraries and the flags each one honors
    Libraries,
}

fn parse_override(input: &str) -> Result<(String, String), kserver_core::Error> {
    RawOptions::parse_override(input)
}
