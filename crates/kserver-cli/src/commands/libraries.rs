//! Libraries command implementation

use colored::Colorize;
use kserver_core::{Library, SupportMatrix};

use crate::error::Result;

/// Run the libraries command
pub fn run_libraries() -> Result<()> {
    let matrix = SupportMatrix::with_builtins();

    println!("{}", "Supported Libraries".bold());
    println!();

    for library in Library::ALL {
        let marker = if library == Library::default() {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "{}{} - {}",
            library.name().cyan().bold(),
            marker,
            library.description()
        );

        let Some(support) = matrix.get(library) else {
            println!("  {}", "No flags honored".dimmed());
            continue;
        };

        if !support.features.is_empty() {
            println!("  {}:", "Features".dimmed());
            for flag in &support.features {
                println!("    {} {}", "+".green(), flag);
            }
        }
        if !support.options.is_empty() {
            println!("  {}:", "Options".dimmed());
            for option in &support.options {
                println!("    {} {}", "+".green(), option);
            }
        }
        println!();
    }

    Ok(())
}
