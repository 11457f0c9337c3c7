//! Options command implementation

use colored::Colorize;
use kserver_core::{OptionKind, option_catalog};

use crate::error::Result;

/// Run the options command
pub fn run_options(json: bool) -> Result<()> {
    let catalog = option_catalog();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("{}", "Recognized Options".bold());
    println!();

    for option in &catalog {
        let kind = match &option.kind {
            OptionKind::Boolean => "bool".to_string(),
            OptionKind::Text => "string".to_string(),
            OptionKind::Choice(choices) => choices
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join("|"),
        };
        println!(
            "  {:<28} {:<18} default: {}",
            option.key.green(),
            kind.dimmed(),
            option.default.cyan()
        );
        println!("      {}", option.description);
    }

    println!();
    println!(
        "{} {} options. Use {} to set one.",
        "Total:".dimmed(),
        catalog.len(),
        "kserver plan -o KEY=VALUE".cyan()
    );

    Ok(())
}
