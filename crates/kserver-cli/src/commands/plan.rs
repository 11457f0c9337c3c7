//! Plan command implementation

use std::path::PathBuf;

use colored::Colorize;
use kserver_core::{
    ConfigResolver, OptionSources, PropertyValue, RawOptions, Resolution, Severity,
};

use crate::error::{CliError, Result};

/// Arguments for the plan command
#[derive(Debug, Clone, Default)]
pub struct PlanArgs {
    pub dir: PathBuf,
    pub config: Option<PathBuf>,
    pub library: Option<String>,
    pub overrides: Vec<(String, String)>,
    pub no_user_config: bool,
    pub json: bool,
}

/// Gather options from all sources and resolve them.
pub fn resolve(args: &PlanArgs) -> Result<Resolution> {
    if !args.dir.is_dir() {
        return Err(CliError::user(format!(
            "Project directory {} does not exist",
            args.dir.display()
        )));
    }

    let mut overrides = RawOptions::new();
    if let Some(library) = &args.library {
        overrides.set("library", library.as_str());
    }
    for (key, value) in &args.overrides {
        overrides.set(key.as_str(), value.as_str());
    }

    let mut sources = OptionSources::new(&args.dir).with_overrides(&overrides);
    if let Some(config) = &args.config {
        sources = sources.with_project_file(config);
    }
    if args.no_user_config {
        sources = sources.without_user_defaults();
    }

    let raw = sources.load()?;
    Ok(ConfigResolver::new().resolve(&raw))
}

/// Run the plan command
pub fn run_plan(args: &PlanArgs) -> Result<()> {
    let resolution = resolve(args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    print_diagnostics(&resolution);

    println!(
        "{} {}",
        "Library:".bold(),
        resolution.library().to_string().cyan()
    );
    println!("{} {}", "Array type:".bold(), resolution.array_type());
    println!();

    println!("{}:", "Configuration".bold());
    for (key, value) in resolution.configuration().iter() {
        let rendered = match value {
            PropertyValue::Bool(true) => "true".green(),
            PropertyValue::Bool(false) => "false".dimmed(),
            PropertyValue::Text(text) => text.normal(),
        };
        println!("  {:<28} {}", key, rendered);
    }
    println!();

    println!("{}:", "Artifacts".bold());
    for entry in &resolution.plan {
        println!(
            "  {:<28} {}",
            entry.output_path().display().to_string().green(),
            entry.template.dimmed()
        );
    }
    println!();
    println!(
        "{} {} artifacts planned.",
        "Total:".dimmed(),
        resolution.plan.len()
    );

    Ok(())
}

fn print_diagnostics(resolution: &Resolution) {
    for diagnostic in &resolution.diagnostics {
        let label = match diagnostic.severity {
            Severity::Info => "info:".blue().bold(),
            Severity::Warning => "warning:".yellow().bold(),
        };
        eprintln!("{} {}", label, diagnostic.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kserver_core::Library;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(dir: &TempDir) -> PlanArgs {
        PlanArgs {
            dir: dir.path().to_path_buf(),
            no_user_config: true,
            ..PlanArgs::default()
        }
    }

    #[test]
    fn test_library_shortcut_is_applied() {
        let temp = TempDir::new().unwrap();
        let args = PlanArgs {
            library: Some("jaxrs-spec".to_string()),
            ..args_for(&temp)
        };

        let resolution = resolve(&args).unwrap();
        assert_eq!(resolution.library(), Library::JaxrsSpec);
    }

    #[test]
    fn test_explicit_override_beats_library_shortcut() {
        let temp = TempDir::new().unwrap();
        let args = PlanArgs {
            library: Some("jaxrs-spec".to_string()),
            overrides: vec![("library".to_string(), "ktor".to_string())],
            ..args_for(&temp)
        };

        let resolution = resolve(&args).unwrap();
        assert_eq!(resolution.library(), Library::Ktor);
    }

    #[test]
    fn test_project_file_is_read() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("kserver.toml"),
            "[options]\nfeatureResources = false\n",
        )
        .unwrap();

        let resolution = resolve(&args_for(&temp)).unwrap();
        assert!(!resolution.plan.contains_template("Paths.kt.mustache"));
    }

    #[test]
    fn test_missing_directory_is_user_error() {
        let temp = TempDir::new().unwrap();
        let args = PlanArgs {
            dir: temp.path().join("missing"),
            ..args_for(&temp)
        };

        assert!(matches!(resolve(&args), Err(CliError::User { .. })));
    }
}
