//! Layered option sources
//!
//! Raw options are gathered from several places, later layers overriding
//! earlier ones:
//!
//! 1. **User defaults** - `<config_dir>/kserver/config.toml`
//! 2. **Project file** - an explicit path, or `kserver.toml` in the project
//!    directory
//! 3. **Overrides** - `key=value` pairs from the command line
//!
//! Option files are TOML with a single `[options]` table:
//!
//! ```toml
//! [options]
//! library = "ktor"
//! packageName = "com.example.server"
//! featureCORS = true
//! ```

use crate::options::RawOptions;
use crate::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project directory.
pub const PROJECT_FILE_NAME: &str = "kserver.toml";

/// Parsed contents of one option file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsFile {
    #[serde(default)]
    pub options: BTreeMap<String, toml::Value>,
}

impl OptionsFile {
    /// Parse an option file from TOML content.
    ///
    /// # Example
    ///
    /// ```
    /// use kserver_core::OptionsFile;
    ///
    /// let file = OptionsFile::parse(r#"
    /// [options]
    /// library = "jaxrs-spec"
    /// interfaceOnly = true
    /// "#).unwrap();
    ///
    /// assert_eq!(file.options.len(), 2);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let file: OptionsFile = toml::from_str(content)?;
        Ok(file)
    }

    /// Read and parse an option file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Convert values to option text.
    ///
    /// Strings are taken verbatim, booleans and numbers use their TOML
    /// spelling. Arrays, tables and datetimes are rejected.
    pub fn to_raw_options(&self, origin: &Path) -> Result<RawOptions> {
        let mut raw = RawOptions::new();
        for (key, value) in &self.options {
            let text = match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                _ => {
                    return Err(Error::UnsupportedValue {
                        path: origin.to_path_buf(),
                        key: key.clone(),
                    });
                }
            };
            raw.set(key.clone(), text);
        }
        Ok(raw)
    }
}

/// Collects raw options from all layers.
#[derive(Debug, Clone)]
pub struct OptionSources {
    /// Directory searched for `kserver.toml` when no explicit file is given
    project_dir: PathBuf,

    /// Explicit project file; must exist when set
    project_file: Option<PathBuf>,

    /// Override for the user config directory (used for testing).
    /// When `None`, `dirs::config_dir()` is used.
    user_config_dir_override: Option<PathBuf>,

    /// Skip the user defaults layer entirely
    skip_user_defaults: bool,

    overrides: RawOptions,
}

impl OptionSources {
    /// Create sources rooted at a project directory.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            project_file: None,
            user_config_dir_override: None,
            skip_user_defaults: false,
            overrides: RawOptions::new(),
        }
    }

    /// Use an explicit project file instead of `kserver.toml`.
    pub fn with_project_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_file = Some(path.into());
        self
    }

    /// Use a custom directory in place of the platform config directory.
    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir_override = Some(dir.into());
        self
    }

    /// Ignore user defaults.
    pub fn without_user_defaults(mut self) -> Self {
        self.skip_user_defaults = true;
        self
    }

    /// Add command-line overrides; later calls win.
    pub fn with_overrides(mut self, overrides: &RawOptions) -> Self {
        self.overrides.merge(overrides);
        self
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        if self.skip_user_defaults {
            return None;
        }
        if let Some(ref dir) = self.user_config_dir_override {
            return Some(dir.join("config.toml"));
        }
        dirs::config_dir().map(|d| d.join("kserver").join("config.toml"))
    }

    /// Merge all layers into one set of raw options.
    ///
    /// Missing default files are skipped. A missing explicit project file or
    /// invalid TOML in any file is an error.
    pub fn load(&self) -> Result<RawOptions> {
        let mut raw = RawOptions::new();

        // Layer 1 - User defaults
        if let Some(path) = self.user_config_path() {
            if path.is_file() {
                tracing::debug!(?path, "Loading user defaults (layer 1)");
                raw.merge(&OptionsFile::load(&path)?.to_raw_options(&path)?);
            } else {
                tracing::debug!(?path, "No user defaults found (layer 1), skipping");
            }
        }

        // Layer 2 - Project file
        match &self.project_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::OptionsFileNotFound { path: path.clone() });
                }
                tracing::debug!(?path, "Loading project file (layer 2)");
                raw.merge(&OptionsFile::load(path)?.to_raw_options(path)?);
            }
            None => {
                let path = self.project_dir.join(PROJECT_FILE_NAME);
                if path.is_file() {
                    tracing::debug!(?path, "Loading project file (layer 2)");
                    raw.merge(&OptionsFile::load(&path)?.to_raw_options(&path)?);
                }
            }
        }


        // Layer 3 - Overrides
        if !self.overrides.is_empty() {
            tracing::debug!(count = self.overrides.len(), "Applying overrides (layer 3)");
            raw.merge(&self.overrides);
        }

        Ok(raw)
    }
}
