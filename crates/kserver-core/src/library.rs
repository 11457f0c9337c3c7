//! Target server libraries and the flags each one honors

use crate::Error;
use crate::feature::{FeatureFlag, LibraryOption};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Server framework the generated project targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Library {
    /// Full middleware stack: application entry point, config, auth,
    /// Dockerfile and runtime resources.
    #[default]
    Ktor,

    /// Interface stubs only; the surrounding server is supplied by the user.
    JaxrsSpec,
}

impl Library {
    pub const ALL: [Library; 2] = [Library::Ktor, Library::JaxrsSpec];

    /// Canonical option value.
    pub fn name(&self) -> &'static str {
        match self {
            Library::Ktor => "ktor",
            Library::JaxrsSpec => "jaxrs-spec",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Library::Ktor => "ktor framework",
            Library::JaxrsSpec => "JAX-RS spec only",
        }
    }

    /// Whether this library produces the full server scaffolding.
    pub fn is_full_stack(&self) -> bool {
        matches!(self, Library::Ktor)
    }
}

impl FromStr for Library {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ktor" | "full-stack" => Ok(Library::Ktor),
            "jaxrs-spec" | "spec-only" => Ok(Library::JaxrsSpec),
            _ => Err(Error::UnknownLibrary {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flags honored by one library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibrarySupport {
    pub features: Vec<FeatureFlag>,
    pub options: Vec<LibraryOption>,
}

/// Static table of which flags each library honors.
///
/// A flag outside a library's support set has no effect on the artifacts
/// produced for that library. The table is advisory: resolution warns about
/// unsupported flags the caller explicitly enabled but never rejects them.
#[derive(Debug, Clone, Default)]
pub struct SupportMatrix {
    entries: HashMap<Library, LibrarySupport>,
}

impl SupportMatrix {
    /// Create an empty matrix where no library honors anything.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create the matrix for the built-in libraries.
    ///
    /// - `ktor` honors every feature flag
    /// - `jaxrs-spec` honors every library option
    pub fn with_builtins() -> Self {
        let mut matrix = Self::new();
        matrix.register(
            Library::Ktor,
            LibrarySupport {
                features: FeatureFlag::ALL.to_vec(),
                options: Vec::new(),
            },
        );
        matrix.register(
            Library::JaxrsSpec,
            LibrarySupport {
                features: Vec::new(),
                options: LibraryOption::ALL.to_vec(),
            },
        );
        matrix
    }

    /// Register the support set for a library, replacing any previous one.
    pub fn register(&mut self, library: Library, support: LibrarySupport) {
        self.entries.insert(library, support);
    }

    /// Support set for a library, if registered.
    pub fn get(&self, library: Library) -> Option<&LibrarySupport> {
        self.entries.get(&library)
    }

    pub fn honors_feature(&self, library: Library, flag: FeatureFlag) -> bool {
        self.get(library)
            .is_some_and(|support| support.features.contains(&flag))
    }

    pub fn honors_option(&self, library: Library, option: LibraryOption) -> bool {
        self.get(library)
            .is_some_and(|support| support.options.contains(&option))
    }
}
