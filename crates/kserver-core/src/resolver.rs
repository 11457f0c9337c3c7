//! The resolution pipeline: normalization, compatibility check, assembly
//!
//! Each stage takes the previous snapshot by reference and returns a new
//! one, so a [`ConfigResolver`] holds no per-run state and can be shared
//! freely between runs.

use crate::compat::{ResolvedOptions, check_compatibility};
use crate::configuration::Configuration;
use crate::diagnostics::Diagnostics;
use crate::generator::{GeneratorInfo, KOTLIN_SERVER};
use crate::library::{Library, SupportMatrix};
use crate::normalize::normalize;
use crate::options::RawOptions;
use crate::plan::{ArtifactPlan, assemble};
use serde::Serialize;

/// Everything one generation run needs from option resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub options: ResolvedOptions,
    pub plan: ArtifactPlan,
    /// Findings from all stages, in detection order
    pub diagnostics: Diagnostics,
}

impl Resolution {
    pub fn library(&self) -> Library {
        self.options.library
    }

    /// The property bag for the rendering stage.
    pub fn configuration(&self) -> &Configuration {
        &self.options.configuration
    }

    /// Kotlin type the model templates use for schema arrays.
    pub fn array_type(&self) -> &'static str {
        KOTLIN_SERVER.array_type(self.options.settings.model_mutable)
    }
}

/// Resolves raw generator options into a property bag and artifact plan.
///
/// # Example
///
/// ```
/// use kserver_core::{ConfigResolver, Library, RawOptions};
///
/// let resolver = ConfigResolver::new();
/// let resolution = resolver.resolve(&RawOptions::new().with("library", "jaxrs-spec"));
///
/// assert_eq!(resolution.library(), Library::JaxrsSpec);
/// assert_eq!(resolution.plan.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    matrix: SupportMatrix,
    generator: GeneratorInfo,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Create a resolver using the built-in support matrix.
    pub fn new() -> Self {
        Self::with_matrix(SupportMatrix::with_builtins())
    }

    /// Create a resolver with a custom support matrix.
    pub fn with_matrix(matrix: SupportMatrix) -> Self {
        Self {
            matrix,
            generator: KOTLIN_SERVER,
        }
    }

    pub fn matrix(&self) -> &SupportMatrix {
        &self.matrix
    }

    pub fn generator(&self) -> &GeneratorInfo {
        &self.generator
    }

    /// Run all three stages.
    ///
    /// Never fails; anomalies are logged and returned as diagnostics.
    pub fn resolve(&self, raw: &RawOptions) -> Resolution {
        tracing::debug!(generator = self.generator.name, options = raw.len(), "Resolving options");

        let (normalized, mut diagnostics) = normalize(raw);
        let (options, compat_diagnostics) = check_compatibility(&normalized, &self.matrix);
        diagnostics.extend(compat_diagnostics);
        let plan = assemble(&options);

        Resolution {
            options,
            plan,
            diagnostics,
        }
    }
}
