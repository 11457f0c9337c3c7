//! Library compatibility check
//!
//! Settles the library choice and reconciles the property bag with the
//! [`SupportMatrix`]. The check is advisory: unsupported flags the caller
//! explicitly enabled are kept and reported, never rejected.

use crate::configuration::Configuration;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::feature::{FeatureFlag, LibraryOption};
use crate::library::{Library, SupportMatrix};
use crate::normalize::{GeneratorSettings, NormalizedOptions};
use crate::options::keys;
use serde::{Deserialize, Serialize};

/// Snapshot produced by [`check_compatibility`]: the final typed options and
/// property bag for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    pub library: Library,
    pub settings: GeneratorSettings,
    pub configuration: Configuration,
    /// Features both enabled and honored by the library, in catalog order
    pub active_features: Vec<FeatureFlag>,
}

impl ResolvedOptions {
    /// Whether a feature is both enabled and honored by the library.
    pub fn is_feature_active(&self, flag: FeatureFlag) -> bool {
        self.active_features.contains(&flag)
    }

    pub fn active_features(&self) -> &[FeatureFlag] {
        &self.active_features
    }
}

/// Resolve the library and drop or flag options it does not honor.
///
/// - an unset library becomes the default, with one info diagnostic
/// - unsupported feature flags leave the bag unless explicitly enabled,
///   in which case they stay and a warning is recorded
/// - unsupported library options that were explicitly enabled are warned
///   about and kept
pub fn check_compatibility(
    normalized: &NormalizedOptions,
    matrix: &SupportMatrix,
) -> (ResolvedOptions, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut configuration = normalized.configuration.clone();
    let flags = &normalized.settings.flags;

    let library = match normalized.library {
        Some(library) => library,
        None => {
            let library = Library::default();
            configuration.insert(keys::LIBRARY, library.name());
            diagnostics.push(Diagnostic::info(
                keys::LIBRARY,
                format!("`library` option is empty. Default to {library}"),
            ));
            library
        }
    };

    for flag in FeatureFlag::ALL {
        if matrix.honors_feature(library, flag) {
            continue;
        }
        if flags.feature_explicitly_enabled(flag) {
            diagnostics.push(Diagnostic::warning(
                flag.key(),
                format!("`{flag}` is not supported by the {library} library and has no effect"),
            ));
        } else {
            tracing::debug!(%flag, %library, "Dropping unsupported feature flag");
            configuration.remove(flag.key());
        }
    }

    for option in LibraryOption::ALL {
        if !matrix.honors_option(library, option) && flags.option_explicitly_enabled(option) {
            diagnostics.push(Diagnostic::warning(
                option.key(),
                format!("`{option}` is only honored by the jaxrs-spec library, not {library}"),
            ));
        }
    }

    let active_features = FeatureFlag::ALL
        .into_iter()
        .filter(|flag| flags.feature(*flag) && matrix.honors_feature(library, *flag))
        .collect();

    (
        ResolvedOptions {
            library,
            settings: normalized.settings.clone(),
            configuration,
            active_features,
        },
        diagnostics,
    )
}
