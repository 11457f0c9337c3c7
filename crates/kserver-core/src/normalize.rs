//! Option normalization: raw strings to typed flags and a canonical bag
//!
//! Every recognized key ends up in the [`Configuration`] with its canonical
//! typed value, defaults included. The exception is the presence flags
//! (`interfaceOnly`, `useCoroutines`, `returnResponse`): templates test them
//! by key presence, so a false value is represented by leaving the key out.
//! The typed [`FlagSet`] always carries a plain bool for every flag.

use crate::configuration::Configuration;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::feature::{FeatureFlag, LibraryOption};
use crate::layout::OutputLayout;
use crate::library::Library;
use crate::options::{RawOptions, defaults, keys, parse_bool};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Typed values of every boolean switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    pub features: BTreeMap<FeatureFlag, bool>,
    pub options: BTreeMap<LibraryOption, bool>,
    /// Keys the caller supplied with a valid boolean value
    pub explicit: BTreeSet<String>,
}

impl FlagSet {
    /// Value of a feature flag, falling back to its default if unset.
    pub fn feature(&self, flag: FeatureFlag) -> bool {
        self.features
            .get(&flag)
            .copied()
            .unwrap_or_else(|| flag.default_enabled())
    }

    pub fn option(&self, option: LibraryOption) -> bool {
        self.options
            .get(&option)
            .copied()
            .unwrap_or_else(|| option.default_enabled())
    }

    pub fn is_explicit(&self, key: &str) -> bool {
        self.explicit.contains(key)
    }

    /// The caller asked for this feature with an explicit `"true"`.
    pub fn feature_explicitly_enabled(&self, flag: FeatureFlag) -> bool {
        self.is_explicit(flag.key()) && self.feature(flag)
    }

    pub fn option_explicitly_enabled(&self, option: LibraryOption) -> bool {
        self.is_explicit(option.key()) && self.option(option)
    }
}

/// Typed generator settings shared by the later stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorSettings {
    pub flags: FlagSet,
    pub layout: OutputLayout,
    pub artifact_id: String,
    pub api_package: String,
    pub model_package: String,
    pub generate_apis: bool,
    pub model_mutable: bool,
}

/// Snapshot produced by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOptions {
    /// Selected library; `None` when the caller left it empty
    pub library: Option<Library>,
    pub settings: GeneratorSettings,
    pub configuration: Configuration,
}

/// Whether a key is consumed by normalization rather than passed through.
pub fn is_known_key(key: &str) -> bool {
    FeatureFlag::from_key(key).is_some()
        || LibraryOption::from_key(key).is_some()
        || matches!(
            key,
            keys::LIBRARY
                | keys::PACKAGE_NAME
                | keys::API_PACKAGE
                | keys::MODEL_PACKAGE
                | keys::ARTIFACT_ID
                | keys::SOURCE_FOLDER
                | keys::RESOURCES_FOLDER
                | keys::GENERATE_APIS
                | keys::MODEL_MUTABLE
        )
}

/// Normalize raw options into typed settings and a canonical property bag.
///
/// Never fails: malformed values fall back to defaults and are reported in
/// the returned diagnostics. Unknown keys are copied into the bag as text.
pub fn normalize(raw: &RawOptions) -> (NormalizedOptions, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut explicit = BTreeSet::new();

    let mut configuration: Configuration = raw
        .iter()
        .filter(|(key, _)| !is_known_key(key))
        .collect();

    let library = read_library(raw, &mut diagnostics);
    if let Some(library) = library {
        configuration.insert(keys::LIBRARY, library.name());
    }

    let mut options = BTreeMap::new();
    for option in LibraryOption::ALL {
        let value = read_bool(
            raw,
            option.key(),
            option.default_enabled(),
            &mut explicit,
            &mut diagnostics,
        );
        options.insert(option, value);
        if value || !option.is_presence_flag() {
            configuration.insert(option.key(), value);
        }
    }

    let mut features = BTreeMap::new();
    for flag in FeatureFlag::ALL {
        let value = read_bool(
            raw,
            flag.key(),
            flag.default_enabled(),
            &mut explicit,
            &mut diagnostics,
        );
        features.insert(flag, value);
        configuration.insert(flag.key(), value);
    }

    let package_name = read_text(raw, keys::PACKAGE_NAME, defaults::PACKAGE_NAME);
    let artifact_id = read_text(raw, keys::ARTIFACT_ID, defaults::ARTIFACT_ID);
    let source_folder = read_text(raw, keys::SOURCE_FOLDER, defaults::SOURCE_FOLDER);
    let resources_folder = read_text(raw, keys::RESOURCES_FOLDER, defaults::RESOURCES_FOLDER);
    let api_package = read_text(raw, keys::API_PACKAGE, &format!("{package_name}.apis"));
    let model_package = read_text(raw, keys::MODEL_PACKAGE, &format!("{package_name}.models"));

    let generate_apis = read_bool(
        raw,
        keys::GENERATE_APIS,
        defaults::GENERATE_APIS,
        &mut explicit,
        &mut diagnostics,
    );
    let model_mutable = read_bool(
        raw,
        keys::MODEL_MUTABLE,
        defaults::MODEL_MUTABLE,
        &mut explicit,
        &mut diagnostics,
    );

    configuration.insert(keys::PACKAGE_NAME, package_name.as_str());
    configuration.insert(keys::ARTIFACT_ID, artifact_id.as_str());
    configuration.insert(keys::SOURCE_FOLDER, source_folder.as_str());
    configuration.insert(keys::RESOURCES_FOLDER, resources_folder.as_str());
    configuration.insert(keys::API_PACKAGE, api_package.as_str());
    configuration.insert(keys::MODEL_PACKAGE, model_package.as_str());
    configuration.insert(keys::GENERATE_APIS, generate_apis);
    configuration.insert(keys::MODEL_MUTABLE, model_mutable);

    tracing::debug!(
        ?library,
        known = configuration.len(),
        warnings = diagnostics.len(),
        "Normalized options"
    );

    let settings = GeneratorSettings {
        flags: FlagSet {
            features,
            options,
            explicit,
        },
        layout: OutputLayout::new(package_name, source_folder, resources_folder),
        artifact_id,
        api_package,
        model_package,
        generate_apis,
        model_mutable,
    };

    (
        NormalizedOptions {
            library,
            settings,
            configuration,
        },
        diagnostics,
    )
}

fn read_library(raw: &RawOptions, diagnostics: &mut Diagnostics) -> Option<Library> {
    let name = raw.get(keys::LIBRARY)?;
    if name.trim().is_empty() {
        return None;
    }
    match name.parse::<Library>() {
        Ok(library) => Some(library),
        Err(_) => {
            let fallback = Library::default();
            diagnostics.push(Diagnostic::warning(
                keys::LIBRARY,
                format!("Unknown library `{name}`. Falling back to {fallback}"),
            ));
            Some(fallback)
        }
    }
}

fn read_bool(
    raw: &RawOptions,
    key: &str,
    default: bool,
    explicit: &mut BTreeSet<String>,
    diagnostics: &mut Diagnostics,
) -> bool {
    let Some(value) = raw.get(key) else {
        return default;
    };
    match parse_bool(key, value) {
        Ok(parsed) => {
            explicit.insert(key.to_string());
            parsed
        }
        Err(_) => {
            diagnostics.push(Diagnostic::warning(
                key,
                format!("`{value}` is not a boolean. Using default {default}"),
            ));
            default
        }
    }
}

/// Text options use the given value verbatim; empty means unset.
fn read_text(raw: &RawOptions, key: &str, default: &str) -> String {
    match raw.get(key) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::PropertyValue;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_defaults_fill_the_bag() {
        let (normalized, diagnostics) = normalize(&RawOptions::new());

        assert!(diagnostics.is_empty());
        assert_eq!(normalized.library, None);
        let config = &normalized.configuration;
        for flag in FeatureFlag::ALL {
            assert_eq!(config.get_bool(flag.key()), Some(flag.default_enabled()));
        }
        assert_eq!(config.get_bool("useBeanValidation"), Some(false));
        assert!(!config.contains_key("interfaceOnly"));
        assert!(!config.contains_key("useCoroutines"));
        assert!(!config.contains_key("returnResponse"));
        assert!(!config.contains_key("library"));
        assert_eq!(config.get_str("packageName"), Some("org.openapitools.server"));
        assert_eq!(config.get_str("apiPackage"), Some("org.openapitools.server.apis"));
        assert_eq!(
            config.get_str("modelPackage"),
            Some("org.openapitools.server.models")
        );
        assert_eq!(config.get_bool("generateApis"), Some(true));
    }

    #[rstest]
    #[case("interfaceOnly")]
    #[case("useCoroutines")]
    #[case("returnResponse")]
    fn test_presence_flags(#[case] key: &str) {
        let (on, _) = normalize(&RawOptions::new().with(key, "true"));
        assert_eq!(on.configuration.get(key), Some(&PropertyValue::Bool(true)));

        let (off, _) = normalize(&RawOptions::new().with(key, "false"));
        assert!(!off.configuration.contains_key(key));
        assert!(!off.configuration.is_enabled(key));
    }

    #[test]
    fn test_bean_validation_is_always_written() {
        let (off, _) = normalize(&RawOptions::new().with("useBeanValidation", "false"));
        assert_eq!(off.configuration.get_bool("useBeanValidation"), Some(false));

        let (on, _) = normalize(&RawOptions::new().with("useBeanValidation", "true"));
        assert_eq!(on.configuration.get_bool("useBeanValidation"), Some(true));
        assert!(on.settings.flags.option(LibraryOption::UseBeanValidation));
    }

    #[test]
    fn test_invalid_boolean_falls_back_with_warning() {
        let raw = RawOptions::new()
            .with("featureHSTS", "nope")
            .with("featureCORS", "TRUE");
        let (normalized, diagnostics) = normalize(&raw);

        assert_eq!(normalized.configuration.get_bool("featureHSTS"), Some(true));
        assert_eq!(normalized.configuration.get_bool("featureCORS"), Some(false));
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.has_warnings());
        assert!(!normalized.settings.flags.is_explicit("featureHSTS"));
    }

    #[test]
    fn test_unknown_library_falls_back_to_default() {
        let (normalized, diagnostics) = normalize(&RawOptions::new().with("library", "spring"));
        assert_eq!(normalized.library, Some(Library::Ktor));
        assert_eq!(normalized.configuration.get_str("library"), Some("ktor"));
        assert_eq!(diagnostics.for_option("library").count(), 1);
    }

    #[test]
    fn test_library_alias_is_canonicalized() {
        let (normalized, diagnostics) =
            normalize(&RawOptions::new().with("library", "spec-only"));
        assert_eq!(normalized.library, Some(Library::JaxrsSpec));
        assert_eq!(
            normalized.configuration.get_str("library"),
            Some("jaxrs-spec")
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_empty_library_is_left_unset() {
        let (normalized, diagnostics) = normalize(&RawOptions::new().with("library", ""));
        assert_eq!(normalized.library, None);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let raw = RawOptions::new().with("groupId", "org.example");
        let (normalized, _) = normalize(&raw);
        assert_eq!(normalized.configuration.get_str("groupId"), Some("org.example"));
    }

    #[test]
    fn test_explicit_packages_are_kept() {
        let raw = RawOptions::new()
            .with("packageName", "com.acme")
            .with("apiPackage", "com.acme.routes");
        let (normalized, _) = normalize(&raw);
        assert_eq!(normalized.settings.api_package, "com.acme.routes");
        assert_eq!(normalized.settings.model_package, "com.acme.models");
        assert_eq!(normalized.settings.layout.package_name, "com.acme");
    }

    #[test]
    fn test_explicit_tracking() {
        let raw = RawOptions::new()
            .with("featureCORS", "true")
            .with("featureMetrics", "false");
        let (normalized, _) = normalize(&raw);
        let flags = &normalized.settings.flags;

        assert!(flags.feature_explicitly_enabled(FeatureFlag::Cors));
        assert!(!flags.feature_explicitly_enabled(FeatureFlag::Metrics));
        assert!(flags.is_explicit("featureMetrics"));
        // Defaulted to true but never requested
        assert!(!flags.feature_explicitly_enabled(FeatureFlag::Hsts));
    }
}
