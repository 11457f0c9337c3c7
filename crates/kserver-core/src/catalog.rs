//! Catalog of every option the generator recognizes

use crate::feature::{FeatureFlag, LibraryOption};
use crate::library::Library;
use crate::options::{defaults, keys};
use serde::Serialize;

/// Value type of an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type", content = "choices")]
pub enum OptionKind {
    Boolean,
    Text,
    /// One of a fixed set of (value, description) pairs
    Choice(Vec<(String, String)>),
}

/// Description of one recognized option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDescriptor {
    pub key: &'static str,
    pub description: String,
    pub kind: OptionKind,
    /// Default rendered as option text
    pub default: String,
}

impl OptionDescriptor {
    fn boolean(key: &'static str, description: impl Into<String>, default: bool) -> Self {
        Self {
            key,
            description: description.into(),
            kind: OptionKind::Boolean,
            default: default.to_string(),
        }
    }

    fn text(key: &'static str, description: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            key,
            description: description.into(),
            kind: OptionKind::Text,
            default: default.into(),
        }
    }
}

/// All recognized options in a fixed order: library, feature flags,
/// library options, then layout and generation options.
pub fn option_catalog() -> Vec<OptionDescriptor> {
    let mut catalog = Vec::new();

    catalog.push(OptionDescriptor {
        key: keys::LIBRARY,
        description: "library template (sub-template) to use".to_string(),
        kind: OptionKind::Choice(
            Library::ALL
                .iter()
                .map(|l| (l.name().to_string(), l.description().to_string()))
                .collect(),
        ),
        default: Library::default().name().to_string(),
    });

    for flag in FeatureFlag::ALL {
        catalog.push(OptionDescriptor::boolean(
            flag.key(),
            flag.description(),
            flag.default_enabled(),
        ));
    }

    for option in LibraryOption::ALL {
        catalog.push(OptionDescriptor::boolean(
            option.key(),
            option.description(),
            option.default_enabled(),
        ));
    }

    catalog.push(OptionDescriptor::text(
        keys::PACKAGE_NAME,
        "Generated code package name; drives the output directory",
        defaults::PACKAGE_NAME,
    ));
    catalog.push(OptionDescriptor::text(
        keys::API_PACKAGE,
        "Package for generated API classes",
        format!("{}.apis", defaults::PACKAGE_NAME),
    ));
    catalog.push(OptionDescriptor::text(
        keys::MODEL_PACKAGE,
        "Package for generated model classes",
        format!("{}.models", defaults::PACKAGE_NAME),
    ));
    catalog.push(OptionDescriptor::text(
        keys::ARTIFACT_ID,
        "Generated artifact id (name of jar)",
        defaults::ARTIFACT_ID,
    ));
    catalog.push(OptionDescriptor::text(
        keys::SOURCE_FOLDER,
        "Source folder for generated code",
        defaults::SOURCE_FOLDER,
    ));
    catalog.push(OptionDescriptor::text(
        keys::RESOURCES_FOLDER,
        "Folder for runtime configuration resources",
        defaults::RESOURCES_FOLDER,
    ));
    catalog.push(OptionDescriptor::boolean(
        keys::GENERATE_APIS,
        "Generate API sources; gates the typed routes file",
        defaults::GENERATE_APIS,
    ));
    catalog.push(OptionDescriptor::boolean(
        keys::MODEL_MUTABLE,
        "Create mutable models",
        defaults::MODEL_MUTABLE,
    ));

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::is_known_key;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_known_key() {
        let catalog = option_catalog();
        let keys: HashSet<_> = catalog.iter().map(|d| d.key).collect();

        assert_eq!(keys.len(), catalog.len(), "catalog keys must be unique");
        assert!(keys.iter().all(|k| is_known_key(k)));
        for flag in FeatureFlag::ALL {
            assert!(keys.contains(flag.key()));
        }
        for option in LibraryOption::ALL {
            assert!(keys.contains(option.key()));
        }
    }

    #[test]
    fn test_library_is_first_and_lists_choices() {
        let catalog = option_catalog();
        let library = &catalog[0];
        assert_eq!(library.key, "library");
        assert_eq!(library.default, "ktor");
        match &library.kind {
            OptionKind::Choice(choices) => {
                let names: Vec<_> = choices.iter().map(|(n, _)| n.as_str()).collect();
                assert_eq!(names, vec!["ktor", "jaxrs-spec"]);
            }
            other => panic!("expected choice, got {other:?}"),
        }
    }

    #[test]
    fn test_feature_defaults_are_rendered() {
        let catalog = option_catalog();
        let cors = catalog.iter().find(|d| d.key == "featureCORS").unwrap();
        assert_eq!(cors.default, "false");
        assert_eq!(cors.kind, OptionKind::Boolean);
    }
}
