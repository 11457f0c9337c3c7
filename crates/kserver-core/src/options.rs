//! Raw option input and the option keys the generator recognizes

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option keys that are not feature flags or library options.
pub mod keys {
    pub const LIBRARY: &str = "library";
    pub const PACKAGE_NAME: &str = "packageName";
    pub const API_PACKAGE: &str = "apiPackage";
    pub const MODEL_PACKAGE: &str = "modelPackage";
    pub const ARTIFACT_ID: &str = "artifactId";
    pub const SOURCE_FOLDER: &str = "sourceFolder";
    pub const RESOURCES_FOLDER: &str = "resourcesFolder";
    pub const GENERATE_APIS: &str = "generateApis";
    pub const MODEL_MUTABLE: &str = "modelMutable";
}

/// Built-in defaults for the non-flag options.
pub mod defaults {
    pub const PACKAGE_NAME: &str = "org.openapitools.server";
    pub const ARTIFACT_ID: &str = "kotlin-server";
    pub const SOURCE_FOLDER: &str = "src/main/kotlin";
    pub const RESOURCES_FOLDER: &str = "src/main/resources";
    pub const GENERATE_APIS: bool = true;
    pub const MODEL_MUTABLE: bool = false;
}

/// Option values exactly as supplied by a caller, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawOptions {
    values: BTreeMap<String, String>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge another set of options into this one; `other` wins on conflict.
    pub fn merge(&mut self, other: &RawOptions) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Parse a `key=value` override as given on the command line.
    ///
    /// The value may be empty (`library=` selects the default library) and
    /// may itself contain `=`.
    ///
    /// # Example
    ///
    /// ```
    /// use kserver_core::RawOptions;
    ///
    /// let (key, value) = RawOptions::parse_override("packageName=com.example").unwrap();
    /// assert_eq!(key, "packageName");
    /// assert_eq!(value, "com.example");
    /// ```
    pub fn parse_override(input: &str) -> Result<(String, String)> {
        match input.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(Error::InvalidOverride {
                input: input.to_string(),
            }),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RawOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse a boolean option value.
///
/// Only the exact strings `"true"` and `"false"` are accepted.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidBoolean {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", Some(true))]
    #[case("false", Some(false))]
    #[case("True", None)]
    #[case("FALSE", None)]
    #[case("yes", None)]
    #[case("1", None)]
    #[case("", None)]
    #[case(" true", None)]
    fn test_parse_bool_is_case_sensitive(#[case] input: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool("flag", input).ok(), expected);
    }

    #[test]
    fn test_parse_bool_error_names_key() {
        let err = parse_bool("featureCORS", "maybe").unwrap_err();
        assert!(err.to_string().contains("featureCORS"));
        assert!(err.to_string().contains("maybe"));
    }

    #[rstest]
    #[case("library=ktor", "library", "ktor")]
    #[case("library=", "library", "")]
    #[case(" packageName =com.example", "packageName", "com.example")]
    #[case("x=a=b", "x", "a=b")]
    fn test_parse_override(#[case] input: &str, #[case] key: &str, #[case] value: &str) {
        assert_eq!(
            RawOptions::parse_override(input).unwrap(),
            (key.to_string(), value.to_string())
        );
    }

    #[rstest]
    #[case("library")]
    #[case("=ktor")]
    #[case("")]
    fn test_parse_override_invalid(#[case] input: &str) {
        assert!(matches!(
            RawOptions::parse_override(input),
            Err(Error::InvalidOverride { .. })
        ));
    }

    #[test]
    fn test_merge_overrides_existing_keys() {
        let mut base = RawOptions::new()
            .with("library", "ktor")
            .with("featureCORS", "false");
        let overlay = RawOptions::new()
            .with("featureCORS", "true")
            .with("packageName", "com.example");

        base.merge(&overlay);

        assert_eq!(base.get("library"), Some("ktor"));
        assert_eq!(base.get("featureCORS"), Some("true"));
        assert_eq!(base.get("packageName"), Some("com.example"));
        assert_eq!(base.len(), 3);
    }
}
