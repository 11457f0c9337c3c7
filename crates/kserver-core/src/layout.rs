//! Output directory derivation from the package name

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Subfolder of the package directory holding infrastructure sources.
pub const INFRASTRUCTURE_DIR: &str = "infrastructure";

/// Where generated sources and resources are placed in the output tree.
///
/// Paths are built with [`PathBuf::join`], so they use the host platform's
/// separator. Package names are not validated: a malformed name yields a
/// malformed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputLayout {
    /// Dotted namespace, e.g. `org.openapitools.server`
    pub package_name: String,
    /// Root of the source tree, e.g. `src/main/kotlin`
    pub source_folder: String,
    /// Root of the resources tree, independent of the package name
    pub resources_folder: String,
}

impl OutputLayout {
    pub fn new(
        package_name: impl Into<String>,
        source_folder: impl Into<String>,
        resources_folder: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            source_folder: source_folder.into(),
            resources_folder: resources_folder.into(),
        }
    }

    /// Output root; root-level artifacts are written here.
    pub fn root_dir(&self) -> PathBuf {
        PathBuf::new()
    }

    /// Source folder joined with each `.`-separated package segment.
    ///
    /// # Example
    ///
    /// ```
    /// use kserver_core::OutputLayout;
    /// use std::path::Path;
    ///
    /// let layout = OutputLayout::new("org.openapitools.server", "src", "res");
    /// assert_eq!(
    ///     layout.package_dir(),
    ///     Path::new("src").join("org").join("openapitools").join("server")
    /// );
    /// ```
    pub fn package_dir(&self) -> PathBuf {
        self.package_name
            .split('.')
            .fold(PathBuf::from(&self.source_folder), |dir, segment| {
                dir.join(segment)
            })
    }

    pub fn infrastructure_dir(&self) -> PathBuf {
        self.package_dir().join(INFRASTRUCTURE_DIR)
    }

    pub fn resources_dir(&self) -> PathBuf {
        PathBuf::from(&self.resources_folder)
    }
}
