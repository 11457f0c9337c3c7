//! Artifact plan assembly
//!
//! Turns resolved options into the ordered list of supporting files the
//! rendering stage must produce. Order is part of the contract: consumers
//! render in list order and a later entry for the same path wins.

use crate::compat::ResolvedOptions;
use crate::feature::FeatureFlag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Template identifiers for supporting files.
pub mod templates {
    pub const README: &str = "README.mustache";
    pub const DOCKERFILE: &str = "Dockerfile.mustache";
    pub const BUILD_GRADLE: &str = "build.gradle.mustache";
    pub const SETTINGS_GRADLE: &str = "settings.gradle.mustache";
    pub const GRADLE_PROPERTIES: &str = "gradle.properties";
    pub const APP_MAIN: &str = "AppMain.kt.mustache";
    pub const CONFIGURATION: &str = "Configuration.kt.mustache";
    pub const PATHS: &str = "Paths.kt.mustache";
    pub const APPLICATION_CONF: &str = "application.conf.mustache";
    pub const LOGBACK: &str = "logback.xml";
    pub const API_KEY_AUTH: &str = "ApiKeyAuth.kt.mustache";
}

/// One supporting file to render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactPlanEntry {
    /// Template identifier within the generator's template directory
    pub template: String,
    /// Output folder relative to the output root; empty for the root
    pub folder: PathBuf,
    pub file_name: String,
}

impl ArtifactPlanEntry {
    pub fn new(
        template: impl Into<String>,
        folder: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            folder: folder.into(),
            file_name: file_name.into(),
        }
    }

    /// Output path relative to the output root.
    pub fn output_path(&self) -> PathBuf {
        self.folder.join(&self.file_name)
    }
}

/// Ordered, append-only list of supporting files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactPlan {
    entries: Vec<ArtifactPlanEntry>,
}

impl ArtifactPlan {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, entry: ArtifactPlanEntry) {
        tracing::trace!(template = %entry.template, path = ?entry.output_path(), "Planned artifact");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ArtifactPlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactPlanEntry> {
        self.entries.iter()
    }

    /// First entry rendered from the given template.
    pub fn find_template(&self, template: &str) -> Option<&ArtifactPlanEntry> {
        self.entries.iter().find(|e| e.template == template)
    }

    pub fn contains_template(&self, template: &str) -> bool {
        self.find_template(template).is_some()
    }

    /// Whether any entry writes to the given relative path.
    pub fn contains_path(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.entries.iter().any(|e| e.output_path() == path)
    }

    /// Entries that survive last-write-wins on their output path.
    ///
    /// An entry is kept only if no later entry writes the same path. Relative
    /// order of the survivors is preserved.
    pub fn effective_entries(&self) -> Vec<&ArtifactPlanEntry> {
        let mut last_index: HashMap<PathBuf, usize> = HashMap::new();
        for (index, entry) in self.entries.iter().enumerate() {
            last_index.insert(entry.output_path(), index);
        }
        self.entries
            .iter()
            .enumerate()
            .filter(|(index, entry)| last_index.get(&entry.output_path()) == Some(index))
            .map(|(_, entry)| entry)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ArtifactPlan {
    type Item = &'a ArtifactPlanEntry;
    type IntoIter = std::slice::Iter<'a, ArtifactPlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Assemble the artifact plan for resolved options.
///
/// Steps, in order:
/// 1. `README.md` at the root
/// 2. `Dockerfile` at the root (full-stack only)
/// 3. `build.gradle`, `settings.gradle`, `gradle.properties` at the root
/// 4. full-stack only: `AppMain.kt` and `Configuration.kt` in the package
///    directory, `Paths.kt` when APIs are generated and typed resources are
///    active for the library,
///    `application.conf` and `logback.xml` in the resources directory, and
///    `ApiKeyAuth.kt` in the infrastructure directory
///
/// Interface stubs for the spec-only library are rendered per API by the
/// template stage and never appear in this plan.
pub fn assemble(options: &ResolvedOptions) -> ArtifactPlan {
    let library = options.library;
    let settings = &options.settings;
    let layout = &settings.layout;
    let root = layout.root_dir();
    let mut plan = ArtifactPlan::new();

    plan.push(ArtifactPlanEntry::new(templates::README, &root, "README.md"));

    if library.is_full_stack() {
        plan.push(ArtifactPlanEntry::new(templates::DOCKERFILE, &root, "Dockerfile"));
    }

    plan.push(ArtifactPlanEntry::new(templates::BUILD_GRADLE, &root, "build.gradle"));
    plan.push(ArtifactPlanEntry::new(
        templates::SETTINGS_GRADLE,
        &root,
        "settings.gradle",
    ));
    plan.push(ArtifactPlanEntry::new(
        templates::GRADLE_PROPERTIES,
        &root,
        "gradle.properties",
    ));

    if library.is_full_stack() {
        let package_dir = layout.package_dir();
        let resources_dir = layout.resources_dir();

        plan.push(ArtifactPlanEntry::new(
            templates::APP_MAIN,
            &package_dir,
            "AppMain.kt",
        ));
        plan.push(ArtifactPlanEntry::new(
            templates::CONFIGURATION,
            &package_dir,
            "Configuration.kt",
        ));

        if settings.generate_apis && options.is_feature_active(FeatureFlag::Resources) {
            plan.push(ArtifactPlanEntry::new(templates::PATHS, &package_dir, "Paths.kt"));
        }

        plan.push(ArtifactPlanEntry::new(
            templates::APPLICATION_CONF,
            &resources_dir,
            "application.conf",
        ));
        plan.push(ArtifactPlanEntry::new(
            templates::LOGBACK,
            &resources_dir,
            "logback.xml",
        ));
        plan.push(ArtifactPlanEntry::new(
            templates::API_KEY_AUTH,
            layout.infrastructure_dir(),
            "ApiKeyAuth.kt",
        ));
    }

    tracing::debug!(%library, artifacts = plan.len(), "Assembled artifact plan");
    plan
}
