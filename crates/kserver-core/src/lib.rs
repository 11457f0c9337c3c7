//! Option resolution for the Kotlin server generator
//!
//! Given a library selection and a set of boolean feature flags, this crate
//! decides which supporting files the generator must render, where each one
//! is written, and which flags the selected library actually honors.
//!
//! - **Option normalization**: raw strings become typed flags and a canonical
//!   property bag for the template stage
//! - **Compatibility check**: the library is defaulted and the bag is
//!   reconciled with the [`SupportMatrix`]
//! - **Artifact plan assembly**: an ordered list of (template, output path)
//!   entries
//!
//! # Architecture
//!
//! ```text
//!   OptionSources (user file, project file, overrides)
//!          |
//!      RawOptions
//!          |
//!     normalize ──> NormalizedOptions
//!          |
//!  check_compatibility ──> ResolvedOptions (Configuration)
//!          |
//!      assemble ──> ArtifactPlan
//! ```
//!
//! Rendering templates and writing files are left to the caller.
//!
//! # Example
//!
//! ```
//! use kserver_core::{ConfigResolver, RawOptions};
//!
//! let raw = RawOptions::new()
//!     .with("library", "ktor")
//!     .with("featureResources", "false");
//! let resolution = ConfigResolver::new().resolve(&raw);
//!
//! assert!(resolution.plan.contains_template("Dockerfile.mustache"));
//! assert!(!resolution.plan.contains_template("Paths.kt.mustache"));
//! ```

pub mod catalog;
pub mod compat;
pub mod configuration;
pub mod diagnostics;
pub mod error;
pub mod feature;
pub mod generator;
pub mod layout;
pub mod library;
pub mod normalize;
pub mod options;
pub mod plan;
pub mod resolver;
pub mod sources;

pub use catalog::{OptionDescriptor, OptionKind, option_catalog};
pub use compat::{ResolvedOptions, check_compatibility};
pub use configuration::{Configuration, PropertyValue};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{Error, Result};
pub use feature::{FeatureFlag, LibraryOption};
pub use generator::{GeneratorInfo, GeneratorKind, KOTLIN_SERVER};
pub use layout::OutputLayout;
pub use library::{Library, LibrarySupport, SupportMatrix};
pub use normalize::{FlagSet, GeneratorSettings, NormalizedOptions, normalize};
pub use options::{RawOptions, parse_bool};
pub use plan::{ArtifactPlan, ArtifactPlanEntry, assemble};
pub use resolver::{ConfigResolver, Resolution};
pub use sources::{OptionSources, OptionsFile, PROJECT_FILE_NAME};
