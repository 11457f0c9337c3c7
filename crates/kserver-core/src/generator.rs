//! Static description of the Kotlin server generator

use serde::Serialize;
use std::fmt;

/// Category of generator, as reported to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Client,
    Server,
    Documentation,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Client => write!(f, "client"),
            GeneratorKind::Server => write!(f, "server"),
            GeneratorKind::Documentation => write!(f, "documentation"),
        }
    }
}

/// A template rendered once per API or per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerItemTemplate {
    pub template: &'static str,
    /// Suffix appended to the generated class name
    pub extension: &'static str,
}

/// Metadata the host framework uses to register and drive the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratorInfo {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: GeneratorKind,
    pub template_dir: &'static str,
    pub default_output_folder: &'static str,
    pub api_template: PerItemTemplate,
    pub model_template: PerItemTemplate,
}

pub const KOTLIN_SERVER: GeneratorInfo = GeneratorInfo {
    name: "kotlin-server",
    help: "Generates a Kotlin server.",
    kind: GeneratorKind::Server,
    template_dir: "kotlin-server",
    default_output_folder: "generated-code/kotlin-server",
    api_template: PerItemTemplate {
        template: "api.mustache",
        extension: ".kt",
    },
    model_template: PerItemTemplate {
        template: "model.mustache",
        extension: ".kt",
    },
};

impl GeneratorInfo {
    /// Kotlin type used for schema arrays.
    pub fn array_type(&self, model_mutable: bool) -> &'static str {
        if model_mutable {
            "kotlin.collections.MutableList"
        } else {
            "kotlin.collections.List"
        }
    }
}
