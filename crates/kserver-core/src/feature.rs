//! Boolean switches understood by the generator
//!
//! Two families exist:
//!
//! - [`FeatureFlag`]: middleware toggles for the full-stack (ktor) library
//! - [`LibraryOption`]: interface-generation switches for the spec-only
//!   (jaxrs-spec) library

use serde::{Deserialize, Serialize};
use std::fmt;

/// Middleware feature toggled on or off for the generated server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeatureFlag {
    #[serde(rename = "featureAutoHead")]
    AutoHead,
    #[serde(rename = "featureConditionalHeaders")]
    ConditionalHeaders,
    #[serde(rename = "featureHSTS")]
    Hsts,
    #[serde(rename = "featureCORS")]
    Cors,
    #[serde(rename = "featureCompression")]
    Compression,
    #[serde(rename = "featureResources")]
    Resources,
    #[serde(rename = "featureMetrics")]
    Metrics,
}

impl FeatureFlag {
    /// All feature flags, in catalog order.
    pub const ALL: [FeatureFlag; 7] = [
        FeatureFlag::AutoHead,
        FeatureFlag::ConditionalHeaders,
        FeatureFlag::Hsts,
        FeatureFlag::Cors,
        FeatureFlag::Compression,
        FeatureFlag::Resources,
        FeatureFlag::Metrics,
    ];

    /// Option key used in raw options and in the property bag.
    pub fn key(&self) -> &'static str {
        match self {
            FeatureFlag::AutoHead => "featureAutoHead",
            FeatureFlag::ConditionalHeaders => "featureConditionalHeaders",
            FeatureFlag::Hsts => "featureHSTS",
            FeatureFlag::Cors => "featureCORS",
            FeatureFlag::Compression => "featureCompression",
            FeatureFlag::Resources => "featureResources",
            FeatureFlag::Metrics => "featureMetrics",
        }
    }

    /// Value used when the caller does not set the flag.
    pub fn default_enabled(&self) -> bool {
        match self {
            FeatureFlag::AutoHead => true,
            FeatureFlag::ConditionalHeaders => false,
            FeatureFlag::Hsts => true,
            FeatureFlag::Cors => false,
            FeatureFlag::Compression => true,
            FeatureFlag::Resources => true,
            FeatureFlag::Metrics => true,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FeatureFlag::AutoHead => {
                "Automatically provide responses to HEAD requests for existing routes that have the GET verb defined."
            }
            FeatureFlag::ConditionalHeaders => {
                "Avoid sending content if client already has same content, by checking ETag or LastModified properties."
            }
            FeatureFlag::Hsts => {
                "Send the Strict-Transport-Security header so clients only talk to the server over HTTPS."
            }
            FeatureFlag::Cors => {
                "Install an interceptor implementing Cross-Origin Resource Sharing (CORS). See enable-cors.org."
            }
            FeatureFlag::Compression => {
                "Adds ability to compress outgoing content using gzip, deflate or custom encoder and thus reduce size of the response."
            }
            FeatureFlag::Resources => {
                "Generates routes in a typed way, for both: constructing URLs and reading the parameters."
            }
            FeatureFlag::Metrics => "Enables metrics feature.",
        }
    }

    /// Look up a flag by its option key (case-sensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.key() == key)
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Library-specific switch consumed by the interface-stub templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LibraryOption {
    InterfaceOnly,
    UseBeanValidation,
    UseCoroutines,
    ReturnResponse,
}

impl LibraryOption {
    pub const ALL: [LibraryOption; 4] = [
        LibraryOption::InterfaceOnly,
        LibraryOption::UseBeanValidation,
        LibraryOption::UseCoroutines,
        LibraryOption::ReturnResponse,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LibraryOption::InterfaceOnly => "interfaceOnly",
            LibraryOption::UseBeanValidation => "useBeanValidation",
            LibraryOption::UseCoroutines => "useCoroutines",
            LibraryOption::ReturnResponse => "returnResponse",
        }
    }

    /// All library options default to off.
    pub fn default_enabled(&self) -> bool {
        false
    }

    /// Whether the property bag encodes this option by key presence.
    ///
    /// Presence flags are only written when enabled; `useBeanValidation`
    /// is always written as an explicit boolean.
    pub fn is_presence_flag(&self) -> bool {
        !matches!(self, LibraryOption::UseBeanValidation)
    }

    pub fn description(&self) -> &'static str {
        match self {
            LibraryOption::InterfaceOnly => {
                "Whether to generate only API interface stubs without the server files. This option is currently supported only when using jaxrs-spec library."
            }
            LibraryOption::UseBeanValidation => {
                "Use BeanValidation API annotations. This option is currently supported only when using jaxrs-spec library."
            }
            LibraryOption::UseCoroutines => {
                "Whether to use the Coroutines. This option is currently supported only when using jaxrs-spec library."
            }
            LibraryOption::ReturnResponse => {
                "Whether generate API interface should return javax.ws.rs.core.Response instead of a deserialized entity. Only useful if interfaceOnly is true. This option is currently supported only when using jaxrs-spec library."
            }
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.key() == key)
    }
}

impl fmt::Display for LibraryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
