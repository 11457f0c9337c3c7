//! Non-fatal findings recorded while resolving options
//!
//! Every anomaly is logged through `tracing` where it is detected and also
//! collected here so callers can surface it to users.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How noteworthy a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A default was applied where nothing was requested
    Info,
    /// A requested value was ignored or replaced
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single finding about one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Option key the finding concerns
    pub option: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// Record an informational finding.
    pub fn info(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::record(Severity::Info, option.into(), message.into())
    }

    /// Record a warning.
    pub fn warning(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::record(Severity::Warning, option.into(), message.into())
    }

    // Callers surface findings to the user; only trace them here.
    fn record(severity: Severity, option: String, message: String) -> Self {
        tracing::debug!(%severity, option = %option, "{}", message);
        Self {
            severity,
            option: Some(option),
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.option {
            Some(option) => write!(f, "{} [{}]: {}", self.severity, option, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Ordered list of diagnostics, in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Append all diagnostics from another list, keeping order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Diagnostics concerning one option key.
    pub fn for_option<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.items
            .iter()
            .filter(move |d| d.option.as_deref() == Some(key))
    }

    pub fn has_warnings(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Warning)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
