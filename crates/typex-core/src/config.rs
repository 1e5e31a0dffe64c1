//! Resolver configuration
//!
//! Controls how the definition store treats repeated registrations and how
//! resolution reports structural errors.

use serde::{Deserialize, Serialize};

/// Label used when neither the caller nor the input identifies the source repository
pub const DEFAULT_SOURCE_LABEL: &str = "unknown";

/// What to do when a name is registered twice within one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Identical re-registration is a no-op; a different definition fails
    #[default]
    Reject,
    /// The first registration is kept and later ones are ignored
    FirstWriteWins,
}

/// How resolution reports structural errors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMode {
    /// Stop at the first structural error
    #[default]
    FailFast,
    /// Report every structural error of the failing pass at once
    CollectAll,
}

/// Configuration for building a type explorer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Opaque label naming the source repository, used only in diagnostics.
    /// `None` lets the input name its own source.
    pub source_label: Option<String>,
    pub duplicate_policy: DuplicatePolicy,
    pub error_mode: ErrorMode,
}

impl ResolverConfig {
    /// Default configuration with the given source label
    pub fn with_source(label: impl Into<String>) -> Self {
        Self {
            source_label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Configured label, or [`DEFAULT_SOURCE_LABEL`] when none was set
    pub fn source_label(&self) -> &str {
        self.source_label.as_deref().unwrap_or(DEFAULT_SOURCE_LABEL)
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }
}
