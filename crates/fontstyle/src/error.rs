//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::option::{OptionDefinition, StyleOption};

/// Error raised while loading configuration or building conversion rules.
///
/// All variants are setup-time errors: once a rule set is built, converting
/// markup never fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An object entry has no usable `model`.
    #[error("invalid font style option definition {definition:?}: a model value is required")]
    InvalidOptionDefinition { definition: OptionDefinition },

    /// `supportAllValues` was combined with named (non-length) options.
    #[error(
        "named font style options cannot be used with supportAllValues: {}",
        describe_presets(.presets)
    )]
    InvalidPermissiveModeCombination { presets: Vec<StyleOption> },

    /// The configuration file could not be read.
    #[error("failed to read font style config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file has an extension that is not understood.
    #[error("unsupported font style config format '{}'", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid YAML font style config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON font style config: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Returns a stable identifier for the error kind.
    ///
    /// | Variant | Code |
    /// |---------|------|
    /// | `InvalidOptionDefinition` | `invalid-option-definition` |
    /// | `InvalidPermissiveModeCombination` | `invalid-permissive-mode-combination` |
    /// | `Io` | `config-io` |
    /// | `UnsupportedFormat` | `config-unsupported-format` |
    /// | `Yaml`, `Json` | `config-syntax` |
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidOptionDefinition { .. } => "invalid-option-definition",
            ConfigError::InvalidPermissiveModeCombination { .. } => {
                "invalid-permissive-mode-combination"
            }
            ConfigError::Io { .. } => "config-io",
            ConfigError::UnsupportedFormat { .. } => "config-unsupported-format",
            ConfigError::Yaml(_) | ConfigError::Json(_) => "config-syntax",
        }
    }
}

fn describe_presets(presets: &[StyleOption]) -> String {
    presets
        .iter()
        .map(|preset| {
            format!(
                "'{}' ({})",
                preset.title,
                preset.model.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
