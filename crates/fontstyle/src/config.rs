//! Feature configuration.
//!
//! Configuration is usually embedded in a larger editor config, so
//! [`FontStyleConfig`] derives serde and can also be read on its own from
//! YAML or JSON:
//!
//! ```yaml
//! options: [tiny, small, default, big, huge]
//! supportAllValues: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::option::RawOption;

/// Configuration of the font style feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontStyleConfig {
    /// Raw option entries, normalized when the feature is built.
    pub options: Vec<RawOption>,
    /// Preserve any inline `font-style` value found in markup.
    pub support_all_values: bool,
}

/// The options used when none are configured.
pub fn default_options() -> Vec<RawOption> {
    ["tiny", "small", "default", "big", "huge"]
        .into_iter()
        .map(RawOption::from)
        .collect()
}

impl Default for FontStyleConfig {
    fn default() -> Self {
        Self {
            options: default_options(),
            support_all_values: false,
        }
    }
}

impl FontStyleConfig {
    /// Creates a config with the given options and strict conversion.
    pub fn with_options<I, O>(options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<RawOption>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            support_all_values: false,
        }
    }

    /// Sets `support_all_values`, returning the config for chaining.
    pub fn support_all_values(mut self, enabled: bool) -> Self {
        self.support_all_values = enabled;
        self
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Reads a config file, choosing the format by extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&read()?),
            Some("json") => Self::from_json_str(&read()?),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
