//! The assembled font style feature.

use fontstyle_markup::MarkupElement;
use log::debug;

use crate::command::FontStyleCommand;
use crate::config::FontStyleConfig;
use crate::convert::{build_rules, ConversionRules};
use crate::error::ConfigError;
use crate::option::{normalize_options, StyleOption};

/// Normalized options, conversion rules and command for one configuration.
///
/// Building is the only fallible step. Afterwards the options and rules are
/// read-only and conversions never fail.
///
/// # Example
///
/// ```rust
/// use fontstyle::{FontStyleConfig, FontStyleEditing};
/// use fontstyle_markup::MarkupElement;
///
/// let editing = FontStyleEditing::new(FontStyleConfig::default()).unwrap();
/// assert_eq!(
///     editing.to_markup("hello", Some("big")),
///     r#"<span class="text-big">hello</span>"#
/// );
///
/// let element: MarkupElement = r#"<font size="+1">"#.parse().unwrap();
/// assert_eq!(editing.from_markup(&element), Some("large".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct FontStyleEditing {
    config: FontStyleConfig,
    options: Vec<StyleOption>,
    rules: ConversionRules,
    command: FontStyleCommand,
}

impl FontStyleEditing {
    pub fn new(config: FontStyleConfig) -> Result<Self, ConfigError> {
        let options = normalize_options(&config.options)?;
        let rules = build_rules(&options, config.support_all_values)?;
        debug!(
            "font style feature ready: {} options, permissive={}",
            options.len(),
            rules.is_permissive()
        );
        Ok(Self {
            config,
            options,
            rules,
            command: FontStyleCommand::new(),
        })
    }

    pub fn config(&self) -> &FontStyleConfig {
        &self.config
    }

    /// The normalized options, in configuration order.
    pub fn options(&self) -> &[StyleOption] {
        &self.options
    }

    pub fn rules(&self) -> &ConversionRules {
        &self.rules
    }

    pub fn command(&self) -> &FontStyleCommand {
        &self.command
    }

    pub fn command_mut(&mut self) -> &mut FontStyleCommand {
        &mut self.command
    }

    /// Renders `text` with the given attribute value. Values without a
    /// rendering leave the text unwrapped.
    pub fn to_markup(&self, text: &str, value: Option<&str>) -> String {
        match self.rules.downcast(value) {
            Some(wrapper) => wrapper.wrap(text),
            None => text.to_string(),
        }
    }

    /// Reads the attribute value an element carries, if any.
    pub fn from_markup(&self, element: &MarkupElement) -> Option<String> {
        self.rules.upcast(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feature() {
        let editing = FontStyleEditing::new(FontStyleConfig::default()).unwrap();
        assert_eq!(editing.options().len(), 5);
        assert!(!editing.rules().is_permissive());
        assert_eq!(editing.to_markup("x", None), "x");
        assert_eq!(editing.to_markup("x", Some("13px")), "x");
    }

    #[test]
    fn test_permissive_feature() {
        let config = FontStyleConfig::with_options([10, 12]).support_all_values(true);
        let editing = FontStyleEditing::new(config).unwrap();
        assert_eq!(
            editing.to_markup("x", Some("13px")),
            r#"<span style="font-style:13px">x</span>"#
        );
    }

    #[test]
    fn test_invalid_combination_fails() {
        let config = FontStyleConfig::default().support_all_values(true);
        let err = FontStyleEditing::new(config).unwrap_err();
        assert_eq!(err.code(), "invalid-permissive-mode-combination");
    }
}
