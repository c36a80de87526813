//! Strict and permissive conversion rule sets.

use fontstyle_markup::MarkupElement;
use log::{debug, trace};

use super::legacy::LegacyLevelRule;
use super::length::is_length_or_percentage;
use crate::error::ConfigError;
use crate::option::{
    MarkupDescriptor, StyleOption, DEFAULT_PRIORITY, STYLE_PROPERTY, WRAPPER_ELEMENT,
};

/// One configured `model <-> view` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub model: String,
    pub view: MarkupDescriptor,
}

/// A wrapper element produced by a downcast, with its nesting priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWrapper {
    pub element: MarkupElement,
    pub priority: i32,
}

impl RenderedWrapper {
    pub fn wrap(&self, content: &str) -> String {
        self.element.wrap(content)
    }
}

/// Attribute value to markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DowncastRule {
    /// Only configured values render, each with its own descriptor.
    Table(Vec<RuleEntry>),
    /// Any non-blank value renders as an inline style on the wrapper.
    InlineStyle {
        element_name: String,
        property: String,
        priority: i32,
    },
}

impl DowncastRule {
    /// Renders `value`, or returns `None` when nothing should be rendered.
    pub fn convert(&self, value: Option<&str>) -> Option<RenderedWrapper> {
        let value = value.filter(|value| !value.trim().is_empty())?;
        match self {
            DowncastRule::Table(entries) => {
                let entry = entries.iter().find(|entry| entry.model == value)?;
                Some(RenderedWrapper {
                    element: entry.view.to_element(),
                    priority: entry.view.priority(),
                })
            }
            DowncastRule::InlineStyle {
                element_name,
                property,
                priority,
            } => Some(RenderedWrapper {
                element: MarkupElement::new(element_name).with_style(property, value),
                priority: *priority,
            }),
        }
    }
}

/// Markup to attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpcastRule {
    /// Elements matching a configured descriptor yield its model.
    Table(Vec<RuleEntry>),
    /// Any wrapper with the inline style yields the raw style value.
    InlineStyle {
        element_name: String,
        property: String,
    },
    /// Obsolete `<font size="…">` markup.
    LegacyLevel(LegacyLevelRule),
}

impl UpcastRule {
    pub fn convert(&self, element: &MarkupElement) -> Option<String> {
        match self {
            UpcastRule::Table(entries) => entries
                .iter()
                .find(|entry| entry.view.matches(element))
                .map(|entry| entry.model.clone()),
            UpcastRule::InlineStyle {
                element_name,
                property,
            } => {
                if !element.is_named(element_name) {
                    return None;
                }
                element.style(property).map(str::to_string)
            }
            UpcastRule::LegacyLevel(rule) => rule.convert(element),
        }
    }
}

/// The rule set for one configuration.
///
/// The downcast rule renders attribute values; upcast rules are tried in
/// order and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRules {
    pub downcast: DowncastRule,
    pub upcast: Vec<UpcastRule>,
}

impl ConversionRules {
    pub fn downcast(&self, value: Option<&str>) -> Option<RenderedWrapper> {
        let rendered = self.downcast.convert(value);
        trace!("downcast {:?} -> {:?}", value, rendered);
        rendered
    }

    pub fn upcast(&self, element: &MarkupElement) -> Option<String> {
        let value = self.upcast.iter().find_map(|rule| rule.convert(element));
        trace!("upcast {} -> {:?}", element, value);
        value
    }

    /// Returns `true` when unconfigured values are preserved.
    pub fn is_permissive(&self) -> bool {
        matches!(self.downcast, DowncastRule::InlineStyle { .. })
    }
}

/// Builds the conversion rules for normalized `options`.
///
/// With `support_all_values` off, only configured values convert, in both
/// directions. With it on, any inline `font-style` value converts; every
/// configured model must then be a CSS length or percentage. The legacy
/// `<font size>` upcast is always included, last.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPermissiveModeCombination`] when
/// `support_all_values` is set and some option has a named model.
///
/// # Example
///
/// ```rust
/// use fontstyle::{build_rules, normalize_options, RawOption};
/// use fontstyle_markup::MarkupElement;
///
/// let raw: Vec<RawOption> = vec![10.into(), 12.into()];
/// let rules = build_rules(&normalize_options(&raw).unwrap(), true).unwrap();
///
/// let element = MarkupElement::new("span").with_style("font-style", "13px");
/// assert_eq!(rules.upcast(&element), Some("13px".to_string()));
/// ```
pub fn build_rules(
    options: &[StyleOption],
    support_all_values: bool,
) -> Result<ConversionRules, ConfigError> {
    let legacy = UpcastRule::LegacyLevel(LegacyLevelRule::new());

    if support_all_values {
        let presets: Vec<StyleOption> = options
            .iter()
            .filter(|option| {
                option
                    .model
                    .as_deref()
                    .is_some_and(|model| !is_length_or_percentage(model))
            })
            .cloned()
            .collect();
        if !presets.is_empty() {
            return Err(ConfigError::InvalidPermissiveModeCombination { presets });
        }

        debug!(
            "building permissive font style rules over {} options",
            options.len()
        );
        return Ok(ConversionRules {
            downcast: DowncastRule::InlineStyle {
                element_name: WRAPPER_ELEMENT.to_string(),
                property: STYLE_PROPERTY.to_string(),
                priority: DEFAULT_PRIORITY,
            },
            upcast: vec![
                UpcastRule::InlineStyle {
                    element_name: WRAPPER_ELEMENT.to_string(),
                    property: STYLE_PROPERTY.to_string(),
                },
                legacy,
            ],
        });
    }

    let entries: Vec<RuleEntry> = options
        .iter()
        .filter_map(|option| {
            let model = option.model.clone()?;
            let view = option.view.clone()?.with_default_priority();
            Some(RuleEntry { model, view })
        })
        .collect();
    debug!("building strict font style rules with {} entries", entries.len());

    Ok(ConversionRules {
        downcast: DowncastRule::Table(entries.clone()),
        upcast: vec![UpcastRule::Table(entries), legacy],
    })
}
