//! Font style options and their normalization.
//!
//! This module provides:
//!
//! - [`StyleOption`]: a canonical option with title, model value and markup descriptor
//! - [`MarkupDescriptor`] and [`Styling`]: how a model value renders as markup
//! - [`RawOption`]: the loosely-typed configuration entry
//! - [`normalize_options`]: turns raw entries into canonical options
//!
//! Named presets are produced by factory functions in [`preset`], so every
//! normalization hands out owned values.

mod normalize;
mod number;
pub mod preset;
mod raw;

use std::collections::{BTreeMap, BTreeSet};

use fontstyle_markup::MarkupElement;
use serde::{Deserialize, Deserializer, Serialize};

pub use normalize::normalize_options;
pub use number::{format_number, parse_leading_float};
pub use raw::{OptionDefinition, RawOption, RawValue};

/// Priority given to every font style wrapper element unless configured.
///
/// Inline wrappers produced by different formatting features nest by
/// priority. A fixed value keeps font style wrappers in a stable nesting order
/// relative to other inline formatting over overlapping text.
pub const DEFAULT_PRIORITY: i32 = 7;

/// The generic inline wrapper element.
pub const WRAPPER_ELEMENT: &str = "span";

/// Inline style property carrying a style-based value.
pub const STYLE_PROPERTY: &str = "font-style";

/// How a descriptor styles its wrapper element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Styling {
    /// Class-based styling, e.g. `class="text-small"`.
    Classes(#[serde(deserialize_with = "one_or_many")] BTreeSet<String>),
    /// Inline-style-based styling, e.g. `style="font-style:12px"`.
    Styles(BTreeMap<String, String>),
}

/// Describes how a model value renders as markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupDescriptor {
    #[serde(rename = "name", alias = "elementName")]
    pub element_name: String,
    #[serde(flatten)]
    pub styling: Styling,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl MarkupDescriptor {
    /// A `span` carrying the given class.
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            element_name: WRAPPER_ELEMENT.to_string(),
            styling: Styling::Classes(BTreeSet::from([class.into()])),
            priority: None,
        }
    }

    /// A `span` carrying `font-style:<value>`.
    pub fn with_style_value(value: impl Into<String>) -> Self {
        Self {
            element_name: WRAPPER_ELEMENT.to_string(),
            styling: Styling::Styles(BTreeMap::from([(STYLE_PROPERTY.to_string(), value.into())])),
            priority: None,
        }
    }

    /// Returns the priority, falling back to [`DEFAULT_PRIORITY`].
    pub fn priority(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }

    pub(crate) fn with_default_priority(mut self) -> Self {
        self.priority = Some(self.priority());
        self
    }

    /// Builds the element this descriptor renders.
    pub fn to_element(&self) -> MarkupElement {
        let mut element = MarkupElement::new(&self.element_name);
        match &self.styling {
            Styling::Classes(classes) => {
                for class in classes {
                    element.add_class(class.clone());
                }
            }
            Styling::Styles(styles) => {
                for (property, value) in styles {
                    element.set_style(property, value.clone());
                }
            }
        }
        element
    }

    /// Returns `true` when `element` carries everything this descriptor
    /// renders. Extra classes, styles or attributes on the element are
    /// allowed.
    pub fn matches(&self, element: &MarkupElement) -> bool {
        if !element.is_named(&self.element_name) {
            return false;
        }
        match &self.styling {
            Styling::Classes(classes) => classes.iter().all(|class| element.has_class(class)),
            Styling::Styles(styles) => styles
                .iter()
                .all(|(property, value)| element.style(property) == Some(value.as_str())),
        }
    }

    /// Returns the inline `font-style` value for style-based descriptors.
    pub fn style_value(&self) -> Option<&str> {
        match &self.styling {
            Styling::Styles(styles) => styles.get(STYLE_PROPERTY).map(String::as_str),
            Styling::Classes(_) => None,
        }
    }

    /// Returns the classes for class-based descriptors.
    pub fn classes(&self) -> Option<&BTreeSet<String>> {
        match &self.styling {
            Styling::Classes(classes) => Some(classes),
            Styling::Styles(_) => None,
        }
    }
}

/// A canonical font style option.
///
/// `model` is `None` only for the "Default" option, which removes the
/// attribute. That option has no `view`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleOption {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<MarkupDescriptor>,
}

impl StyleOption {
    /// The "Default" option, which removes the attribute.
    pub fn default_option() -> Self {
        Self {
            title: "Default".to_string(),
            model: None,
            view: None,
        }
    }

    pub fn is_default_option(&self) -> bool {
        self.model.is_none()
    }

    pub(crate) fn with_default_priority(mut self) -> Self {
        self.view = self.view.map(MarkupDescriptor::with_default_priority);
        self
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(classes) => classes.split_whitespace().map(String::from).collect(),
        OneOrMany::Many(classes) => classes.into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_defaults() {
        let descriptor = MarkupDescriptor::with_class("text-big");
        assert_eq!(descriptor.priority, None);
        assert_eq!(descriptor.priority(), DEFAULT_PRIORITY);
        assert_eq!(
            descriptor.with_default_priority().priority,
            Some(DEFAULT_PRIORITY)
        );
    }

    #[test]
    fn test_explicit_priority_kept() {
        let mut descriptor = MarkupDescriptor::with_style_value("10px");
        descriptor.priority = Some(3);
        assert_eq!(descriptor.with_default_priority().priority, Some(3));
    }

    #[test]
    fn test_descriptor_to_element() {
        let element = MarkupDescriptor::with_style_value("10px").to_element();
        assert_eq!(element.start_tag(), r#"<span style="font-style:10px">"#);
    }

    #[test]
    fn test_descriptor_matches_extra_classes() {
        let descriptor = MarkupDescriptor::with_class("text-big");
        let element = MarkupElement::new("span")
            .with_class("text-big")
            .with_class("other");
        assert!(descriptor.matches(&element));
        assert!(!descriptor.matches(&MarkupElement::new("div").with_class("text-big")));
        assert!(!descriptor.matches(&MarkupElement::new("span").with_class("text-tiny")));
    }

    #[test]
    fn test_descriptor_matches_style_value() {
        let descriptor = MarkupDescriptor::with_style_value("10px");
        assert!(descriptor.matches(&MarkupElement::new("span").with_style("font-style", "10px")));
        assert!(!descriptor.matches(&MarkupElement::new("span").with_style("font-style", "11px")));
    }

    #[test]
    fn test_descriptor_deserializes_class_string() {
        let descriptor: MarkupDescriptor =
            serde_json::from_str(r#"{"name":"span","classes":"text-a text-b","priority":5}"#)
                .unwrap();
        assert_eq!(descriptor.priority, Some(5));
        let classes = descriptor.classes().unwrap();
        assert!(classes.contains("text-a"));
        assert!(classes.contains("text-b"));
    }

    #[test]
    fn test_descriptor_deserializes_styles() {
        let descriptor: MarkupDescriptor =
            serde_json::from_str(r#"{"name":"span","styles":{"font-style":"2em"}}"#).unwrap();
        assert_eq!(descriptor.style_value(), Some("2em"));
        assert_eq!(descriptor.priority, None);
    }
}
