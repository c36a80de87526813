//! The inline element model.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use quick_xml::escape::escape;

use crate::error::MarkupError;
use crate::style::{parse_declarations, serialize_declarations};
use crate::tag::parse_start_tag;

/// An inline markup element such as `<span class="text-big">`.
///
/// `class` and `style` are not kept as raw attribute text: classes live in a
/// set and inline styles in a property map, so matching against a
/// conversion rule does not depend on attribute ordering or spacing. All
/// other attributes are kept verbatim.
///
/// Element names, attribute names and style property names are lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupElement {
    name: String,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
}

impl MarkupElement {
    /// Creates an element with no attributes.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Adds a class, returning the element for chaining.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an inline style property, returning the element for chaining.
    pub fn with_style(mut self, property: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    /// Sets an attribute, returning the element for chaining.
    ///
    /// `class` and `style` are parsed into classes and styles.
    pub fn with_attribute(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() {
            self.classes.insert(class);
        }
    }

    pub fn set_style(&mut self, property: impl AsRef<str>, value: impl Into<String>) {
        self.styles
            .insert(property.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Sets an attribute by name.
    ///
    /// A `class` value is split on whitespace and merged into the class set.
    /// A `style` value is parsed as declarations and merged into the styles.
    pub fn set_attribute(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) {
        let name = name.as_ref().to_ascii_lowercase();
        let value = value.as_ref();
        match name.as_str() {
            "class" => {
                for class in value.split_whitespace() {
                    self.add_class(class);
                }
            }
            "style" => {
                for (property, declared) in parse_declarations(value) {
                    self.styles.insert(property, declared);
                }
            }
            _ => {
                self.attributes.insert(name, value.to_string());
            }
        }
    }

    /// Returns the element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Returns the value of an inline style property.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .get(&property.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns a plain attribute value. `class` and `style` are not plain
    /// attributes; use [`classes`](Self::classes) and [`style`](Self::style).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Renders the start tag.
    ///
    /// Attributes are written in name order, so equal elements always render
    /// identically.
    pub fn start_tag(&self) -> String {
        let mut rendered: Vec<(&str, String)> = Vec::new();
        if !self.classes.is_empty() {
            rendered.push(("class", self.classes().collect::<Vec<_>>().join(" ")));
        }
        if !self.styles.is_empty() {
            rendered.push(("style", serialize_declarations(self.styles())));
        }
        for (name, value) in &self.attributes {
            rendered.push((name.as_str(), value.clone()));
        }
        rendered.sort_by(|a, b| a.0.cmp(b.0));

        let mut tag = format!("<{}", self.name);
        for (name, value) in rendered {
            tag.push_str(&format!(" {}=\"{}\"", name, escape(value.as_str())));
        }
        tag.push('>');
        tag
    }

    pub fn end_tag(&self) -> String {
        format!("</{}>", self.name)
    }

    /// Wraps already-rendered content in this element.
    pub fn wrap(&self, content: &str) -> String {
        format!("{}{}{}", self.start_tag(), content, self.end_tag())
    }
}

impl fmt::Display for MarkupElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.start_tag())
    }
}

impl FromStr for MarkupElement {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_start_tag(s)
    }
}
