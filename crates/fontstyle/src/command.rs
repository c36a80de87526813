//! The `fontStyle` command.
//!
//! The host editor owns the document model and selection. It exposes them to
//! the command through [`AttributeTarget`], so this module only decides
//! *what* to change, never how ranges are walked.

use log::debug;

/// Model attribute key used for font style.
pub const FONT_STYLE: &str = "fontStyle";

/// How the host should treat the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeProperties {
    /// Removed by "remove format" style actions.
    pub is_formatting: bool,
    /// Kept on the new block when a line is split.
    pub copy_on_enter: bool,
}

/// Properties registered for [`FONT_STYLE`].
pub const FONT_STYLE_PROPERTIES: AttributeProperties = AttributeProperties {
    is_formatting: true,
    copy_on_enter: true,
};

/// The host's view of the current selection.
pub trait AttributeTarget {
    /// Returns the attribute value at the selection, if any.
    fn attribute_value(&self, key: &str) -> Option<String>;

    /// Returns `true` when the attribute may be set on the selection.
    fn is_attribute_allowed(&self, key: &str) -> bool;

    /// Sets the attribute on the selection.
    fn set_attribute(&mut self, key: &str, value: &str);

    /// Removes the attribute from the selection.
    fn remove_attribute(&mut self, key: &str);
}

/// The change a command execution applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeChange {
    Set(String),
    Remove,
}

/// Sets or removes the font style attribute on the selection.
///
/// Call [`refresh`](Self::refresh) whenever the selection changes so that
/// [`value`](Self::value) and [`is_enabled`](Self::is_enabled) reflect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStyleCommand {
    attribute_key: String,
    value: Option<String>,
    is_enabled: bool,
}

impl FontStyleCommand {
    pub fn new() -> Self {
        Self {
            attribute_key: FONT_STYLE.to_string(),
            value: None,
            is_enabled: false,
        }
    }

    pub fn attribute_key(&self) -> &str {
        &self.attribute_key
    }

    /// The attribute value at the selection as of the last refresh.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Re-reads value and enabled state from the target.
    pub fn refresh<T: AttributeTarget + ?Sized>(&mut self, target: &T) {
        self.value = target.attribute_value(&self.attribute_key);
        self.is_enabled = target.is_attribute_allowed(&self.attribute_key);
    }

    /// Applies `value` to the selection; `None` or an empty value removes
    /// the attribute.
    ///
    /// Returns the applied change, or `None` when the attribute is not
    /// allowed on the selection.
    pub fn execute<T: AttributeTarget + ?Sized>(
        &mut self,
        target: &mut T,
        value: Option<&str>,
    ) -> Option<AttributeChange> {
        if !target.is_attribute_allowed(&self.attribute_key) {
            debug!("{} is not allowed on the selection", self.attribute_key);
            self.refresh(&*target);
            return None;
        }

        let change = match value.filter(|value| !value.is_empty()) {
            Some(value) => {
                target.set_attribute(&self.attribute_key, value);
                AttributeChange::Set(value.to_string())
            }
            None => {
                target.remove_attribute(&self.attribute_key);
                AttributeChange::Remove
            }
        };

        self.refresh(&*target);
        Some(change)
    }
}

impl Default for FontStyleCommand {
    fn default() -> Self {
        Self::new()
    }
}
