//! Raw configuration entries.

use serde::{Deserialize, Serialize};

use super::number::format_number;
use super::MarkupDescriptor;

/// A scalar value in a raw option: either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Returns the value as text; numbers use [`format_number`].
    pub fn to_text(&self) -> String {
        match self {
            RawValue::Number(value) => format_number(*value),
            RawValue::Text(text) => text.clone(),
        }
    }

    /// Returns `false` for empty text, zero and NaN.
    ///
    /// Such values do not count as "present" when deciding whether an
    /// entry is a full definition or carries a usable model.
    pub fn is_present(&self) -> bool {
        match self {
            RawValue::Number(value) => *value != 0.0 && !value.is_nan(),
            RawValue::Text(text) => !text.is_empty(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

/// An object-form option entry.
///
/// All fields are optional in configuration; which ones are set decides how
/// the entry is normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<MarkupDescriptor>,
}

impl OptionDefinition {
    /// Creates a definition with only a model.
    pub fn new(model: impl Into<RawValue>) -> Self {
        Self {
            model: Some(model.into()),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn view(mut self, view: MarkupDescriptor) -> Self {
        self.view = Some(view);
        self
    }

    /// Returns `true` when title, model and view are all present.
    pub fn is_full(&self) -> bool {
        let has_title = self.title.as_deref().is_some_and(|title| !title.is_empty());
        let has_model = self.model.as_ref().is_some_and(RawValue::is_present);
        has_title && has_model && self.view.is_some()
    }
}

/// A configuration entry as written by the integrator.
///
/// Deserializes untagged: `12`, `"12"`, `"small"` and
/// `{ title, model, view }` are all accepted.
///
/// # Example
///
/// ```rust
/// use fontstyle::{OptionDefinition, RawOption};
///
/// let options: Vec<RawOption> = vec![
///     "tiny".into(),
///     12.into(),
///     OptionDefinition::new("18px").title("Large").into(),
/// ];
/// assert_eq!(options.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOption {
    Number(f64),
    Text(String),
    Definition(OptionDefinition),
}

impl From<&str> for RawOption {
    fn from(text: &str) -> Self {
        RawOption::Text(text.to_string())
    }
}

impl From<String> for RawOption {
    fn from(text: String) -> Self {
        RawOption::Text(text)
    }
}

impl From<f64> for RawOption {
    fn from(value: f64) -> Self {
        RawOption::Number(value)
    }
}

impl From<i32> for RawOption {
    fn from(value: i32) -> Self {
        RawOption::Number(f64::from(value))
    }
}

impl From<OptionDefinition> for RawOption {
    fn from(definition: OptionDefinition) -> Self {
        RawOption::Definition(definition)
    }
}
