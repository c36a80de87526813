//! Normalization of raw option entries into canonical options.

use log::debug;

use super::number::{format_number, parse_leading_float};
use super::raw::{OptionDefinition, RawOption, RawValue};
use super::{preset, MarkupDescriptor, StyleOption};
use crate::error::ConfigError;

/// Converts raw configuration entries into canonical options.
///
/// Each entry is resolved in a fixed order: full definition, named preset,
/// the `"default"` sentinel, then a numeric value that becomes a pixel
/// option. Entries without a numeric prefix are dropped; an object entry
/// without a model is an error. Surviving entries keep their input order
/// and no deduplication is done.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidOptionDefinition`] for an object entry
/// that reaches numeric detection without a usable `model`.
///
/// # Example
///
/// ```rust
/// use fontstyle::{normalize_options, RawOption};
///
/// let raw: Vec<RawOption> = vec!["small".into(), "default".into(), 12.into(), "abc".into()];
/// let options = normalize_options(&raw).unwrap();
///
/// let models: Vec<_> = options.iter().map(|o| o.model.as_deref()).collect();
/// assert_eq!(models, vec![Some("small"), None, Some("12px")]);
/// ```
pub fn normalize_options(raw: &[RawOption]) -> Result<Vec<StyleOption>, ConfigError> {
    let mut options = Vec::with_capacity(raw.len());
    for entry in raw {
        match normalize_option(entry)? {
            Some(option) => options.push(option),
            None => debug!("dropping font style option {:?}: no numeric value", entry),
        }
    }
    Ok(options)
}

fn normalize_option(entry: &RawOption) -> Result<Option<StyleOption>, ConfigError> {
    if let RawOption::Definition(definition) = entry {
        if definition.is_full() {
            return Ok(Some(full_definition(definition)));
        }
    }

    if let Some(preset) = find_preset(entry) {
        return Ok(Some(preset.with_default_priority()));
    }

    if matches!(entry, RawOption::Text(text) if text == "default") {
        return Ok(Some(StyleOption::default_option()));
    }

    let Some(value) = numeric_value(entry)? else {
        return Ok(None);
    };

    Ok(Some(pixel_option(entry, value).with_default_priority()))
}

fn full_definition(definition: &OptionDefinition) -> StyleOption {
    StyleOption {
        title: definition.title.clone().unwrap_or_default(),
        model: definition.model.as_ref().map(RawValue::to_text),
        view: definition.view.clone(),
    }
    .with_default_priority()
}

fn find_preset(entry: &RawOption) -> Option<StyleOption> {
    match entry {
        RawOption::Text(name) => preset::named(name),
        RawOption::Definition(definition) => match &definition.model {
            Some(RawValue::Text(name)) => preset::named(name),
            _ => None,
        },
        RawOption::Number(_) => None,
    }
}

fn numeric_value(entry: &RawOption) -> Result<Option<f64>, ConfigError> {
    let value = match entry {
        RawOption::Number(value) => Some(*value).filter(|value| value.is_finite()),
        RawOption::Text(text) => parse_leading_float(text),
        RawOption::Definition(definition) => match &definition.model {
            Some(model) if model.is_present() => match model {
                RawValue::Number(value) => Some(*value).filter(|value| value.is_finite()),
                RawValue::Text(text) => parse_leading_float(text),
            },
            _ => {
                return Err(ConfigError::InvalidOptionDefinition {
                    definition: definition.clone(),
                })
            }
        },
    };
    Ok(value)
}

fn pixel_option(entry: &RawOption, value: f64) -> StyleOption {
    let model = format!("{}px", format_number(value));
    let title = match entry {
        RawOption::Number(number) => format_number(*number),
        RawOption::Text(text) => text.clone(),
        RawOption::Definition(definition) => definition
            .title
            .clone()
            .filter(|title| !title.is_empty())
            .or_else(|| definition.model.as_ref().map(RawValue::to_text))
            .unwrap_or_else(|| model.clone()),
    };

    StyleOption {
        title,
        view: Some(MarkupDescriptor::with_style_value(model.clone())),
        model: Some(model),
    }
}
