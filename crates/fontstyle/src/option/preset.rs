//! Named presets.
//!
//! Each preset is built by its own factory on every call, so callers always
//! receive an option they own outright.

use super::{MarkupDescriptor, StyleOption, DEFAULT_PRIORITY};

/// Names of the built-in presets, smallest first.
pub const PRESET_NAMES: [&str; 4] = ["tiny", "small", "big", "huge"];

/// Returns a fresh copy of the named preset, or `None` for unknown names.
///
/// # Example
///
/// ```rust
/// use fontstyle::option::preset;
///
/// let small = preset::named("small").unwrap();
/// assert_eq!(small.model.as_deref(), Some("small"));
/// assert!(preset::named("medium").is_none());
/// ```
pub fn named(name: &str) -> Option<StyleOption> {
    match name {
        "tiny" => Some(tiny()),
        "small" => Some(small()),
        "big" => Some(big()),
        "huge" => Some(huge()),
        _ => None,
    }
}

pub fn tiny() -> StyleOption {
    class_preset("Tiny", "tiny")
}

pub fn small() -> StyleOption {
    class_preset("Small", "small")
}

pub fn big() -> StyleOption {
    class_preset("Big", "big")
}

pub fn huge() -> StyleOption {
    class_preset("Huge", "huge")
}

fn class_preset(title: &str, model: &str) -> StyleOption {
    let mut view = MarkupDescriptor::with_class(format!("text-{}", model));
    view.priority = Some(DEFAULT_PRIORITY);
    StyleOption {
        title: title.to_string(),
        model: Some(model.to_string()),
        view: Some(view),
    }
}
