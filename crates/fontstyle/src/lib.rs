//! # fontstyle - font style presets for rich-text editors
//!
//! `fontstyle` turns a loosely-typed list of font style options into the
//! conversion rules a rich-text editor needs to store the `fontStyle` text
//! attribute as markup and read it back.
//!
//! ## Pipeline
//!
//! 1. **Configuration**: [`FontStyleConfig`] holds raw entries: preset names
//!    (`"tiny"`, `"small"`, `"big"`, `"huge"`), the `"default"` sentinel,
//!    numbers, numeric strings and object definitions.
//! 2. **Normalization**: [`normalize_options`] produces canonical
//!    [`StyleOption`]s, each with a title, a model value and a
//!    [`MarkupDescriptor`].
//! 3. **Rules**: [`build_rules`] produces [`ConversionRules`]: a downcast rule
//!    (attribute value to markup) and upcast rules (markup to attribute
//!    value), including support for obsolete `<font size>` markup.
//!
//! [`FontStyleEditing`] runs the whole pipeline and carries the
//! [`FontStyleCommand`]; [`list_items`] and [`localize_options`] feed a
//! dropdown UI.
//!
//! ## Markup
//!
//! | Option | Markup |
//! |--------|--------|
//! | `"small"` | `<span class="text-small">` |
//! | `12` | `<span style="font-style:12px">` |
//! | any value, with `supportAllValues` | `<span style="font-style:<value>">` |
//! | legacy input | `<font size="+2">` |
//!
//! ## Example
//!
//! ```rust
//! use fontstyle::{build_rules, normalize_options, RawOption};
//! use fontstyle_markup::MarkupElement;
//!
//! let raw: Vec<RawOption> = vec!["small".into(), "default".into(), 14.into()];
//! let options = normalize_options(&raw).unwrap();
//! let rules = build_rules(&options, false).unwrap();
//!
//! let wrapper = rules.downcast(Some("14px")).unwrap();
//! assert_eq!(wrapper.wrap("text"), r#"<span style="font-style:14px">text</span>"#);
//!
//! let element = MarkupElement::new("span").with_class("text-small");
//! assert_eq!(rules.upcast(&element), Some("small".to_string()));
//! ```
//!
//! ## Errors
//!
//! Configuration problems surface as [`ConfigError`] when the feature is
//! built. Entries that merely fail to parse as numbers are dropped instead.

pub mod command;
pub mod config;
pub mod convert;
mod editing;
mod error;
pub mod option;
pub mod ui;

pub use command::{AttributeChange, AttributeTarget, FontStyleCommand, FONT_STYLE};
pub use config::FontStyleConfig;
pub use convert::{
    build_rules, decode_legacy_level, ConversionRules, DowncastRule, RenderedWrapper, UpcastRule,
};
pub use editing::FontStyleEditing;
pub use error::ConfigError;
pub use option::{
    format_number, normalize_options, parse_leading_float, MarkupDescriptor, OptionDefinition,
    RawOption, RawValue, StyleOption, Styling, DEFAULT_PRIORITY,
};
pub use ui::{list_items, localize_options, ListItem, Translator};
