//! Conversion rules between the `fontStyle` attribute and markup.
//!
//! This module provides:
//!
//! - [`ConversionRules`]: the downcast rule and upcast rules handed to a host
//!   conversion engine
//! - [`build_rules`]: builds strict or permissive rules from normalized options
//! - [`LegacyLevelRule`]: reads obsolete `<font size="…">` markup
//!
//! Rules are plain data plus pure conversion functions; building them is the
//! only step that can fail.

mod legacy;
mod length;
mod rules;

pub use legacy::{decode_legacy_level, LegacyLevelRule, LEGACY_BASELINE, LEGACY_KEYWORDS};
pub use length::{is_length, is_length_or_percentage, is_percentage};
pub use rules::{build_rules, ConversionRules, DowncastRule, RenderedWrapper, RuleEntry, UpcastRule};
