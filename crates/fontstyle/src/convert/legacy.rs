//! Upcasting of obsolete `<font size="…">` markup.

use fontstyle_markup::MarkupElement;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Keywords indexed by legacy level. Levels 0 and 1 share the smallest keyword.
pub const LEGACY_KEYWORDS: [&str; 8] = [
    "x-small",
    "x-small",
    "small",
    "medium",
    "large",
    "x-large",
    "xx-large",
    "xxx-large",
];

/// Level that relative values (`+1`, `-2`) are added to.
pub const LEGACY_BASELINE: i32 = 3;

static LEVEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]{1,3}$").expect("legacy level pattern is valid"));

/// Decodes a legacy level attribute into a keyword.
///
/// Returns `None` when `text` is not an optionally signed number of one to
/// three digits. Any matching value yields a keyword: levels outside the
/// table are clamped, since old documents carry stray large values.
///
/// # Example
///
/// ```rust
/// use fontstyle::decode_legacy_level;
///
/// assert_eq!(decode_legacy_level("2"), Some("small"));
/// assert_eq!(decode_legacy_level("+2"), Some("x-large"));
/// assert_eq!(decode_legacy_level("-999"), Some("x-small"));
/// assert_eq!(decode_legacy_level("big"), None);
/// ```
pub fn decode_legacy_level(text: &str) -> Option<&'static str> {
    if !LEVEL.is_match(text) {
        return None;
    }
    let parsed: i32 = text.parse().ok()?;
    let relative = text.starts_with('+') || text.starts_with('-');
    let level = if relative {
        LEGACY_BASELINE + parsed
    } else {
        parsed
    };
    let max = LEGACY_KEYWORDS.len() as i32 - 1;
    let index = level.clamp(0, max) as usize;
    Some(LEGACY_KEYWORDS[index])
}

/// Upcast rule for `<font size="…">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyLevelRule {
    pub element_name: String,
    pub attribute: String,
}

impl LegacyLevelRule {
    pub fn new() -> Self {
        Self {
            element_name: "font".to_string(),
            attribute: "size".to_string(),
        }
    }

    /// Reads the model value from a legacy element.
    pub fn convert(&self, element: &MarkupElement) -> Option<String> {
        if !element.is_named(&self.element_name) {
            return None;
        }
        let raw = element.attribute(&self.attribute)?;
        let keyword = decode_legacy_level(raw)?;
        trace!("legacy {}={:?} upcast to {}", self.attribute, raw, keyword);
        Some(keyword.to_string())
    }
}

impl Default for LegacyLevelRule {
    fn default() -> Self {
        Self::new()
    }
}
