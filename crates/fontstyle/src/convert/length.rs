//! CSS length and percentage detection.

use once_cell::sync::Lazy;
use regex::Regex;

static LENGTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:px|cm|mm|in|pc|pt|ch|em|ex|rem|vh|vw|vmin|vmax)|0)$",
    )
    .expect("length pattern is valid")
});

static PERCENTAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)%$").expect("percentage pattern is valid")
});

/// Returns `true` for a CSS length such as `12px`, `1.5em` or `0`.
pub fn is_length(value: &str) -> bool {
    LENGTH.is_match(value)
}

/// Returns `true` for a CSS percentage such as `120%`.
pub fn is_percentage(value: &str) -> bool {
    PERCENTAGE.is_match(value)
}

pub fn is_length_or_percentage(value: &str) -> bool {
    is_length(value) || is_percentage(value)
}
