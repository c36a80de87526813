//! Lenient numeric parsing for option values.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("leading float pattern is valid")
});

/// Parses the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped and anything after the numeric prefix is
/// ignored, so `"12px"` parses as `12.0`. Returns `None` when there is no
/// numeric prefix or the value is not finite.
///
/// # Example
///
/// ```rust
/// use fontstyle::parse_leading_float;
///
/// assert_eq!(parse_leading_float(" 12.5px"), Some(12.5));
/// assert_eq!(parse_leading_float("abc"), None);
/// ```
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let prefix = LEADING_FLOAT.find(text)?.as_str();
    prefix.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formats a number the shortest way that reads back to the same value.
///
/// Integral values have no fractional part (`12`, not `12.0`) and negative
/// zero renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
