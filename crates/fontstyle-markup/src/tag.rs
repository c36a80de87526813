//! Start tag reading.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::element::MarkupElement;
use crate::error::MarkupError;

/// Reads the first start tag in `input` into a [`MarkupElement`].
///
/// Leading text and comments are skipped. Attribute syntax follows HTML
/// rules, so unquoted values (`<font size=+2>`) and bare attributes are
/// accepted. Anything after the first start tag is ignored, so the closing
/// tag may be absent.
///
/// # Example
///
/// ```rust
/// use fontstyle_markup::parse_start_tag;
///
/// let element = parse_start_tag("<font size=+2>text</font>").unwrap();
/// assert_eq!(element.name(), "font");
/// assert_eq!(element.attribute("size"), Some("+2"));
/// ```
pub fn parse_start_tag(input: &str) -> Result<MarkupElement, MarkupError> {
    let mut reader = Reader::from_str(input);

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) | Ok(Event::Empty(start)) => {
                return element_from_start(&start, input);
            }
            Ok(Event::Eof) => {
                return Err(MarkupError::MissingStartTag {
                    input: input.to_string(),
                });
            }
            Ok(_) => continue,
            Err(err) => return Err(malformed(input, err)),
        }
    }
}

fn element_from_start(start: &BytesStart<'_>, input: &str) -> Result<MarkupElement, MarkupError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|err| malformed(input, err))?
        .to_string();
    let mut element = MarkupElement::new(name);

    for attribute in start.html_attributes() {
        let attribute = attribute.map_err(|err| malformed(input, err))?;
        let key = std::str::from_utf8(attribute.key.as_ref()).map_err(|err| malformed(input, err))?;
        let value = attribute
            .unescape_value()
            .map_err(|err| malformed(input, err))?;
        element.set_attribute(key, value);
    }

    Ok(element)
}

fn malformed(input: &str, err: impl std::fmt::Display) -> MarkupError {
    MarkupError::Malformed {
        input: input.to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_attributes() {
        let element =
            parse_start_tag(r#"<span class="text-huge" style="font-style:2em">"#).unwrap();
        assert_eq!(element.name(), "span");
        assert!(element.has_class("text-huge"));
        assert_eq!(element.style("font-style"), Some("2em"));
    }

    #[test]
    fn test_parse_skips_leading_text() {
        let element = parse_start_tag("before <font size=\"-1\">after").unwrap();
        assert_eq!(element.name(), "font");
        assert_eq!(element.attribute("size"), Some("-1"));
    }

    #[test]
    fn test_parse_self_closing() {
        let element = parse_start_tag("<span class=\"x\"/>").unwrap();
        assert!(element.has_class("x"));
    }

    #[test]
    fn test_parse_unescapes_values() {
        let element = parse_start_tag(r#"<span title="a &amp; b">"#).unwrap();
        assert_eq!(element.attribute("title"), Some("a & b"));
    }

    #[test]
    fn test_parse_plain_text_is_error() {
        let err = parse_start_tag("no markup here").unwrap_err();
        assert!(matches!(err, MarkupError::MissingStartTag { .. }));
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(parse_start_tag("").is_err());
    }
}
