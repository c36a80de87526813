//! Inline `style` attribute handling.

use cssparser::{Delimiter, ParseError, Parser, ParserInput};

/// Splits an inline `style` attribute into `(property, value)` declarations.
///
/// Property names are lowercased; values keep their source text with
/// surrounding whitespace removed. Declarations that fail to parse are
/// skipped, the rest of the attribute is still read.
///
/// # Example
///
/// ```rust
/// use fontstyle_markup::parse_declarations;
///
/// let declarations = parse_declarations("Font-Style: 12px; color:red");
/// assert_eq!(
///     declarations,
///     vec![
///         ("font-style".to_string(), "12px".to_string()),
///         ("color".to_string(), "red".to_string()),
///     ]
/// );
/// ```
pub fn parse_declarations(style: &str) -> Vec<(String, String)> {
    let mut input = ParserInput::new(style);
    let mut parser = Parser::new(&mut input);
    let mut declarations = Vec::new();

    while !parser.is_exhausted() {
        let result = parser.parse_until_after(Delimiter::Semicolon, |p| parse_declaration(p));
        if let Ok(declaration) = result {
            declarations.push(declaration);
        }
    }

    declarations
}

fn parse_declaration<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<(String, String), ParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_ascii_lowercase();
    parser.expect_colon()?;
    parser.skip_whitespace();

    let start = parser.position();
    while parser.next().is_ok() {}
    let value = parser.slice_from(start).trim();

    if value.is_empty() {
        return Err(parser.new_custom_error(()));
    }
    Ok((name, value.to_string()))
}

/// Serializes declarations back into a compact `style` attribute value.
pub fn serialize_declarations<'a, I>(declarations: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    declarations
        .into_iter()
        .map(|(name, value)| format!("{}:{}", name, value))
        .collect::<Vec<_>>()
        .join(";")
}
