//! Inline markup elements exchanged with a host conversion engine.
//!
//! Rich-text editors persist formatting as inline wrapper elements such as
//! `<span class="text-small">` or `<span style="font-style:12px">`. This crate
//! provides the small element model those conversions read and produce:
//!
//! - [`MarkupElement`]: an element name plus its classes, inline styles and
//!   remaining attributes
//! - [`parse_start_tag`]: reads a single start tag into a [`MarkupElement`]
//! - [`parse_declarations`]: splits a `style` attribute into declarations
//!
//! # Example
//!
//! ```rust
//! use fontstyle_markup::MarkupElement;
//!
//! let element: MarkupElement = r#"<span style="font-style: 12px">"#.parse().unwrap();
//! assert_eq!(element.style("font-style"), Some("12px"));
//! assert_eq!(element.wrap("hi"), r#"<span style="font-style:12px">hi</span>"#);
//! ```

mod element;
mod error;
mod style;
mod tag;

pub use element::MarkupElement;
pub use error::MarkupError;
pub use style::{parse_declarations, serialize_declarations};
pub use tag::parse_start_tag;
