//! Markup parsing errors.

/// Error returned when a start tag cannot be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The input held no start tag at all.
    MissingStartTag { input: String },
    /// The tokenizer rejected the input.
    Malformed { input: String, reason: String },
}

impl std::fmt::Display for MarkupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkupError::MissingStartTag { input } => {
                write!(f, "no start tag found in '{}'", input)
            }
            MarkupError::Malformed { input, reason } => {
                write!(f, "malformed markup '{}': {}", input, reason)
            }
        }
    }
}

impl std::error::Error for MarkupError {}
