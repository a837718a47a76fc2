//! Error types for the codecs

use std::fmt;

/// Error that can occur while decoding a node tree
///
/// Decoding is a pure function of its input: every error is deterministic,
/// reported for the first structural violation encountered, and never
/// worth retrying. There is no partial reconstruction; callers get a whole
/// tree or exactly one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The discriminant string is not in the closed catalog
    UnknownVariant(String),
    /// A required attribute's field is absent
    MissingRequiredAttribute {
        variant: String,
        attribute: String,
    },
    /// A field is present but its shape disagrees with the attribute's
    /// declared semantic type
    TypeMismatch {
        variant: String,
        attribute: String,
        expected: String,
        found: String,
    },
    /// The input is not well-formed structural text, or nesting exceeds
    /// the decode safety limits
    MalformedInput(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnknownVariant(tag) => write!(f, "Unknown variant '{tag}'"),
            CodecError::MissingRequiredAttribute { variant, attribute } => {
                write!(f, "Missing required attribute '{attribute}' on {variant}")
            }
            CodecError::TypeMismatch {
                variant,
                attribute,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Type mismatch for '{attribute}' on {variant}: expected {expected}, found {found}"
                )
            }
            CodecError::MalformedInput(msg) => write!(f, "Malformed input: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_render_their_context() {
        let err = CodecError::MissingRequiredAttribute {
            variant: "Text".into(),
            attribute: "value".into(),
        };
        assert_eq!(err.to_string(), "Missing required attribute 'value' on Text");

        let err = CodecError::UnknownVariant("NotARealTag".into());
        assert_eq!(err.to_string(), "Unknown variant 'NotARealTag'");
    }
}
