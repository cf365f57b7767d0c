//! Error types for formatter construction and formatting.

use thiserror::Error;

use crate::kind::FormatterKind;

/// Errors raised while building or using a formatter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntlError {
    #[error("no constructor available for {0} formatters")]
    ConstructorUnavailable(FormatterKind),

    #[error("invalid language tag: '{0}'")]
    InvalidLocale(String),

    #[error("invalid value {value} for option '{option}'")]
    InvalidOption { option: &'static str, value: String },

    #[error(
        "could not find required intl context; an IntlContext must be created before formatting"
    )]
    MissingContext,

    #[error(transparent)]
    Message(#[from] MessageError),

    #[error("missing value for message argument '{0}'")]
    MissingArgument(String),

    #[error("message argument '{name}' must be a {expected}")]
    ArgumentType { name: String, expected: &'static str },
}

impl IntlError {
    pub(crate) fn invalid_option(option: &'static str, value: impl ToString) -> Self {
        IntlError::InvalidOption {
            option,
            value: value.to_string(),
        }
    }
}

/// Errors that can occur when parsing a message pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MessageError {
    #[error("unexpected character at position {position}: found '{found}'")]
    UnexpectedChar { position: usize, found: char },

    #[error("unterminated argument starting at position {position}")]
    UnterminatedArgument { position: usize },

    #[error("invalid argument at position {position}: {reason}")]
    InvalidArgument { position: usize, reason: String },

    #[error("cases nested too deeply at position {position}")]
    TooDeeplyNested { position: usize },

    #[error("missing 'other' case in {kind} argument at position {position}")]
    MissingOther { kind: &'static str, position: usize },
}
