//! The closed set of formatter kinds.

use std::fmt;

/// One of the six locale-sensitive formatting categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatterKind {
    DateTime,
    Number,
    Message,
    RelativeTime,
    PluralRules,
    List,
}

impl FormatterKind {
    /// Every kind, in cache store field order.
    pub const ALL: [FormatterKind; 6] = [
        FormatterKind::DateTime,
        FormatterKind::Number,
        FormatterKind::Message,
        FormatterKind::RelativeTime,
        FormatterKind::PluralRules,
        FormatterKind::List,
    ];

    /// Returns the human-readable name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FormatterKind::DateTime => "date-time",
            FormatterKind::Number => "number",
            FormatterKind::Message => "message",
            FormatterKind::RelativeTime => "relative-time",
            FormatterKind::PluralRules => "plural-rules",
            FormatterKind::List => "list",
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
