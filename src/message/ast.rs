//! Syntax tree of a parsed message pattern.

use crate::formatter::PluralCategory;

/// A piece of a message pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Text copied to the output.
    Literal(String),
    /// `{name}`
    Argument { name: String },
    /// `{name, number}` or `{name, number, style}`
    Number {
        name: String,
        style: Option<String>,
        position: usize,
    },
    /// `{name, date}` or `{name, date, style}`
    Date {
        name: String,
        style: Option<String>,
        position: usize,
    },
    /// `{name, time}` or `{name, time, style}`
    Time {
        name: String,
        style: Option<String>,
        position: usize,
    },
    /// `{name, plural, ...}` and `{name, selectordinal, ...}`
    Plural {
        name: String,
        ordinal: bool,
        offset: f64,
        cases: Vec<(PluralSelector, Vec<Element>)>,
    },
    /// `{name, select, ...}`
    Select {
        name: String,
        cases: Vec<(String, Vec<Element>)>,
    },
    /// `#` inside a plural case: the (offset) plural value.
    Pound,
}

/// The key of a plural case.
#[derive(Debug, Clone, PartialEq)]
pub enum PluralSelector {
    /// `=2`
    Exact(f64),
    /// `one`, `few`, `other`
    Category(PluralCategory),
}
