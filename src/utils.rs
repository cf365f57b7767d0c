//! Small stateless helpers used around the formatter cache.

use std::error::Error;

use serde_json::Value;

use crate::error::IntlError;
use crate::options::Options;

/// Prefix of every diagnostic message produced by this crate.
pub const ERROR_PREFIX: &str = "[intlfmt]";

/// Escape the HTML-significant characters `& > < " '`.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '>' => escaped.push_str("&gt;"),
            '<' => escaped.push_str("&lt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Copy the `whitelist` keys of `props`, taking a key from `defaults` when
/// `props` lacks it. Keys found in neither are left out.
pub fn filter_props(props: &Options, whitelist: &[&str], defaults: Option<&Options>) -> Options {
    let mut filtered = Options::new();
    for &name in whitelist {
        let value: Option<&Value> = props
            .get(name)
            .or_else(|| defaults.and_then(|defaults| defaults.get(name)));
        if let Some(value) = value {
            filtered.insert(name.to_string(), value.clone());
        }
    }
    filtered
}

/// Fail with [`IntlError::MissingContext`] when no context is available.
pub fn invariant_intl_context<T>(context: Option<&T>) -> Result<&T, IntlError> {
    context.ok_or(IntlError::MissingContext)
}

/// Build a diagnostic message, appending the source error when there is one.
pub fn create_error(message: &str, source: Option<&dyn Error>) -> String {
    match source {
        Some(source) => format!("{} {}\n{}", ERROR_PREFIX, message, source),
        None => format!("{} {}", ERROR_PREFIX, message),
    }
}

/// Report a diagnostic through `tracing` in debug builds; silent in release builds.
pub fn default_error_handler(message: &str) {
    if cfg!(debug_assertions) {
        tracing::error!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_keeps_safe_text() {
        assert_eq!(escape("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_create_error_with_source() {
        let source = IntlError::InvalidLocale("x".to_string());
        let message = create_error("Error formatting date.", Some(&source));
        assert_eq!(
            message,
            "[intlfmt] Error formatting date.\ninvalid language tag: 'x'"
        );
    }

    #[test]
    fn test_default_error_handler_does_not_panic() {
        default_error_handler("[intlfmt] something went wrong");
    }
}
