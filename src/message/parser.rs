//! Parser for ICU-style message patterns.
//!
//! Supported syntax:
//! - `{name}` simple arguments
//! - `{name, number}`, `{name, date}`, `{name, time}` with an optional style
//! - `{name, plural, [offset:N] =0 {...} one {...} other {...}}`
//! - `{name, selectordinal, ...}` and `{name, select, key {...} other {...}}`
//! - `#` inside plural cases
//! - apostrophe quoting: `''` is a literal apostrophe and `'{'` escapes syntax characters

use crate::error::MessageError;
use crate::formatter::PluralCategory;

use super::ast::{Element, PluralSelector};

/// Deepest allowed nesting of plural and select cases.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parse a message pattern into its elements.
pub fn parse(pattern: &str) -> Result<Vec<Element>, MessageError> {
    let mut parser = Parser::new(pattern);
    let elements = parser.parse_message(false, false)?;
    if let Some(c) = parser.peek() {
        return Err(MessageError::UnexpectedChar {
            position: parser.position,
            found: c,
        });
    }
    Ok(elements)
}

/// Parser over the characters of a pattern.
struct Parser {
    chars: Vec<char>,
    /// Index of the current character
    position: usize,
    /// Number of plural or select cases currently open
    depth: usize,
}

impl Parser {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            position: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consume `expected` or fail. Running out of input means the argument
    /// opened at `start` was never closed.
    fn expect(&mut self, expected: char, start: usize) -> Result<(), MessageError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(MessageError::UnexpectedChar {
                position: self.position,
                found: c,
            }),
            None => Err(MessageError::UnterminatedArgument { position: start }),
        }
    }

    /// Parse text and arguments until a closing brace or the end of input.
    fn parse_message(
        &mut self,
        nested: bool,
        in_plural: bool,
    ) -> Result<Vec<Element>, MessageError> {
        let mut elements = Vec::new();
        let mut text = String::new();

        while let Some(c) = self.peek() {
            match c {
                '{' => {
                    flush(&mut text, &mut elements);
                    elements.push(self.parse_argument(in_plural)?);
                }
                '}' if nested => break,
                '}' => {
                    return Err(MessageError::UnexpectedChar {
                        position: self.position,
                        found: c,
                    })
                }
                '#' if in_plural => {
                    flush(&mut text, &mut elements);
                    elements.push(Element::Pound);
                    self.advance();
                }
                '\'' => self.parse_apostrophe(in_plural, &mut text),
                _ => {
                    text.push(c);
                    self.advance();
                }
            }
        }

        flush(&mut text, &mut elements);
        Ok(elements)
    }

    fn parse_apostrophe(&mut self, in_plural: bool, text: &mut String) {
        self.advance();
        match self.peek() {
            Some('\'') => {
                text.push('\'');
                self.advance();
            }
            Some('{' | '}' | '|') => self.parse_quoted(text),
            Some('#') if in_plural => self.parse_quoted(text),
            _ => text.push('\''),
        }
    }

    /// Copy quoted text up to the closing apostrophe (or the end of input).
    fn parse_quoted(&mut self, text: &mut String) {
        while let Some(c) = self.peek() {
            self.advance();
            if c != '\'' {
                text.push(c);
            } else if self.peek() == Some('\'') {
                text.push('\'');
                self.advance();
            } else {
                return;
            }
        }
    }

    fn parse_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || "{}#,':=".contains(c) {
                break;
            }
            name.push(c);
            self.advance();
        }
        name
    }

    fn parse_argument(&mut self, in_plural: bool) -> Result<Element, MessageError> {
        let start = self.position;
        self.advance();
        self.skip_whitespace();

        let name = self.parse_name();
        if name.is_empty() {
            return Err(self.invalid(start, "expected an argument name"));
        }
        self.skip_whitespace();

        match self.peek() {
            Some('}') => {
                self.advance();
                return Ok(Element::Argument { name });
            }
            Some(',') => self.advance(),
            Some(c) => {
                return Err(MessageError::UnexpectedChar {
                    position: self.position,
                    found: c,
                })
            }
            None => return Err(MessageError::UnterminatedArgument { position: start }),
        }

        self.skip_whitespace();
        let kind = self.parse_name();
        self.skip_whitespace();

        match kind.as_str() {
            "number" | "date" | "time" => {
                let style = self.parse_style(start)?;
                Ok(match kind.as_str() {
                    "number" => Element::Number {
                        name,
                        style,
                        position: start,
                    },
                    "date" => Element::Date {
                        name,
                        style,
                        position: start,
                    },
                    _ => Element::Time {
                        name,
                        style,
                        position: start,
                    },
                })
            }
            "plural" | "selectordinal" => {
                self.expect(',', start)?;
                self.parse_plural(name, kind == "selectordinal", start)
            }
            "select" => {
                self.expect(',', start)?;
                self.parse_select(name, in_plural, start)
            }
            "" => Err(self.invalid(start, "expected an argument type")),
            other => Err(self.invalid(start, &format!("unknown argument type '{}'", other))),
        }
    }

    /// Parse the optional `, style` of a formatted argument and its closing brace.
    fn parse_style(&mut self, start: usize) -> Result<Option<String>, MessageError> {
        if self.peek() != Some(',') {
            self.expect('}', start)?;
            return Ok(None);
        }
        self.advance();

        let mut style = String::new();
        while let Some(c) = self.peek() {
            if c == '}' {
                self.advance();
                let style = style.trim();
                if style.is_empty() {
                    return Err(self.invalid(start, "empty argument style"));
                }
                return Ok(Some(style.to_string()));
            }
            style.push(c);
            self.advance();
        }
        Err(MessageError::UnterminatedArgument { position: start })
    }

    fn parse_plural(
        &mut self,
        name: String,
        ordinal: bool,
        start: usize,
    ) -> Result<Element, MessageError> {
        self.skip_whitespace();
        let mut offset = 0.0;
        if self.chars[self.position..].starts_with(&['o', 'f', 'f', 's', 'e', 't', ':']) {
            self.position += 7;
            self.skip_whitespace();
            offset = self
                .parse_number()
                .ok_or_else(|| self.invalid(start, "invalid plural offset"))?;
        }

        let mut cases = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.advance();
                    break;
                }
                None => return Err(MessageError::UnterminatedArgument { position: start }),
                Some('=') => {
                    self.advance();
                    let value = self
                        .parse_number()
                        .ok_or_else(|| self.invalid(start, "invalid exact plural selector"))?;
                    let body = self.parse_case(true, start)?;
                    cases.push((PluralSelector::Exact(value), body));
                }
                Some(_) => {
                    let key = self.parse_name();
                    let category = key.parse::<PluralCategory>().map_err(|_| {
                        self.invalid(start, &format!("unknown plural category '{}'", key))
                    })?;
                    let body = self.parse_case(true, start)?;
                    cases.push((PluralSelector::Category(category), body));
                }
            }
        }

        let has_other = cases
            .iter()
            .any(|(selector, _)| *selector == PluralSelector::Category(PluralCategory::Other));
        if !has_other {
            return Err(MessageError::MissingOther {
                kind: if ordinal { "selectordinal" } else { "plural" },
                position: start,
            });
        }

        Ok(Element::Plural {
            name,
            ordinal,
            offset,
            cases,
        })
    }

    fn parse_select(
        &mut self,
        name: String,
        in_plural: bool,
        start: usize,
    ) -> Result<Element, MessageError> {
        let mut cases = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.advance();
                    break;
                }
                None => return Err(MessageError::UnterminatedArgument { position: start }),
                Some(_) => {
                    let key = self.parse_name();
                    if key.is_empty() {
                        return Err(self.invalid(start, "expected a select key"));
                    }
                    let body = self.parse_case(in_plural, start)?;
                    cases.push((key, body));
                }
            }
        }

        if !cases.iter().any(|(key, _)| key == "other") {
            return Err(MessageError::MissingOther {
                kind: "select",
                position: start,
            });
        }
        Ok(Element::Select { name, cases })
    }

    /// Parse `{ message }` after a case key.
    fn parse_case(&mut self, in_plural: bool, start: usize) -> Result<Vec<Element>, MessageError> {
        self.skip_whitespace();
        self.expect('{', start)?;
        if self.depth == MAX_NESTING_DEPTH {
            return Err(MessageError::TooDeeplyNested { position: start });
        }
        self.depth += 1;
        let body = self.parse_message(true, in_plural)?;
        self.depth -= 1;
        self.expect('}', start)?;
        Ok(body)
    }

    fn parse_number(&mut self) -> Option<f64> {
        let begin = self.position;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.' || c == '-')
        {
            self.advance();
        }
        self.chars[begin..self.position]
            .iter()
            .collect::<String>()
            .parse()
            .ok()
    }

    fn invalid(&self, position: usize, reason: &str) -> MessageError {
        MessageError::InvalidArgument {
            position,
            reason: reason.to_string(),
        }
    }
}

fn flush(text: &mut String, elements: &mut Vec<Element>) {
    if !text.is_empty() {
        elements.push(Element::Literal(std::mem::take(text)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(s: &str) -> Element {
        Element::Literal(s.to_string())
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("Hello").unwrap(), vec![literal("Hello")]);
        assert_eq!(parse("").unwrap(), vec![]);
    }

    #[test]
    fn test_simple_argument() {
        assert_eq!(
            parse("Hi { name }!").unwrap(),
            vec![
                literal("Hi "),
                Element::Argument {
                    name: "name".to_string()
                },
                literal("!"),
            ]
        );
    }

    #[test]
    fn test_number_with_style() {
        assert_eq!(
            parse("{n, number, percent}").unwrap(),
            vec![Element::Number {
                name: "n".to_string(),
                style: Some("percent".to_string()),
                position: 0,
            }]
        );
    }

    #[test]
    fn test_apostrophes() {
        assert_eq!(parse("It''s").unwrap(), vec![literal("It's")]);
        assert_eq!(parse("'{literal}' braces").unwrap(), vec![literal("{literal} braces")]);
        assert_eq!(parse("don't").unwrap(), vec![literal("don't")]);
    }

    #[test]
    fn test_plural_cases() {
        let elements = parse("{count, plural, offset:1 =0 {none} one {# item} other {# items}}")
            .unwrap();
        match &elements[0] {
            Element::Plural {
                name,
                ordinal,
                offset,
                cases,
            } => {
                assert_eq!(name, "count");
                assert!(!ordinal);
                assert_eq!(*offset, 1.0);
                assert_eq!(cases.len(), 3);
                assert_eq!(cases[0].0, PluralSelector::Exact(0.0));
                assert_eq!(cases[1].1, vec![Element::Pound, literal(" item")]);
            }
            other => panic!("expected plural, got {:?}", other),
        }
    }

    #[test]
    fn test_pound_is_literal_outside_plural() {
        assert_eq!(parse("#1").unwrap(), vec![literal("#1")]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse("Hi {name").unwrap_err(),
            MessageError::UnterminatedArgument { position: 3 }
        );
        assert!(matches!(
            parse("oops }").unwrap_err(),
            MessageError::UnexpectedChar { position: 5, found: '}' }
        ));
        assert!(matches!(
            parse("{n, plural, one {x}}").unwrap_err(),
            MessageError::MissingOther { kind: "plural", .. }
        ));
        assert!(matches!(
            parse("{n, spellout}").unwrap_err(),
            MessageError::InvalidArgument { .. }
        ));
        assert!(matches!(
            parse("{n, plural, lots {x} other {y}}").unwrap_err(),
            MessageError::InvalidArgument { .. }
        ));
    }

    fn nested_select(depth: usize) -> String {
        format!(
            "{}x{}",
            "{a, select, other {".repeat(depth),
            "}}".repeat(depth)
        )
    }

    #[test]
    fn test_nesting_up_to_limit() {
        assert!(parse(&nested_select(MAX_NESTING_DEPTH)).is_ok());
    }

    #[test]
    fn test_nesting_past_limit_fails() {
        assert!(matches!(
            parse(&nested_select(MAX_NESTING_DEPTH + 1)).unwrap_err(),
            MessageError::TooDeeplyNested { .. }
        ));
        assert!(matches!(
            parse(&nested_select(2000)).unwrap_err(),
            MessageError::TooDeeplyNested { .. }
        ));
    }
}
