//! Message formatting.
//!
//! A [`MessageFormat`] parses its pattern once, at construction, and builds
//! the number, date and plural formatters its arguments need. Formatting a
//! message afterwards only walks the compiled parts, which is why message
//! formatters are worth caching.

pub mod ast;
pub mod parser;

use serde_json::Value;

use crate::error::{IntlError, MessageError};
use crate::formatter::{NumberFormat, PluralRules};
use crate::locale::{self, LocaleId};
use crate::options::{Locales, Options};

#[cfg(feature = "chrono")]
use crate::formatter::DateTimeFormat;

use ast::{Element, PluralSelector};

/// A compiled message pattern bound to a locale.
#[derive(Debug, Clone)]
pub struct MessageFormat {
    pattern: String,
    locale: LocaleId,
    parts: Vec<Part>,
}

#[derive(Debug, Clone)]
enum Part {
    Literal(String),
    Argument(String),
    Number {
        name: String,
        format: NumberFormat,
    },
    #[cfg(feature = "chrono")]
    Date {
        name: String,
        format: DateTimeFormat,
    },
    Plural {
        name: String,
        offset: f64,
        rules: PluralRules,
        /// Formats `#` and exact matches.
        number: NumberFormat,
        cases: Vec<(PluralSelector, Vec<Part>)>,
    },
    Select {
        name: String,
        cases: Vec<(String, Vec<Part>)>,
    },
    Pound,
}

impl MessageFormat {
    /// Parse `pattern` for the given locales.
    ///
    /// `formats` may define named styles under `number`, `date` and `time`,
    /// e.g. `{"number": {"USD": {"style": "currency", "currency": "USD"}}}`,
    /// which the pattern then refers to as `{price, number, USD}`.
    pub fn new(pattern: &str, locales: &Locales, formats: &Options) -> Result<Self, IntlError> {
        let resolved = locale::resolve(locales)?;
        let elements = parser::parse(pattern)?;
        let compiler = Compiler {
            locales: Locales::from(resolved.id.to_string()),
            formats,
        };
        let parts = compiler.compile(elements)?;
        Ok(MessageFormat {
            pattern: pattern.to_string(),
            locale: resolved.id,
            parts,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale
    }

    /// Format the message with argument values taken from `values`.
    pub fn format(&self, values: &Options) -> Result<String, IntlError> {
        let mut out = String::new();
        write_parts(&self.parts, values, None, &mut out)?;
        Ok(out)
    }
}

/// Turns parsed elements into parts with prebuilt formatters.
struct Compiler<'a> {
    locales: Locales,
    formats: &'a Options,
}

impl Compiler<'_> {
    fn compile(&self, elements: Vec<Element>) -> Result<Vec<Part>, IntlError> {
        elements
            .into_iter()
            .map(|element| self.compile_element(element))
            .collect()
    }

    fn compile_element(&self, element: Element) -> Result<Part, IntlError> {
        Ok(match element {
            Element::Literal(text) => Part::Literal(text),
            Element::Argument { name } => Part::Argument(name),
            Element::Pound => Part::Pound,
            Element::Number {
                name,
                style,
                position,
            } => {
                let options = match style.as_deref() {
                    None => Options::new(),
                    Some("integer") => single("maximumFractionDigits", Value::from(0)),
                    Some("percent") => single("style", Value::from("percent")),
                    Some(named) => self.named("number", named, position)?,
                };
                Part::Number {
                    name,
                    format: NumberFormat::new(&self.locales, &options)?,
                }
            }
            Element::Date {
                name,
                style,
                position,
            } => self.compile_date(name, "date", style, position)?,
            Element::Time {
                name,
                style,
                position,
            } => self.compile_date(name, "time", style, position)?,
            Element::Plural {
                name,
                ordinal,
                offset,
                cases,
            } => {
                let options = if ordinal {
                    single("type", Value::from("ordinal"))
                } else {
                    Options::new()
                };
                let cases = cases
                    .into_iter()
                    .map(|(selector, body)| Ok((selector, self.compile(body)?)))
                    .collect::<Result<Vec<_>, IntlError>>()?;
                Part::Plural {
                    name,
                    offset,
                    rules: PluralRules::new(&self.locales, &options)?,
                    number: NumberFormat::new(&self.locales, &Options::new())?,
                    cases,
                }
            }
            Element::Select { name, cases } => {
                let cases = cases
                    .into_iter()
                    .map(|(key, body)| Ok((key, self.compile(body)?)))
                    .collect::<Result<Vec<_>, IntlError>>()?;
                Part::Select { name, cases }
            }
        })
    }

    #[cfg(feature = "chrono")]
    fn compile_date(
        &self,
        name: String,
        kind: &'static str,
        style: Option<String>,
        position: usize,
    ) -> Result<Part, IntlError> {
        let options = match style.as_deref() {
            None => Options::new(),
            Some(builtin @ ("short" | "medium" | "long" | "full")) => builtin_style(kind, builtin),
            Some(named) => self.named(kind, named, position)?,
        };
        Ok(Part::Date {
            name,
            format: DateTimeFormat::new(&self.locales, &options)?,
        })
    }

    #[cfg(not(feature = "chrono"))]
    fn compile_date(
        &self,
        _name: String,
        _kind: &'static str,
        _style: Option<String>,
        _position: usize,
    ) -> Result<Part, IntlError> {
        Err(IntlError::ConstructorUnavailable(
            crate::kind::FormatterKind::DateTime,
        ))
    }

    /// Look up a named style in the `formats` argument.
    fn named(&self, kind: &str, name: &str, position: usize) -> Result<Options, IntlError> {
        self.formats
            .get(kind)
            .and_then(|styles| styles.get(name))
            .and_then(Value::as_object)
            .cloned()
            .ok_or_else(|| {
                MessageError::InvalidArgument {
                    position,
                    reason: format!("unknown {} style '{}'", kind, name),
                }
                .into()
            })
    }
}

fn single(key: &str, value: Value) -> Options {
    let mut options = Options::new();
    options.insert(key.to_string(), value);
    options
}

/// The `short`, `medium`, `long` and `full` date and time styles.
#[cfg(feature = "chrono")]
fn builtin_style(kind: &str, style: &str) -> Options {
    let fields: &[(&str, &str)] = match (kind, style) {
        ("date", "short") => &[("month", "numeric"), ("day", "numeric"), ("year", "2-digit")],
        ("date", "medium") => &[("month", "short"), ("day", "numeric"), ("year", "numeric")],
        ("date", "long") => &[("month", "long"), ("day", "numeric"), ("year", "numeric")],
        ("date", _) => &[
            ("weekday", "long"),
            ("month", "long"),
            ("day", "numeric"),
            ("year", "numeric"),
        ],
        (_, "short") => &[("hour", "numeric"), ("minute", "numeric")],
        _ => &[("hour", "numeric"), ("minute", "numeric"), ("second", "numeric")],
    };
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), Value::from(*v)))
        .collect()
}

fn lookup<'v>(values: &'v Options, name: &str) -> Result<&'v Value, IntlError> {
    match values.get(name) {
        None | Some(Value::Null) => Err(IntlError::MissingArgument(name.to_string())),
        Some(value) => Ok(value),
    }
}

fn as_number(value: &Value, name: &str) -> Result<f64, IntlError> {
    value.as_f64().ok_or_else(|| IntlError::ArgumentType {
        name: name.to_string(),
        expected: "number",
    })
}

/// `pound` carries the enclosing plural's value and formatter for `#`.
fn write_parts(
    parts: &[Part],
    values: &Options,
    pound: Option<(f64, &NumberFormat)>,
    out: &mut String,
) -> Result<(), IntlError> {
    for part in parts {
        match part {
            Part::Literal(text) => out.push_str(text),
            Part::Argument(name) => match lookup(values, name)? {
                Value::String(s) => out.push_str(s),
                other => out.push_str(&other.to_string()),
            },
            Part::Number { name, format } => {
                let value = as_number(lookup(values, name)?, name)?;
                out.push_str(&format.format(value));
            }
            #[cfg(feature = "chrono")]
            Part::Date { name, format } => {
                let value = to_date_time(lookup(values, name)?, name)?;
                out.push_str(&format.format(&value));
            }
            Part::Plural {
                name,
                offset,
                rules,
                number,
                cases,
            } => {
                let value = as_number(lookup(values, name)?, name)?;
                let adjusted = value - offset;
                let displayed = number.rounded(adjusted);
                let category = PluralSelector::Category(rules.select(displayed));
                let other = PluralSelector::Category(crate::formatter::PluralCategory::Other);

                let body = cases
                    .iter()
                    .find(|(selector, _)| *selector == PluralSelector::Exact(value))
                    .or_else(|| cases.iter().find(|(selector, _)| *selector == category))
                    .or_else(|| cases.iter().find(|(selector, _)| *selector == other))
                    .map(|(_, body)| body);
                if let Some(body) = body {
                    write_parts(body, values, Some((adjusted, number)), out)?;
                }
            }
            Part::Select { name, cases } => {
                let key = match lookup(values, name)? {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                let body = cases
                    .iter()
                    .find(|(case, _)| *case == key)
                    .or_else(|| cases.iter().find(|(case, _)| case == "other"))
                    .map(|(_, body)| body);
                if let Some(body) = body {
                    write_parts(body, values, pound, out)?;
                }
            }
            Part::Pound => match pound {
                Some((value, number)) => out.push_str(&number.format(value)),
                None => out.push('#'),
            },
        }
    }
    Ok(())
}

/// Dates are passed as milliseconds since the Unix epoch or as ISO 8601 strings.
#[cfg(feature = "chrono")]
fn to_date_time(value: &Value, name: &str) -> Result<chrono::NaiveDateTime, IntlError> {
    let invalid = || IntlError::ArgumentType {
        name: name.to_string(),
        expected: "date",
    };
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(chrono::DateTime::from_timestamp_millis)
            .map(|dt| dt.naive_utc())
            .ok_or_else(invalid),
        Value::String(s) => s
            .parse::<chrono::NaiveDateTime>()
            .or_else(|_| {
                s.parse::<chrono::NaiveDate>()
                    .map(|d| d.and_time(chrono::NaiveTime::MIN))
            })
            .map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
