//! Formatter arguments and cache key derivation.
//!
//! Every constructor takes a locale list followed by an options object. The
//! options object is a JSON map so that any kind (including nested option
//! shapes) can be described, and so that presets loaded from configuration
//! files can be fed straight into the getters.

use serde_json::Value;

use crate::error::IntlError;

/// An options object, as passed to a formatter constructor.
pub type Options = serde_json::Map<String, Value>;

/// An ordered list of requested locale tags.
///
/// Order matters: the first tag is the most preferred one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Locales(Vec<String>);

impl Locales {
    /// An empty list, meaning "use the default locale".
    pub fn none() -> Self {
        Locales(Vec::new())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn to_value(&self) -> Value {
        Value::Array(self.0.iter().cloned().map(Value::String).collect())
    }
}

impl From<&str> for Locales {
    fn from(tag: &str) -> Self {
        Locales(vec![tag.to_string()])
    }
}

impl From<String> for Locales {
    fn from(tag: String) -> Self {
        Locales(vec![tag])
    }
}

impl From<&String> for Locales {
    fn from(tag: &String) -> Self {
        Locales(vec![tag.clone()])
    }
}

impl From<Vec<String>> for Locales {
    fn from(tags: Vec<String>) -> Self {
        Locales(tags)
    }
}

impl From<Vec<&str>> for Locales {
    fn from(tags: Vec<&str>) -> Self {
        Locales(tags.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Locales {
    fn from(tags: &[&str]) -> Self {
        Locales(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Locales {
    fn from(tags: [&str; N]) -> Self {
        Locales(tags.iter().map(|t| t.to_string()).collect())
    }
}

/// Derives the string key a constructor call is cached under.
pub trait CacheKey {
    fn cache_key(&self) -> String;
}

/// Arguments shared by every kind except message: `(locales, options)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatArgs {
    pub locales: Locales,
    pub options: Options,
}

impl FormatArgs {
    pub fn new(locales: impl Into<Locales>, options: Options) -> Self {
        Self {
            locales: locales.into(),
            options,
        }
    }
}

impl CacheKey for FormatArgs {
    fn cache_key(&self) -> String {
        canonical_key(&[self.locales.to_value(), Value::Object(self.options.clone())])
    }
}

/// Arguments of the message kind: `(pattern, locales, formats)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageArgs {
    pub pattern: String,
    pub locales: Locales,
    /// Named `number`, `date` and `time` styles available to the pattern.
    pub formats: Options,
}

impl MessageArgs {
    pub fn new(pattern: impl Into<String>, locales: impl Into<Locales>, formats: Options) -> Self {
        Self {
            pattern: pattern.into(),
            locales: locales.into(),
            formats,
        }
    }
}

impl CacheKey for MessageArgs {
    fn cache_key(&self) -> String {
        canonical_key(&[
            Value::String(self.pattern.clone()),
            self.locales.to_value(),
            Value::Object(self.formats.clone()),
        ])
    }
}

/// Serializes an ordered argument list as a JSON array whose objects have
/// their keys sorted at every depth.
pub fn canonical_key(args: &[Value]) -> String {
    let mut out = String::from("[");
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_canonical(arg, &mut out);
    }
    out.push(']');
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
        // Scalars already have a single JSON spelling.
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Reads a string option restricted to `allowed`.
pub(crate) fn get_str<'a>(
    options: &'a Options,
    name: &'static str,
    allowed: &[&'static str],
) -> Result<Option<&'a str>, IntlError> {
    match options.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if allowed.is_empty() || allowed.contains(&s.as_str()) => {
            Ok(Some(s.as_str()))
        }
        Some(other) => Err(IntlError::invalid_option(name, other)),
    }
}

pub(crate) fn get_bool(options: &Options, name: &'static str) -> Result<Option<bool>, IntlError> {
    match options.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(IntlError::invalid_option(name, other)),
    }
}

/// Reads an integer option within `min..=max`.
pub(crate) fn get_digits(
    options: &Options,
    name: &'static str,
    min: u32,
    max: u32,
) -> Result<Option<u32>, IntlError> {
    match options.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(d) if d >= min as u64 && d <= max as u64 => Ok(Some(d as u32)),
            _ => Err(IntlError::invalid_option(name, n)),
        },
        Some(other) => Err(IntlError::invalid_option(name, other)),
    }
}
