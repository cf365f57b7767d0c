//! Named format presets.
//!
//! Applications register reusable option objects under a name, grouped by
//! format type:
//!
//! ```
//! use intlfmt::{resolve_named_format, CustomFormats, FormatType};
//!
//! let formats: CustomFormats = serde_json::from_str(
//!     r#"{"number": {"USD": {"style": "currency", "currency": "USD"}}}"#,
//! )
//! .unwrap();
//!
//! let usd = resolve_named_format(&formats, FormatType::Number, "USD", &mut |_| {});
//! assert_eq!(usd.unwrap()["currency"], "USD");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::options::Options;
use crate::utils::create_error;

/// Which group of presets a name is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    Number,
    Date,
    Time,
    Relative,
}

impl FormatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::Number => "number",
            FormatType::Date => "date",
            FormatType::Time => "time",
            FormatType::Relative => "relative",
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named option presets, by format type and name.
///
/// Entries that are not JSON objects are kept as given but treated as
/// missing on lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomFormats(BTreeMap<FormatType, BTreeMap<String, Value>>);

impl CustomFormats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `options` under `name`, replacing any previous preset.
    pub fn insert(&mut self, format_type: FormatType, name: impl Into<String>, options: Options) {
        self.0
            .entry(format_type)
            .or_default()
            .insert(name.into(), Value::Object(options));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(
        mut self,
        format_type: FormatType,
        name: impl Into<String>,
        options: Options,
    ) -> Self {
        self.insert(format_type, name, options);
        self
    }

    /// Look up a preset without reporting misses.
    pub fn get(&self, format_type: FormatType, name: &str) -> Option<&Options> {
        self.0.get(&format_type)?.get(name)?.as_object()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// A copy of `self` with the presets of `overrides` layered on top.
    pub fn merged(&self, overrides: &CustomFormats) -> CustomFormats {
        let mut merged = self.clone();
        for (format_type, presets) in &overrides.0 {
            let target = merged.0.entry(*format_type).or_default();
            for (name, value) in presets {
                target.insert(name.clone(), value.clone());
            }
        }
        merged
    }

    /// The presets as one options object, in the shape message formats take.
    pub fn to_options(&self) -> Options {
        self.0
            .iter()
            .map(|(format_type, presets)| {
                let presets: Options = presets
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect();
                (format_type.as_str().to_string(), Value::Object(presets))
            })
            .collect()
    }
}

/// Resolve the preset `name` of `format_type`.
///
/// On a miss (unknown type, unknown name, or an entry that is not an object)
/// `on_error` is called once with a descriptive message and `None` is
/// returned. This never builds a formatter.
pub fn resolve_named_format<'a>(
    formats: &'a CustomFormats,
    format_type: FormatType,
    name: &str,
    on_error: &mut dyn FnMut(&str),
) -> Option<&'a Options> {
    let format = formats.get(format_type, name);
    if format.is_none() {
        on_error(&create_error(
            &format!("No {} format named: {}", format_type, name),
            None,
        ));
    }
    format
}
