//! Formatting configuration and the context that applies it.
//!
//! [`IntlConfig`] replaces any notion of ambient defaults: everything a
//! formatting call falls back to (locale, presets, error reporting) is carried
//! explicitly. [`IntlContext`] combines a config with a [`FormatterBundle`] so
//! that named presets, caller overrides and cached formatters meet in one place.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;

use crate::cache::CacheStore;
use crate::error::IntlError;
use crate::factory::FormatterBundle;
use crate::formatter::{ListFormat, NumberFormat, PluralRules, RelativeTimeFormat};
use crate::named::{resolve_named_format, CustomFormats, FormatType};
use crate::options::{Locales, Options};
use crate::utils::{create_error, default_error_handler, filter_props};

#[cfg(feature = "chrono")]
use crate::formatter::DateTimeFormat;

/// Receives diagnostic messages.
pub type ErrorHandler = Rc<dyn Fn(&str)>;

/// Locale used when a config does not name one.
pub const DEFAULT_LOCALE: &str = "en";

const NUMBER_FORMAT_OPTIONS: &[&str] = &[
    "style",
    "currency",
    "currencyDisplay",
    "useGrouping",
    "minimumIntegerDigits",
    "minimumFractionDigits",
    "maximumFractionDigits",
];

#[cfg(feature = "chrono")]
const DATE_TIME_FORMAT_OPTIONS: &[&str] = &[
    "weekday", "year", "month", "day", "hour", "minute", "second", "hour12", "timeZone",
];

const RELATIVE_TIME_FORMAT_OPTIONS: &[&str] = &["numeric", "style"];
const PLURAL_RULES_OPTIONS: &[&str] = &["type"];
const LIST_FORMAT_OPTIONS: &[&str] = &["type", "style"];

/// Explicit formatting configuration.
///
/// Deserializes from camelCase JSON; `on_error` is not deserialized and
/// defaults to [`default_error_handler`].
#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntlConfig {
    /// Locale to format for.
    pub locale: String,
    /// Time zone passed to date-time formatters unless overridden.
    pub time_zone: Option<String>,
    /// Application presets.
    pub formats: CustomFormats,
    /// Message patterns by id.
    pub messages: BTreeMap<String, String>,
    pub default_locale: String,
    /// Presets used when `formats` has no entry of the same name.
    pub default_formats: CustomFormats,
    #[serde(skip)]
    pub on_error: ErrorHandler,
}

impl Default for IntlConfig {
    fn default() -> Self {
        IntlConfig {
            locale: DEFAULT_LOCALE.to_string(),
            time_zone: None,
            formats: CustomFormats::new(),
            messages: BTreeMap::new(),
            default_locale: DEFAULT_LOCALE.to_string(),
            default_formats: CustomFormats::new(),
            on_error: Rc::new(default_error_handler),
        }
    }
}

impl IntlConfig {
    /// A default config for `locale`.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        IntlConfig {
            locale: locale.into(),
            ..Self::default()
        }
    }

    pub fn with_on_error(mut self, on_error: impl Fn(&str) + 'static) -> Self {
        self.on_error = Rc::new(on_error);
        self
    }
}

impl fmt::Debug for IntlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntlConfig")
            .field("locale", &self.locale)
            .field("time_zone", &self.time_zone)
            .field("formats", &self.formats)
            .field("messages", &self.messages)
            .field("default_locale", &self.default_locale)
            .field("default_formats", &self.default_formats)
            .finish_non_exhaustive()
    }
}

/// A config bound to a formatter bundle.
///
/// Create one context per configuration scope. When the configuration
/// changes, build a new context with a new store rather than reusing the old
/// one, so formatters of the old scope can be released.
#[derive(Debug)]
pub struct IntlContext {
    config: IntlConfig,
    /// `default_formats` with `formats` layered on top.
    formats: CustomFormats,
    formatters: FormatterBundle,
}

impl IntlContext {
    /// Create a context over `store`, or over a fresh store when `None`.
    pub fn new(config: IntlConfig, store: Option<Rc<CacheStore>>) -> Self {
        Self::with_formatters(config, FormatterBundle::new(store))
    }

    pub fn with_formatters(config: IntlConfig, formatters: FormatterBundle) -> Self {
        let formats = config.default_formats.merged(&config.formats);
        IntlContext {
            config,
            formats,
            formatters,
        }
    }

    pub fn config(&self) -> &IntlConfig {
        &self.config
    }

    pub fn formatters(&self) -> &FormatterBundle {
        &self.formatters
    }

    fn locales(&self) -> Locales {
        Locales::from(vec![
            self.config.locale.clone(),
            self.config.default_locale.clone(),
        ])
    }

    fn report(&self, message: &str) {
        (self.config.on_error)(message)
    }

    /// Combine the preset `name` (if any) with caller `overrides`, keeping
    /// only the keys in `whitelist`. A missing preset is reported and ignored.
    fn options_for(
        &self,
        format_type: FormatType,
        name: Option<&str>,
        overrides: &Options,
        whitelist: &[&str],
    ) -> Options {
        let preset = name.and_then(|name| {
            resolve_named_format(&self.formats, format_type, name, &mut |message| {
                self.report(message)
            })
        });
        let defaults = preset.map(|preset| filter_props(preset, whitelist, None));
        filter_props(overrides, whitelist, defaults.as_ref())
    }

    pub fn number_format(
        &self,
        name: Option<&str>,
        overrides: &Options,
    ) -> Result<Rc<NumberFormat>, IntlError> {
        let options = self.options_for(FormatType::Number, name, overrides, NUMBER_FORMAT_OPTIONS);
        self.formatters.get_number_format(self.locales(), &options)
    }

    /// Formatter for dates; presets come from the `date` group.
    #[cfg(feature = "chrono")]
    pub fn date_format(
        &self,
        name: Option<&str>,
        overrides: &Options,
    ) -> Result<Rc<DateTimeFormat>, IntlError> {
        let options = self.options_for(FormatType::Date, name, overrides, DATE_TIME_FORMAT_OPTIONS);
        self.date_time_format(options)
    }

    /// Formatter for times; presets come from the `time` group and hour and
    /// minute are shown when no time field is requested.
    #[cfg(feature = "chrono")]
    pub fn time_format(
        &self,
        name: Option<&str>,
        overrides: &Options,
    ) -> Result<Rc<DateTimeFormat>, IntlError> {
        let mut options =
            self.options_for(FormatType::Time, name, overrides, DATE_TIME_FORMAT_OPTIONS);
        if !["hour", "minute", "second"].iter().any(|f| options.contains_key(*f)) {
            options.insert("hour".to_string(), Value::from("numeric"));
            options.insert("minute".to_string(), Value::from("numeric"));
        }
        self.date_time_format(options)
    }

    #[cfg(feature = "chrono")]
    fn date_time_format(&self, mut options: Options) -> Result<Rc<DateTimeFormat>, IntlError> {
        if let Some(zone) = &self.config.time_zone {
            options
                .entry("timeZone")
                .or_insert_with(|| Value::from(zone.as_str()));
        }
        self.formatters.get_date_time_format(self.locales(), &options)
    }

    pub fn relative_time_format(
        &self,
        name: Option<&str>,
        overrides: &Options,
    ) -> Result<Rc<RelativeTimeFormat>, IntlError> {
        let options = self.options_for(
            FormatType::Relative,
            name,
            overrides,
            RELATIVE_TIME_FORMAT_OPTIONS,
        );
        self.formatters
            .get_relative_time_format(self.locales(), &options)
    }

    pub fn plural_rules(&self, options: &Options) -> Result<Rc<PluralRules>, IntlError> {
        let options = filter_props(options, PLURAL_RULES_OPTIONS, None);
        self.formatters.get_plural_rules(self.locales(), &options)
    }

    pub fn list_format(&self, options: &Options) -> Result<Rc<ListFormat>, IntlError> {
        let options = filter_props(options, LIST_FORMAT_OPTIONS, None);
        self.formatters.get_list_format(self.locales(), &options)
    }

    /// Format the message registered under `id`.
    ///
    /// A missing id is reported through `on_error` and the id itself is
    /// returned, so the gap stays visible in the rendered text.
    pub fn format_message(&self, id: &str, values: &Options) -> Result<String, IntlError> {
        let Some(pattern) = self.config.messages.get(id) else {
            self.report(&create_error(
                &format!(
                    "Missing message: \"{}\" for locale: \"{}\"",
                    id, self.config.locale
                ),
                None,
            ));
            return Ok(id.to_string());
        };

        let message = self.formatters.get_message_format(
            pattern,
            self.locales(),
            &self.formats.to_options(),
        )?;
        message.format(values)
    }
}
