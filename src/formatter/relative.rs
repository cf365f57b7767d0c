//! Relative time formatting ("in 3 days", "2 hours ago")

use std::str::FromStr;

use crate::error::IntlError;
use crate::locale::{self, LocaleId, ResolvedLocale};
use crate::options::{get_str, Locales, Options};

use super::number::NumberFormat;
use super::plural::{PluralCategory, PluralRules};

/// Units accepted by [`RelativeTimeFormat::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for TimeUnit {
    type Err = IntlError;

    /// Accepts singular and plural unit names (`"day"`, `"days"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix('s').unwrap_or(s) {
            "second" => Ok(TimeUnit::Second),
            "minute" => Ok(TimeUnit::Minute),
            "hour" => Ok(TimeUnit::Hour),
            "day" => Ok(TimeUnit::Day),
            "week" => Ok(TimeUnit::Week),
            "month" => Ok(TimeUnit::Month),
            "year" => Ok(TimeUnit::Year),
            _ => Err(IntlError::invalid_option("unit", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numeric {
    /// Always use a number: `in 1 day`.
    #[default]
    Always,
    /// Use words where the locale has them: `tomorrow`.
    Auto,
}

/// Formats a signed quantity of a time unit relative to now.
///
/// Only long unit names exist in the locale data: the `short` and `narrow`
/// styles are accepted and rendered as `long`.
#[derive(Debug, Clone)]
pub struct RelativeTimeFormat {
    locale: ResolvedLocale,
    numeric: Numeric,
    number: NumberFormat,
    plural: PluralRules,
}

impl RelativeTimeFormat {
    /// Build a formatter. Recognized options: `numeric` and `style`.
    pub fn new(locales: &Locales, options: &Options) -> Result<Self, IntlError> {
        let numeric = match get_str(options, "numeric", &["always", "auto"])? {
            Some("auto") => Numeric::Auto,
            _ => Numeric::Always,
        };
        get_str(options, "style", &["long", "short", "narrow"])?;

        let locale = locale::resolve(locales)?;
        let resolved = Locales::from(locale.id.to_string());
        Ok(RelativeTimeFormat {
            number: NumberFormat::new(&resolved, &Options::new())?,
            plural: PluralRules::new(&resolved, &Options::new())?,
            locale,
            numeric,
        })
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale.id
    }

    pub fn format(&self, value: f64, unit: TimeUnit) -> String {
        let data = &self.locale.data.relative;

        if self.numeric == Numeric::Auto {
            match unit {
                TimeUnit::Day if value == -1.0 => return data.days[0].to_string(),
                TimeUnit::Day if value == 0.0 => return data.days[1].to_string(),
                TimeUnit::Day if value == 1.0 => return data.days[2].to_string(),
                TimeUnit::Second if value == 0.0 => return data.now.to_string(),
                _ => {}
            }
        }

        let magnitude = value.abs();
        let (singular, plural) = data.units[unit.index()];
        let category = self.plural.select(self.number.rounded(magnitude));
        let name = if category == PluralCategory::One {
            singular
        } else {
            plural
        };
        let quantity = format!("{} {}", self.number.format(magnitude), name);

        let pattern = if value.is_sign_negative() {
            data.past
        } else {
            data.future
        };
        pattern.replace("{0}", &quantity)
    }

    /// Like [`format`](Self::format) with the unit given by name.
    pub fn format_unit(&self, value: f64, unit: &str) -> Result<String, IntlError> {
        Ok(self.format(value, unit.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rtf(locale: &str, options: serde_json::Value) -> RelativeTimeFormat {
        let options = options.as_object().cloned().unwrap_or_default();
        RelativeTimeFormat::new(&Locales::from(locale), &options).unwrap()
    }

    #[test]
    fn test_english_numeric() {
        let fmt = rtf("en", json!({}));
        assert_eq!(fmt.format(3.0, TimeUnit::Day), "in 3 days");
        assert_eq!(fmt.format(-1.0, TimeUnit::Hour), "1 hour ago");
        assert_eq!(fmt.format(1.0, TimeUnit::Day), "in 1 day");
        assert_eq!(fmt.format(-1500.0, TimeUnit::Year), "1,500 years ago");
    }

    #[test]
    fn test_auto_words() {
        let fmt = rtf("en", json!({"numeric": "auto"}));
        assert_eq!(fmt.format(1.0, TimeUnit::Day), "tomorrow");
        assert_eq!(fmt.format(-1.0, TimeUnit::Day), "yesterday");
        assert_eq!(fmt.format(0.0, TimeUnit::Second), "now");
        assert_eq!(fmt.format(2.0, TimeUnit::Day), "in 2 days");
    }

    #[test]
    fn test_other_languages() {
        assert_eq!(rtf("de", json!({})).format(-3.0, TimeUnit::Day), "vor 3 Tagen");
        assert_eq!(rtf("fr", json!({})).format(2.0, TimeUnit::Week), "dans 2 semaines");
        assert_eq!(rtf("es", json!({})).format(-1.0, TimeUnit::Month), "hace 1 mes");
    }

    #[test]
    fn test_plural_follows_displayed_value() {
        let fmt = rtf("en", json!({}));
        assert_eq!(fmt.format(1.0001, TimeUnit::Day), "in 1 day");
        assert_eq!(fmt.format(-1.0001, TimeUnit::Day), "1 day ago");
        assert_eq!(fmt.format(1.5, TimeUnit::Day), "in 1.5 days");
    }

    #[test]
    fn test_styles_render_long() {
        let short = rtf("en", json!({"style": "short"}));
        assert_eq!(short.format(-2.0, TimeUnit::Hour), "2 hours ago");
        let tiny = json!({"style": "tiny"}).as_object().cloned().unwrap();
        assert!(RelativeTimeFormat::new(&Locales::from("en"), &tiny).is_err());
    }

    #[test]
    fn test_unit_names() {
        let fmt = rtf("en", json!({}));
        assert_eq!(fmt.format_unit(-5.0, "minutes").unwrap(), "5 minutes ago");
        assert!(fmt.format_unit(1.0, "fortnight").is_err());
    }
}
