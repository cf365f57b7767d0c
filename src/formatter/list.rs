//! List formatting

use crate::error::IntlError;
use crate::locale::{self, LocaleId, ResolvedLocale};
use crate::options::{get_str, Locales, Options};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListType {
    /// `a, b, and c`
    #[default]
    Conjunction,
    /// `a, b, or c`
    Disjunction,
    /// `a, b, c`
    Unit,
}

/// Width of the separators.
///
/// The locale data has one set of connective words, so `Short` renders like
/// `Long`. `Narrow` drops the commas of unit lists only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    #[default]
    Long,
    Short,
    Narrow,
}

/// Joins a list of strings the way a locale writes enumerations.
#[derive(Debug, Clone)]
pub struct ListFormat {
    locale: ResolvedLocale,
    list_type: ListType,
    style: ListStyle,
}

impl ListFormat {
    /// Build a list formatter. Recognized options: `type` and `style`.
    pub fn new(locales: &Locales, options: &Options) -> Result<Self, IntlError> {
        let list_type = match get_str(options, "type", &["conjunction", "disjunction", "unit"])? {
            Some("disjunction") => ListType::Disjunction,
            Some("unit") => ListType::Unit,
            _ => ListType::Conjunction,
        };
        let style = match get_str(options, "style", &["long", "short", "narrow"])? {
            Some("short") => ListStyle::Short,
            Some("narrow") => ListStyle::Narrow,
            _ => ListStyle::Long,
        };
        Ok(ListFormat {
            locale: locale::resolve(locales)?,
            list_type,
            style,
        })
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale.id
    }

    pub fn format<S: AsRef<str>>(&self, items: &[S]) -> String {
        let data = self.locale.data;
        let middle = match (self.list_type, self.style) {
            (ListType::Unit, ListStyle::Narrow) => " ",
            _ => ", ",
        };

        let word = match self.list_type {
            ListType::Conjunction => Some(data.list_and),
            ListType::Disjunction => Some(data.list_or),
            ListType::Unit => None,
        };

        match items {
            [] => String::new(),
            [only] => only.as_ref().to_string(),
            [init @ .., last] => {
                let mut result = init
                    .iter()
                    .map(|item| item.as_ref())
                    .collect::<Vec<&str>>()
                    .join(middle);
                match word {
                    Some(word) => {
                        if init.len() > 1 && data.serial_comma {
                            result.push(',');
                        }
                        result.push(' ');
                        result.push_str(word);
                        result.push(' ');
                    }
                    None => result.push_str(middle),
                }
                result.push_str(last.as_ref());
                result
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lf(locale: &str, options: serde_json::Value) -> ListFormat {
        let options = options.as_object().cloned().unwrap_or_default();
        ListFormat::new(&Locales::from(locale), &options).unwrap()
    }

    #[test]
    fn test_english_conjunction() {
        let fmt = lf("en", json!({}));
        assert_eq!(fmt.format::<&str>(&[]), "");
        assert_eq!(fmt.format(&["a"]), "a");
        assert_eq!(fmt.format(&["a", "b"]), "a and b");
        assert_eq!(fmt.format(&["a", "b", "c"]), "a, b, and c");
    }

    #[test]
    fn test_disjunction_without_serial_comma() {
        let fmt = lf("de", json!({"type": "disjunction"}));
        assert_eq!(fmt.format(&["rot", "grün", "blau"]), "rot, grün oder blau");
    }

    #[test]
    fn test_unit_styles() {
        assert_eq!(lf("en", json!({"type": "unit"})).format(&["1", "2", "3"]), "1, 2, 3");
        assert_eq!(
            lf("en", json!({"type": "unit", "style": "narrow"})).format(&["1", "2", "3"]),
            "1 2 3"
        );
    }

    #[test]
    fn test_short_style_matches_long() {
        let items = ["a", "b", "c"];
        let long = lf("en", json!({"style": "long"})).format(&items);
        assert_eq!(lf("en", json!({"style": "short"})).format(&items), long);
        assert_eq!(lf("en", json!({"style": "narrow"})).format(&items), long);
    }

    #[test]
    fn test_owned_strings() {
        let items = vec!["pommes".to_string(), "poires".to_string()];
        assert_eq!(lf("fr", json!({})).format(&items), "pommes et poires");
    }
}
