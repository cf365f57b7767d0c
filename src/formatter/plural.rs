//! Plural category selection

use std::fmt;
use std::str::FromStr;

use crate::error::IntlError;
use crate::locale::{self, LocaleId, ResolvedLocale};
use crate::options::{get_str, Locales, Options};

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl FromStr for PluralCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(PluralCategory::Zero),
            "one" => Ok(PluralCategory::One),
            "two" => Ok(PluralCategory::Two),
            "few" => Ok(PluralCategory::Few),
            "many" => Ok(PluralCategory::Many),
            "other" => Ok(PluralCategory::Other),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether to select by quantity (`1 item`) or by rank (`1st`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluralType {
    #[default]
    Cardinal,
    Ordinal,
}

/// Selects the plural category of a number for a locale.
#[derive(Debug, Clone)]
pub struct PluralRules {
    locale: ResolvedLocale,
    plural_type: PluralType,
}

impl PluralRules {
    /// Build plural rules. Recognized option: `type` (`cardinal` or `ordinal`).
    pub fn new(locales: &Locales, options: &Options) -> Result<Self, IntlError> {
        let plural_type = match get_str(options, "type", &["cardinal", "ordinal"])? {
            Some("ordinal") => PluralType::Ordinal,
            _ => PluralType::Cardinal,
        };
        Ok(PluralRules {
            locale: locale::resolve(locales)?,
            plural_type,
        })
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale.id
    }

    pub fn plural_type(&self) -> PluralType {
        self.plural_type
    }

    /// Returns the category `n` falls into.
    pub fn select(&self, n: f64) -> PluralCategory {
        if !n.is_finite() {
            return PluralCategory::Other;
        }
        let language = self.locale.data.language;
        match self.plural_type {
            PluralType::Cardinal => cardinal(language, n.abs()),
            PluralType::Ordinal => ordinal(language, n.abs()),
        }
    }
}

fn cardinal(language: &str, n: f64) -> PluralCategory {
    let integer = n.trunc();
    let has_fraction = n.fract() != 0.0;

    match language {
        "fr" => {
            if integer == 0.0 || integer == 1.0 {
                PluralCategory::One
            } else if !has_fraction && integer % 1_000_000.0 == 0.0 {
                PluralCategory::Many
            } else {
                PluralCategory::Other
            }
        }
        "es" => {
            if n == 1.0 {
                PluralCategory::One
            } else if !has_fraction && integer != 0.0 && integer % 1_000_000.0 == 0.0 {
                PluralCategory::Many
            } else {
                PluralCategory::Other
            }
        }
        _ => {
            if integer == 1.0 && !has_fraction {
                PluralCategory::One
            } else {
                PluralCategory::Other
            }
        }
    }
}

fn ordinal(language: &str, n: f64) -> PluralCategory {
    if n.fract() != 0.0 {
        return PluralCategory::Other;
    }
    match language {
        "en" => {
            let (mod10, mod100) = (n % 10.0, n % 100.0);
            if mod10 == 1.0 && mod100 != 11.0 {
                PluralCategory::One
            } else if mod10 == 2.0 && mod100 != 12.0 {
                PluralCategory::Two
            } else if mod10 == 3.0 && mod100 != 13.0 {
                PluralCategory::Few
            } else {
                PluralCategory::Other
            }
        }
        "fr" if n == 1.0 => PluralCategory::One,
        _ => PluralCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rules(locale: &str, plural_type: &str) -> PluralRules {
        let options = json!({ "type": plural_type }).as_object().cloned().unwrap();
        PluralRules::new(&Locales::from(locale), &options).unwrap()
    }

    #[test]
    fn test_english_cardinal() {
        let en = rules("en", "cardinal");
        assert_eq!(en.select(1.0), PluralCategory::One);
        assert_eq!(en.select(0.0), PluralCategory::Other);
        assert_eq!(en.select(1.5), PluralCategory::Other);
        assert_eq!(en.select(-1.0), PluralCategory::One);
    }

    #[test]
    fn test_english_ordinal() {
        let en = rules("en-US", "ordinal");
        assert_eq!(en.select(1.0), PluralCategory::One);
        assert_eq!(en.select(22.0), PluralCategory::Two);
        assert_eq!(en.select(103.0), PluralCategory::Few);
        assert_eq!(en.select(11.0), PluralCategory::Other);
        assert_eq!(en.select(112.0), PluralCategory::Other);
    }

    #[test]
    fn test_french_cardinal() {
        let fr = rules("fr", "cardinal");
        assert_eq!(fr.select(0.0), PluralCategory::One);
        assert_eq!(fr.select(1.7), PluralCategory::One);
        assert_eq!(fr.select(2.0), PluralCategory::Other);
        assert_eq!(fr.select(2_000_000.0), PluralCategory::Many);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("few".parse::<PluralCategory>(), Ok(PluralCategory::Few));
        assert!("several".parse::<PluralCategory>().is_err());
    }

    #[test]
    fn test_invalid_type() {
        let options = json!({"type": "dual"}).as_object().cloned().unwrap();
        assert!(PluralRules::new(&Locales::from("en"), &options).is_err());
    }
}
