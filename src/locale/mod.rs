//! Language tags and locale negotiation.

mod builtin;

pub use builtin::{DateOrder, LocaleData, RelativeTimeData};

use std::fmt;
use std::str::FromStr;

use crate::error::IntlError;
use crate::options::Locales;

/// Language used when none of the requested locales has data.
pub const FALLBACK_LANGUAGE: &str = "en";

/// A structurally valid, canonically cased language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId {
    pub language: String,
    pub script: Option<String>,
    pub region: Option<String>,
    pub variants: Vec<String>,
}

impl FromStr for LocaleId {
    type Err = IntlError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let invalid = || IntlError::InvalidLocale(tag.to_string());
        let mut subtags = tag.split(['-', '_']);

        let language = subtags.next().filter(|l| is_language(l)).ok_or_else(invalid)?;
        let mut id = LocaleId {
            language: language.to_ascii_lowercase(),
            script: None,
            region: None,
            variants: Vec::new(),
        };

        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid());
            }
            let all_alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            let all_digit = subtag.chars().all(|c| c.is_ascii_digit());
            if id.script.is_none()
                && id.region.is_none()
                && id.variants.is_empty()
                && subtag.len() == 4
                && all_alpha
            {
                let mut script = subtag.to_ascii_lowercase();
                script[..1].make_ascii_uppercase();
                id.script = Some(script);
            } else if id.region.is_none()
                && id.variants.is_empty()
                && ((subtag.len() == 2 && all_alpha) || (subtag.len() == 3 && all_digit))
            {
                id.region = Some(subtag.to_ascii_uppercase());
            } else if subtag.len() >= 5
                || (subtag.len() == 4 && subtag.starts_with(|c: char| c.is_ascii_digit()))
            {
                id.variants.push(subtag.to_ascii_lowercase());
            } else {
                return Err(invalid());
            }
        }

        Ok(id)
    }
}

fn is_language(s: &str) -> bool {
    matches!(s.len(), 2..=3 | 5..=8) && s.chars().all(|c| c.is_ascii_alphabetic())
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{}", script)?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{}", region)?;
        }
        for variant in &self.variants {
            write!(f, "-{}", variant)?;
        }
        Ok(())
    }
}

/// The outcome of negotiating a requested locale list against built-in data.
#[derive(Debug, Clone)]
pub struct ResolvedLocale {
    pub id: LocaleId,
    pub data: &'static LocaleData,
}

/// Picks the first requested locale with built-in data, falling back to
/// English. Every requested tag must be well formed, even the unused ones.
pub fn resolve(locales: &Locales) -> Result<ResolvedLocale, IntlError> {
    let ids = locales
        .iter()
        .map(LocaleId::from_str)
        .collect::<Result<Vec<_>, _>>()?;

    for id in ids {
        if let Some(data) = builtin::lookup(&id.language) {
            return Ok(ResolvedLocale { id, data });
        }
    }

    Ok(ResolvedLocale {
        id: LocaleId {
            language: FALLBACK_LANGUAGE.to_string(),
            script: None,
            region: None,
            variants: Vec::new(),
        },
        data: &builtin::EN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_case() {
        let id: LocaleId = "EN-latn-us".parse().unwrap();
        assert_eq!(id.to_string(), "en-Latn-US");
    }

    #[test]
    fn test_parse_underscore_and_numeric_region() {
        let id: LocaleId = "es_419".parse().unwrap();
        assert_eq!(id.region.as_deref(), Some("419"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<LocaleId>().is_err());
        assert!("e".parse::<LocaleId>().is_err());
        assert!("en--US".parse::<LocaleId>().is_err());
        assert!("en-US!".parse::<LocaleId>().is_err());
    }

    #[test]
    fn test_resolve_first_supported() {
        let resolved = resolve(&Locales::from(["ja-JP", "de-AT", "fr"])).unwrap();
        assert_eq!(resolved.id.to_string(), "de-AT");
        assert_eq!(resolved.data.language, "de");
    }

    #[test]
    fn test_resolve_fallback() {
        let resolved = resolve(&Locales::none()).unwrap();
        assert_eq!(resolved.data.language, "en");
        let resolved = resolve(&Locales::from("ja")).unwrap();
        assert_eq!(resolved.id.to_string(), "en");
    }

    #[test]
    fn test_resolve_rejects_any_invalid_tag() {
        let err = resolve(&Locales::from(["en", "not a tag"])).unwrap_err();
        assert_eq!(err, IntlError::InvalidLocale("not a tag".to_string()));
    }
}
