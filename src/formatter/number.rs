//! Number formatting (decimals, percentages, currencies)

use crate::error::IntlError;
use crate::locale::{self, LocaleId, ResolvedLocale};
use crate::options::{get_bool, get_digits, get_str, Locales, Options};

/// Largest integer an `f64` represents exactly.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    Decimal,
    Percent,
    Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyDisplay {
    /// `$`, `€`
    Symbol,
    /// `USD`, `EUR`
    Code,
}

/// A locale-aware number formatter.
#[derive(Debug, Clone)]
pub struct NumberFormat {
    locale: ResolvedLocale,
    style: NumberStyle,
    currency: Option<String>,
    currency_display: CurrencyDisplay,
    minimum_integer_digits: u32,
    minimum_fraction_digits: u32,
    maximum_fraction_digits: u32,
    use_grouping: bool,
}

impl NumberFormat {
    /// Build a formatter from a locale list and an options object.
    ///
    /// Recognized options: `style`, `currency`, `currencyDisplay`,
    /// `minimumIntegerDigits`, `minimumFractionDigits`,
    /// `maximumFractionDigits` and `useGrouping`.
    pub fn new(locales: &Locales, options: &Options) -> Result<Self, IntlError> {
        let locale = locale::resolve(locales)?;

        let style = match get_str(options, "style", &["decimal", "percent", "currency"])? {
            Some("percent") => NumberStyle::Percent,
            Some("currency") => NumberStyle::Currency,
            _ => NumberStyle::Decimal,
        };

        let currency = match get_str(options, "currency", &[])? {
            Some(code) if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
                Some(code.to_ascii_uppercase())
            }
            Some(code) => return Err(IntlError::invalid_option("currency", code)),
            None if style == NumberStyle::Currency => {
                return Err(IntlError::invalid_option("currency", "undefined"))
            }
            None => None,
        };

        let currency_display = match get_str(options, "currencyDisplay", &["symbol", "code"])? {
            Some("code") => CurrencyDisplay::Code,
            _ => CurrencyDisplay::Symbol,
        };

        let (default_min, default_max) = match style {
            NumberStyle::Decimal => (0, 3),
            NumberStyle::Percent => (0, 0),
            NumberStyle::Currency => {
                let digits = currency.as_deref().map_or(2, currency_digits);
                (digits, digits)
            }
        };

        let min = get_digits(options, "minimumFractionDigits", 0, 20)?;
        let max = get_digits(options, "maximumFractionDigits", 0, 20)?;
        let (minimum_fraction_digits, maximum_fraction_digits) = match (min, max) {
            (Some(min), Some(max)) if min > max => {
                return Err(IntlError::invalid_option("maximumFractionDigits", max))
            }
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, default_max.max(min)),
            (None, Some(max)) => (default_min.min(max), max),
            (None, None) => (default_min, default_max),
        };

        Ok(NumberFormat {
            locale,
            style,
            currency,
            currency_display,
            minimum_integer_digits: get_digits(options, "minimumIntegerDigits", 1, 21)?
                .unwrap_or(1),
            minimum_fraction_digits,
            maximum_fraction_digits,
            use_grouping: get_bool(options, "useGrouping")?.unwrap_or(true),
        })
    }

    /// The locale this formatter resolved to.
    pub fn locale(&self) -> &LocaleId {
        &self.locale.id
    }

    pub fn style(&self) -> NumberStyle {
        self.style
    }

    /// Format a numeric value.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }

        let scaled = match self.style {
            NumberStyle::Percent => value * 100.0,
            _ => value,
        };

        if scaled.is_infinite() {
            return self.decorate(scaled < 0.0, "∞".to_string());
        }

        let (integer, fraction) = split_rounded(scaled.abs(), self.maximum_fraction_digits);
        let fraction = trim_fraction(&fraction, self.minimum_fraction_digits);
        let negative = scaled < 0.0 && integer.bytes().chain(fraction.bytes()).any(|b| b != b'0');

        let number = self.assemble(&integer, &fraction);
        self.decorate(negative, number)
    }

    /// The value as it will be displayed after rounding to the fraction
    /// digit options. Plural selection should use this rather than the raw value.
    pub fn rounded(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let scale = match self.style {
            NumberStyle::Percent => 100.0,
            _ => 1.0,
        };
        let scaled = value * scale;
        let (integer, fraction) = split_rounded(scaled.abs(), self.maximum_fraction_digits);
        let digits = if fraction.is_empty() {
            integer
        } else {
            format!("{}.{}", integer, fraction)
        };
        let magnitude = digits.parse::<f64>().unwrap_or(scaled.abs());
        magnitude.copysign(value) / scale
    }

    /// Format an arbitrary-precision integer without going through `f64`.
    #[cfg(feature = "bigint")]
    pub fn format_bigint(&self, value: &num_bigint::BigInt) -> String {
        use num_bigint::Sign;

        let mut integer = value.magnitude().to_string();
        if self.style == NumberStyle::Percent && integer != "0" {
            integer.push_str("00");
        }
        let fraction = "0".repeat(self.minimum_fraction_digits as usize);
        let number = self.assemble(&integer, &fraction);
        self.decorate(value.sign() == Sign::Minus, number)
    }

    /// Join integer and fraction digits with the locale's separators.
    fn assemble(&self, integer: &str, fraction: &str) -> String {
        let width = self.minimum_integer_digits as usize;
        let padded = format!("{:0>width$}", integer, width = width);

        let mut result = if self.use_grouping {
            group_digits(&padded, self.locale.data.thousands_separator)
        } else {
            padded
        };

        if !fraction.is_empty() {
            result.push(self.locale.data.decimal_separator);
            result.push_str(fraction);
        }
        result
    }

    /// Add the sign and any percent or currency decoration.
    fn decorate(&self, negative: bool, number: String) -> String {
        let sign = if negative { "-" } else { "" };
        let data = self.locale.data;

        match self.style {
            NumberStyle::Decimal => format!("{}{}", sign, number),
            NumberStyle::Percent => format!("{}{}{}", sign, number, data.percent_suffix),
            NumberStyle::Currency => {
                let code = self.currency.as_deref().unwrap_or_default();
                let symbol = match self.currency_display {
                    CurrencyDisplay::Symbol => currency_symbol(code),
                    CurrencyDisplay::Code => code,
                };
                let is_code = symbol.chars().all(|c| c.is_ascii_alphabetic());
                let spacer = if data.currency_after || is_code {
                    "\u{a0}"
                } else {
                    ""
                };
                if data.currency_after {
                    format!("{}{}{}{}", sign, number, spacer, symbol)
                } else {
                    format!("{}{}{}{}", sign, symbol, spacer, number)
                }
            }
        }
    }
}

/// Round half away from zero to `places` decimals and split into digit strings.
fn split_rounded(value: f64, places: u32) -> (String, String) {
    let multiplier = 10_f64.powi(places as i32);
    let scaled = (value * multiplier).round();

    if places <= 15 && scaled < MAX_EXACT {
        let scaled = scaled as u64;
        let divisor = 10_u64.pow(places);
        let integer = (scaled / divisor).to_string();
        let fraction = if places > 0 {
            format!("{:0>width$}", scaled % divisor, width = places as usize)
        } else {
            String::new()
        };
        return (integer, fraction);
    }

    // Too large for exact integer arithmetic; let the float formatter round.
    let formatted = format!("{:.*}", places as usize, value);
    match formatted.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (formatted, String::new()),
    }
}

/// Drop trailing zeros but keep at least `min` digits.
fn trim_fraction(fraction: &str, min: u32) -> String {
    let trimmed = fraction.trim_end_matches('0');
    if trimmed.len() >= min as usize {
        trimmed.to_string()
    } else {
        fraction[..min as usize].to_string()
    }
}

/// Insert a separator every three digits, counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

fn currency_digits(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" | "CLP" | "ISK" | "VND" => 0,
        "BHD" | "KWD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}

fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        other => other,
    }
}
