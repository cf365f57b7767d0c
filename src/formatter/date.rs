//! Date and time formatting

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::IntlError;
use crate::locale::{self, DateOrder, LocaleData, LocaleId, ResolvedLocale};
use crate::options::{get_bool, get_str, Locales, Options};

/// Width of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Numeric,
    TwoDigit,
}

/// How the month is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Numeric,
    TwoDigit,
    Narrow,
    Short,
    Long,
}

/// Width of a textual field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWidth {
    Narrow,
    Short,
    Long,
}

/// Time zones the formatter accepts. Values are formatted as given.
const UTC_ZONES: [&str; 3] = ["UTC", "Etc/UTC", "GMT"];

/// Formats calendar dates and wall-clock times.
#[derive(Debug, Clone)]
pub struct DateTimeFormat {
    locale: ResolvedLocale,
    weekday: Option<TextWidth>,
    year: Option<Width>,
    month: Option<MonthStyle>,
    day: Option<Width>,
    hour: Option<Width>,
    minute: Option<Width>,
    second: Option<Width>,
    hour12: bool,
}

impl DateTimeFormat {
    /// Build a formatter.
    ///
    /// Recognized options: `weekday`, `year`, `month`, `day`, `hour`,
    /// `minute`, `second`, `hour12` and `timeZone`. When no field is
    /// requested the numeric year, month and day are shown.
    pub fn new(locales: &Locales, options: &Options) -> Result<Self, IntlError> {
        let locale = locale::resolve(locales)?;

        if let Some(zone) = get_str(options, "timeZone", &[])? {
            if !UTC_ZONES.contains(&zone) {
                return Err(IntlError::invalid_option("timeZone", zone));
            }
        }

        let weekday = match get_str(options, "weekday", &["narrow", "short", "long"])? {
            Some("narrow") => Some(TextWidth::Narrow),
            Some("short") => Some(TextWidth::Short),
            Some(_) => Some(TextWidth::Long),
            None => None,
        };
        let month = match get_str(
            options,
            "month",
            &["numeric", "2-digit", "narrow", "short", "long"],
        )? {
            Some("numeric") => Some(MonthStyle::Numeric),
            Some("2-digit") => Some(MonthStyle::TwoDigit),
            Some("narrow") => Some(MonthStyle::Narrow),
            Some("short") => Some(MonthStyle::Short),
            Some(_) => Some(MonthStyle::Long),
            None => None,
        };

        let mut format = DateTimeFormat {
            weekday,
            year: width(options, "year")?,
            month,
            day: width(options, "day")?,
            hour: width(options, "hour")?,
            minute: width(options, "minute")?,
            second: width(options, "second")?,
            hour12: get_bool(options, "hour12")?.unwrap_or(locale.data.hour12),
            locale,
        };

        let has_field = format.weekday.is_some()
            || format.year.is_some()
            || format.month.is_some()
            || format.day.is_some()
            || format.hour.is_some()
            || format.minute.is_some()
            || format.second.is_some();
        if !has_field {
            format.year = Some(Width::Numeric);
            format.month = Some(MonthStyle::Numeric);
            format.day = Some(Width::Numeric);
        }

        Ok(format)
    }

    pub fn locale(&self) -> &LocaleId {
        &self.locale.id
    }

    /// Format a date and time.
    pub fn format(&self, value: &NaiveDateTime) -> String {
        let data = self.locale.data;
        let date = self.format_date_fields(value, data);
        let time = self.format_time_fields(value, data);

        let mut fields = Vec::with_capacity(3);
        if let Some(width) = self.weekday {
            let index = value.weekday().num_days_from_sunday() as usize;
            fields.push(match width {
                TextWidth::Long => data.day_names_full[index].to_string(),
                TextWidth::Short => data.day_names_short[index].to_string(),
                TextWidth::Narrow => initial(data.day_names_full[index]),
            });
        }
        fields.extend(date);
        fields.extend(time);
        fields.join(data.field_joiner)
    }

    /// Format a date at midnight.
    pub fn format_date(&self, value: &NaiveDate) -> String {
        self.format(&value.and_time(NaiveTime::MIN))
    }

    fn format_date_fields(&self, value: &NaiveDateTime, data: &LocaleData) -> Option<String> {
        let year = self.year.map(|width| match width {
            Width::Numeric => value.year().to_string(),
            Width::TwoDigit => format!("{:02}", value.year().rem_euclid(100)),
        });
        let day = self
            .day
            .map(|width| pad(value.day(), width == Width::TwoDigit || data.pad_date));

        let full = data.month_names_full[value.month0() as usize];
        let short = data.month_names_short[value.month0() as usize];
        let month = match self.month {
            Some(MonthStyle::Narrow) => return Some(textual_date(data, &initial(full), day, year)),
            Some(MonthStyle::Short) => return Some(textual_date(data, short, day, year)),
            Some(MonthStyle::Long) => return Some(textual_date(data, full, day, year)),
            Some(MonthStyle::Numeric) => Some(pad(value.month(), data.pad_date)),
            Some(MonthStyle::TwoDigit) => Some(pad(value.month(), true)),
            None => None,
        };

        let ordered = match data.date_order {
            DateOrder::MonthDayYear => [month, day, year],
            DateOrder::DayMonthYear => [day, month, year],
        };
        let fields: Vec<String> = ordered.into_iter().flatten().collect();
        if fields.is_empty() {
            return None;
        }
        Some(fields.join(&data.date_separator.to_string()))
    }

    fn format_time_fields(&self, value: &NaiveDateTime, data: &LocaleData) -> Option<String> {
        let mut fields = Vec::with_capacity(3);
        if let Some(width) = self.hour {
            let hour = if self.hour12 {
                to_12_hour(value.hour())
            } else {
                value.hour()
            };
            fields.push(pad(hour, width == Width::TwoDigit || !self.hour12));
        }
        if let Some(width) = self.minute {
            fields.push(pad(value.minute(), width == Width::TwoDigit || self.hour.is_some()));
        }
        if let Some(width) = self.second {
            fields.push(pad(value.second(), width == Width::TwoDigit || !fields.is_empty()));
        }
        if fields.is_empty() {
            return None;
        }

        let mut time = fields.join(":");
        if self.hour12 && self.hour.is_some() {
            time.push(' ');
            time.push_str(if value.hour() >= 12 {
                data.pm_string
            } else {
                data.am_string
            });
        }
        Some(time)
    }
}

fn width(options: &Options, name: &'static str) -> Result<Option<Width>, IntlError> {
    Ok(match get_str(options, name, &["numeric", "2-digit"])? {
        Some("2-digit") => Some(Width::TwoDigit),
        Some(_) => Some(Width::Numeric),
        None => None,
    })
}

/// Assemble a date whose month is written as a word.
fn textual_date(
    data: &LocaleData,
    month: &str,
    day: Option<String>,
    year: Option<String>,
) -> String {
    let (day_joiner, year_joiner) = data.month_joiners;
    let mut result = String::new();
    match data.date_order {
        DateOrder::MonthDayYear => {
            result.push_str(month);
            if let Some(ref day) = day {
                result.push(' ');
                result.push_str(day);
            }
            if let Some(year) = year {
                result.push_str(if day.is_some() { year_joiner } else { " " });
                result.push_str(&year);
            }
        }
        DateOrder::DayMonthYear => {
            if let Some(day) = day {
                result.push_str(&day);
                result.push_str(day_joiner);
            }
            result.push_str(month);
            if let Some(year) = year {
                result.push_str(year_joiner);
                result.push_str(&year);
            }
        }
    }
    result
}

fn pad(value: u32, two_digit: bool) -> String {
    if two_digit {
        format!("{:02}", value)
    } else {
        value.to_string()
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dtf(locale: &str, options: serde_json::Value) -> DateTimeFormat {
        let options = options.as_object().cloned().unwrap_or_default();
        DateTimeFormat::new(&Locales::from(locale), &options).unwrap()
    }

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour(0), 12);
        assert_eq!(to_12_hour(1), 1);
        assert_eq!(to_12_hour(11), 11);
        assert_eq!(to_12_hour(12), 12);
        assert_eq!(to_12_hour(13), 1);
        assert_eq!(to_12_hour(23), 11);
    }

    #[test]
    fn test_default_numeric_date() {
        assert_eq!(dtf("en-US", json!({})).format(&sample()), "1/15/2024");
        assert_eq!(dtf("de", json!({})).format(&sample()), "15.1.2024");
        assert_eq!(dtf("fr", json!({})).format(&sample()), "15/01/2024");
    }

    #[test]
    fn test_long_dates() {
        let options = json!({
            "weekday": "long",
            "year": "numeric",
            "month": "long",
            "day": "numeric"
        });
        assert_eq!(
            dtf("en", options.clone()).format(&sample()),
            "Monday, January 15, 2024"
        );
        assert_eq!(
            dtf("de", options.clone()).format(&sample()),
            "Montag, 15. Januar 2024"
        );
        assert_eq!(
            dtf("es", options.clone()).format(&sample()),
            "lunes, 15 de enero de 2024"
        );
        assert_eq!(dtf("fr", options).format(&sample()), "lundi 15 janvier 2024");
    }

    #[test]
    fn test_short_month_without_day() {
        let options = json!({"year": "numeric", "month": "short"});
        assert_eq!(dtf("en", options).format(&sample()), "Jan 2024");
    }

    #[test]
    fn test_times() {
        let options = json!({"hour": "numeric", "minute": "numeric"});
        assert_eq!(dtf("en", options.clone()).format(&sample()), "2:05 PM");
        assert_eq!(dtf("de", options.clone()).format(&sample()), "14:05");

        let options = json!({
            "hour": "numeric",
            "minute": "numeric",
            "second": "numeric",
            "hour12": false
        });
        assert_eq!(dtf("en", options).format(&sample()), "14:05:09");
    }

    #[test]
    fn test_date_and_time() {
        let options = json!({
            "year": "numeric", "month": "numeric", "day": "numeric",
            "hour": "numeric", "minute": "2-digit"
        });
        assert_eq!(dtf("en", options.clone()).format(&sample()), "1/15/2024, 2:05 PM");
        assert_eq!(dtf("fr", options).format(&sample()), "15/01/2024 14:05");
    }

    #[test]
    fn test_two_digit_year() {
        let options = json!({"year": "2-digit", "month": "2-digit", "day": "2-digit"});
        assert_eq!(dtf("en", options).format(&sample()), "01/15/24");
    }

    #[test]
    fn test_format_date_midnight() {
        let options = json!({"hour": "numeric"});
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(dtf("en", options).format_date(&date), "12 AM");
    }

    #[test]
    fn test_time_zone_validation() {
        let utc = json!({"timeZone": "UTC"}).as_object().cloned().unwrap();
        assert!(DateTimeFormat::new(&Locales::from("en"), &utc).is_ok());

        let other = json!({"timeZone": "Europe/Paris"}).as_object().cloned().unwrap();
        assert_eq!(
            DateTimeFormat::new(&Locales::from("en"), &other).unwrap_err(),
            IntlError::InvalidOption {
                option: "timeZone",
                value: "Europe/Paris".to_string()
            }
        );
    }
}
