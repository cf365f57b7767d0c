//! Built-in locale-sensitive formatters.
//!
//! These back the default constructor set of a
//! [`FormatterBundle`](crate::factory::FormatterBundle). The cache treats them
//! as opaque values; hosts can swap any of them out through
//! [`Constructors`](crate::factory::Constructors).

#[cfg(feature = "chrono")]
mod date;
mod list;
mod number;
mod plural;
mod relative;

#[cfg(feature = "chrono")]
pub use date::{DateTimeFormat, MonthStyle, TextWidth, Width};
pub use list::{ListFormat, ListStyle, ListType};
pub use number::{CurrencyDisplay, NumberFormat, NumberStyle};
pub use plural::{PluralCategory, PluralRules, PluralType};
pub use relative::{Numeric, RelativeTimeFormat, TimeUnit};

/// Stand-in for the date-time formatter when the `chrono` feature is off.
///
/// It has no values, so the date-time sub-cache stays empty and the built-in
/// constructor set has no date-time entry.
#[cfg(not(feature = "chrono"))]
#[derive(Debug, Clone)]
pub enum DateTimeFormat {}
