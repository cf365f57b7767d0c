//! intlfmt - memoized locale-aware formatters
//!
//! Building a locale-sensitive formatter means resolving the locale and its
//! options against locale data, which is costly compared to using one. This
//! crate caches formatters per kind (date-time, number, message, relative
//! time, plural rules, list) in an explicit [`CacheStore`], so that identical
//! requests share one instance for as long as the store lives.
//!
//! ```
//! use intlfmt::{create_formatters, Options};
//!
//! let formatters = create_formatters(None);
//! let a = formatters.get_number_format("en", &Options::new()).unwrap();
//! let b = formatters.get_number_format("en", &Options::new()).unwrap();
//! assert!(std::rc::Rc::ptr_eq(&a, &b));
//! assert_eq!(a.format(1234.5), "1,234.5");
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod factory;
pub mod formatter;
pub mod kind;
pub mod locale;
pub mod message;
pub mod named;
pub mod options;
pub mod utils;

pub use cache::{create_cache_store, CacheStore, SubCache};
pub use config::{ErrorHandler, IntlConfig, IntlContext};
pub use error::{IntlError, MessageError};
pub use factory::{create_formatters, Constructor, Constructors, FormatterBundle, Memoizable};
pub use formatter::{
    DateTimeFormat, ListFormat, NumberFormat, PluralCategory, PluralRules, RelativeTimeFormat,
    TimeUnit,
};
pub use kind::FormatterKind;
pub use locale::LocaleId;
pub use message::MessageFormat;
pub use named::{resolve_named_format, CustomFormats, FormatType};
pub use options::{CacheKey, FormatArgs, Locales, MessageArgs, Options};
pub use utils::{create_error, default_error_handler, escape, filter_props, invariant_intl_context};
