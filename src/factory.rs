//! Memoizing formatter factory.
//!
//! A [`FormatterBundle`] pairs a [`CacheStore`] with one constructor per
//! formatter kind and exposes a get-or-create getter for each kind. Calls whose
//! arguments derive the same cache key return the same `Rc` instance.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::cache::{CacheStore, SubCache};
use crate::error::IntlError;
use crate::formatter::{
    DateTimeFormat, ListFormat, NumberFormat, PluralRules, RelativeTimeFormat,
};
use crate::kind::FormatterKind;
use crate::message::MessageFormat;
use crate::options::{CacheKey, FormatArgs, Locales, MessageArgs, Options};

/// Builds a formatter from its constructor arguments.
pub type Constructor<A, F> = Rc<dyn Fn(&A) -> Result<F, IntlError>>;

/// The constructor available for each formatter kind.
///
/// A missing entry models a host without that formatting primitive: the
/// matching getter fails with [`IntlError::ConstructorUnavailable`].
#[derive(Clone)]
pub struct Constructors {
    pub date_time: Option<Constructor<FormatArgs, DateTimeFormat>>,
    pub number: Option<Constructor<FormatArgs, NumberFormat>>,
    pub message: Option<Constructor<MessageArgs, MessageFormat>>,
    pub relative_time: Option<Constructor<FormatArgs, RelativeTimeFormat>>,
    pub plural_rules: Option<Constructor<FormatArgs, PluralRules>>,
    pub list: Option<Constructor<FormatArgs, ListFormat>>,
}

impl Constructors {
    /// The built-in formatters of this crate.
    pub fn builtin() -> Self {
        Constructors {
            date_time: builtin_date_time(),
            number: Some(Rc::new(|args: &FormatArgs| {
                NumberFormat::new(&args.locales, &args.options)
            })),
            message: Some(Rc::new(|args: &MessageArgs| {
                MessageFormat::new(&args.pattern, &args.locales, &args.formats)
            })),
            relative_time: Some(Rc::new(|args: &FormatArgs| {
                RelativeTimeFormat::new(&args.locales, &args.options)
            })),
            plural_rules: Some(Rc::new(|args: &FormatArgs| {
                PluralRules::new(&args.locales, &args.options)
            })),
            list: Some(Rc::new(|args: &FormatArgs| {
                ListFormat::new(&args.locales, &args.options)
            })),
        }
    }

    /// No constructors at all.
    pub fn empty() -> Self {
        Constructors {
            date_time: None,
            number: None,
            message: None,
            relative_time: None,
            plural_rules: None,
            list: None,
        }
    }

    /// Remove the constructor of one kind.
    pub fn without(mut self, kind: FormatterKind) -> Self {
        match kind {
            FormatterKind::DateTime => self.date_time = None,
            FormatterKind::Number => self.number = None,
            FormatterKind::Message => self.message = None,
            FormatterKind::RelativeTime => self.relative_time = None,
            FormatterKind::PluralRules => self.plural_rules = None,
            FormatterKind::List => self.list = None,
        }
        self
    }

    pub fn is_available(&self, kind: FormatterKind) -> bool {
        match kind {
            FormatterKind::DateTime => self.date_time.is_some(),
            FormatterKind::Number => self.number.is_some(),
            FormatterKind::Message => self.message.is_some(),
            FormatterKind::RelativeTime => self.relative_time.is_some(),
            FormatterKind::PluralRules => self.plural_rules.is_some(),
            FormatterKind::List => self.list.is_some(),
        }
    }
}

#[cfg(feature = "chrono")]
fn builtin_date_time() -> Option<Constructor<FormatArgs, DateTimeFormat>> {
    Some(Rc::new(|args: &FormatArgs| {
        DateTimeFormat::new(&args.locales, &args.options)
    }))
}

#[cfg(not(feature = "chrono"))]
fn builtin_date_time() -> Option<Constructor<FormatArgs, DateTimeFormat>> {
    None
}

impl Default for Constructors {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Constructors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let available: Vec<&str> = FormatterKind::ALL
            .iter()
            .filter(|kind| self.is_available(**kind))
            .map(FormatterKind::name)
            .collect();
        f.debug_struct("Constructors")
            .field("available", &available)
            .finish()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Describes one formatter kind: its arguments, its formatter type, and
/// where its sub-cache and constructor live.
///
/// Implemented by the marker types in [`kinds`] only.
pub trait Memoizable: sealed::Sealed {
    const KIND: FormatterKind;
    type Args: CacheKey;
    type Formatter;

    fn sub_cache(store: &CacheStore) -> &SubCache<Self::Formatter>;

    fn constructor(
        constructors: &Constructors,
    ) -> Option<&Constructor<Self::Args, Self::Formatter>>;
}

/// Marker types naming each formatter kind, for [`FormatterBundle::get`].
pub mod kinds {
    pub struct DateTime;
    pub struct Number;
    pub struct Message;
    pub struct RelativeTime;
    pub struct PluralRules;
    pub struct List;
}

macro_rules! memoizable {
    ($marker:ident, $kind:ident, $args:ty, $formatter:ty, $field:ident) => {
        impl sealed::Sealed for kinds::$marker {}

        impl Memoizable for kinds::$marker {
            const KIND: FormatterKind = FormatterKind::$kind;
            type Args = $args;
            type Formatter = $formatter;

            fn sub_cache(store: &CacheStore) -> &SubCache<Self::Formatter> {
                &store.$field
            }

            fn constructor(
                constructors: &Constructors,
            ) -> Option<&Constructor<Self::Args, Self::Formatter>> {
                constructors.$field.as_ref()
            }
        }
    };
}

memoizable!(DateTime, DateTime, FormatArgs, DateTimeFormat, date_time);
memoizable!(Number, Number, FormatArgs, NumberFormat, number);
memoizable!(Message, Message, MessageArgs, MessageFormat, message);
memoizable!(RelativeTime, RelativeTime, FormatArgs, RelativeTimeFormat, relative_time);
memoizable!(PluralRules, PluralRules, FormatArgs, PluralRules, plural_rules);
memoizable!(List, List, FormatArgs, ListFormat, list);

/// Get-or-create getters for every formatter kind, backed by one store.
pub struct FormatterBundle {
    store: Rc<CacheStore>,
    constructors: Constructors,
}

impl FormatterBundle {
    /// Create a bundle over `store`, or over a fresh store when `None`.
    pub fn new(store: Option<Rc<CacheStore>>) -> Self {
        Self::with_constructors(store, Constructors::builtin())
    }

    /// Create a bundle with a host-provided constructor set.
    pub fn with_constructors(store: Option<Rc<CacheStore>>, constructors: Constructors) -> Self {
        FormatterBundle {
            store: store.unwrap_or_default(),
            constructors,
        }
    }

    /// The store backing this bundle.
    pub fn store(&self) -> &Rc<CacheStore> {
        &self.store
    }

    pub fn constructors(&self) -> &Constructors {
        &self.constructors
    }

    /// Return the cached formatter for `args`, constructing and caching it
    /// on a miss.
    ///
    /// A hit is returned without revalidating the arguments. A failed
    /// construction is propagated and leaves the cache untouched.
    pub fn get<K: Memoizable>(&self, args: &K::Args) -> Result<Rc<K::Formatter>, IntlError> {
        let key = args.cache_key();
        let cache = K::sub_cache(&self.store);

        if let Some(formatter) = cache.get(&key) {
            trace!(kind = %K::KIND, key = %key, "formatter cache hit");
            return Ok(formatter);
        }

        let constructor = match K::constructor(&self.constructors) {
            Some(constructor) => constructor,
            None => {
                warn!(kind = %K::KIND, "no constructor available");
                return Err(IntlError::ConstructorUnavailable(K::KIND));
            }
        };

        debug!(kind = %K::KIND, key = %key, "formatter cache miss, constructing");
        let formatter = constructor(args)?;
        Ok(cache.insert(key, Rc::new(formatter)))
    }

    pub fn get_date_time_format(
        &self,
        locales: impl Into<Locales>,
        options: &Options,
    ) -> Result<Rc<DateTimeFormat>, IntlError> {
        self.get::<kinds::DateTime>(&FormatArgs::new(locales, options.clone()))
    }

    pub fn get_number_format(
        &self,
        locales: impl Into<Locales>,
        options: &Options,
    ) -> Result<Rc<NumberFormat>, IntlError> {
        self.get::<kinds::Number>(&FormatArgs::new(locales, options.clone()))
    }

    pub fn get_message_format(
        &self,
        pattern: &str,
        locales: impl Into<Locales>,
        formats: &Options,
    ) -> Result<Rc<MessageFormat>, IntlError> {
        self.get::<kinds::Message>(&MessageArgs::new(pattern, locales, formats.clone()))
    }

    pub fn get_relative_time_format(
        &self,
        locales: impl Into<Locales>,
        options: &Options,
    ) -> Result<Rc<RelativeTimeFormat>, IntlError> {
        self.get::<kinds::RelativeTime>(&FormatArgs::new(locales, options.clone()))
    }

    pub fn get_plural_rules(
        &self,
        locales: impl Into<Locales>,
        options: &Options,
    ) -> Result<Rc<PluralRules>, IntlError> {
        self.get::<kinds::PluralRules>(&FormatArgs::new(locales, options.clone()))
    }

    pub fn get_list_format(
        &self,
        locales: impl Into<Locales>,
        options: &Options,
    ) -> Result<Rc<ListFormat>, IntlError> {
        self.get::<kinds::List>(&FormatArgs::new(locales, options.clone()))
    }
}

impl Default for FormatterBundle {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for FormatterBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterBundle")
            .field("store", &self.store)
            .field("constructors", &self.constructors)
            .finish()
    }
}

/// Create the getter bundle over `store`, or over a fresh store when `None`.
pub fn create_formatters(store: Option<Rc<CacheStore>>) -> FormatterBundle {
    FormatterBundle::new(store)
}
