use std::rc::Rc;

use intlfmt::factory::kinds;
use intlfmt::{
    Constructors, FormatArgs, FormatterBundle, FormatterKind, IntlError, Locales, Options,
};
use serde_json::{json, Value};

fn opts(value: Value) -> Options {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn test_same_arguments_return_same_instance() {
    let formatters = FormatterBundle::default();
    let a = formatters
        .get_number_format("en", &opts(json!({"style": "percent", "maximumFractionDigits": 1})))
        .unwrap();
    let b = formatters
        .get_number_format("en", &opts(json!({"maximumFractionDigits": 1, "style": "percent"})))
        .unwrap();
    assert!(Rc::ptr_eq(&a, &b));
}

#[test]
fn test_different_option_values_get_different_slots() {
    let formatters = FormatterBundle::default();
    let two = formatters
        .get_number_format("en", &opts(json!({"maximumFractionDigits": 2})))
        .unwrap();
    let three = formatters
        .get_number_format("en", &opts(json!({"maximumFractionDigits": 3})))
        .unwrap();
    assert!(!Rc::ptr_eq(&two, &three));
    assert_eq!(formatters.store().len(FormatterKind::Number), 2);
    assert_eq!(two.format(1.23456), "1.23");
    assert_eq!(three.format(1.23456), "1.235");
}

#[test]
fn test_locale_lists_are_part_of_the_key() {
    let formatters = FormatterBundle::default();
    let single = formatters.get_list_format("de", &Options::new()).unwrap();
    let list = formatters
        .get_list_format(["de", "en"], &Options::new())
        .unwrap();
    assert!(!Rc::ptr_eq(&single, &list));

    let again = formatters
        .get_list_format(vec!["de", "en"], &Options::new())
        .unwrap();
    assert!(Rc::ptr_eq(&list, &again));
}

#[test]
fn test_every_getter_memoizes() {
    let formatters = FormatterBundle::default();
    let none = Options::new();

    let a = formatters.get_relative_time_format("en", &none).unwrap();
    let b = formatters.get_relative_time_format("en", &none).unwrap();
    assert!(Rc::ptr_eq(&a, &b));

    let a = formatters.get_plural_rules("en", &none).unwrap();
    let b = formatters.get_plural_rules("en", &none).unwrap();
    assert!(Rc::ptr_eq(&a, &b));

    let a = formatters.get_list_format("en", &none).unwrap();
    let b = formatters.get_list_format("en", &none).unwrap();
    assert!(Rc::ptr_eq(&a, &b));

    let a = formatters.get_message_format("Hi {name}", "en", &none).unwrap();
    let b = formatters.get_message_format("Hi {name}", "en", &none).unwrap();
    assert!(Rc::ptr_eq(&a, &b));

    #[cfg(feature = "chrono")]
    {
        let a = formatters.get_date_time_format("en", &none).unwrap();
        let b = formatters.get_date_time_format("en", &none).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }
}

#[test]
fn test_message_patterns_are_cached_separately() {
    let formatters = FormatterBundle::default();
    let hello = formatters.get_message_format("Hello", "en", &Options::new()).unwrap();
    let bye = formatters.get_message_format("Bye", "en", &Options::new()).unwrap();
    assert!(!Rc::ptr_eq(&hello, &bye));
    assert_eq!(bye.format(&Options::new()).unwrap(), "Bye");
}

#[test]
fn test_kinds_do_not_share_slots() {
    let formatters = FormatterBundle::default();
    formatters.get_plural_rules("en", &Options::new()).unwrap();
    formatters.get_list_format("en", &Options::new()).unwrap();
    assert_eq!(formatters.store().len(FormatterKind::PluralRules), 1);
    assert_eq!(formatters.store().len(FormatterKind::List), 1);
}

#[test]
fn test_missing_constructor_fails() {
    let constructors = Constructors::builtin().without(FormatterKind::List);
    assert!(!constructors.is_available(FormatterKind::List));

    let formatters = FormatterBundle::with_constructors(None, constructors);
    let err = formatters.get_list_format("en", &Options::new()).unwrap_err();
    assert_eq!(err, IntlError::ConstructorUnavailable(FormatterKind::List));
    assert_eq!(err.to_string(), "no constructor available for list formatters");

    // Other kinds are unaffected.
    assert!(formatters.get_number_format("en", &Options::new()).is_ok());
}

#[cfg(not(feature = "chrono"))]
#[test]
fn test_date_time_unavailable_without_chrono() {
    let formatters = FormatterBundle::default();
    assert_eq!(
        formatters
            .get_date_time_format("en", &Options::new())
            .unwrap_err(),
        IntlError::ConstructorUnavailable(FormatterKind::DateTime)
    );
}

#[test]
fn test_construction_errors_propagate() {
    let formatters = FormatterBundle::default();
    let err = formatters
        .get_number_format("en", &opts(json!({"style": "currency"})))
        .unwrap_err();
    assert!(matches!(err, IntlError::InvalidOption { option: "currency", .. }));
    assert!(formatters.store().is_empty());
}

#[test]
fn test_hit_does_not_revalidate() {
    let formatters = FormatterBundle::default();
    let first = formatters.get_number_format("en", &Options::new()).unwrap();

    // Swapping the constructor set does not matter for a key already cached.
    let no_ctors = FormatterBundle::with_constructors(
        Some(Rc::clone(formatters.store())),
        Constructors::empty(),
    );
    let second = no_ctors.get_number_format("en", &Options::new()).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}

#[test]
fn test_generic_getter() {
    let formatters = FormatterBundle::default();
    let args = FormatArgs::new(Locales::from("fr"), opts(json!({"type": "disjunction"})));
    let list = formatters.get::<kinds::List>(&args).unwrap();
    assert_eq!(list.format(&["thé", "café"]), "thé ou café");

    let same = formatters
        .get_list_format("fr", &opts(json!({"type": "disjunction"})))
        .unwrap();
    assert!(Rc::ptr_eq(&list, &same));
}
