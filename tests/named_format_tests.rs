use intlfmt::{resolve_named_format, CustomFormats, FormatType};
use serde_json::json;

#[test]
fn test_miss_reports_once_and_returns_none() {
    let formats: CustomFormats = serde_json::from_value(json!({"number": {}})).unwrap();
    let mut messages = Vec::new();

    let result = resolve_named_format(&formats, FormatType::Number, "USD", &mut |message| {
        messages.push(message.to_string())
    });

    assert!(result.is_none());
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("number"));
    assert!(messages[0].contains("USD"));
}

#[test]
fn test_hit_returns_preset_without_reporting() {
    let formats: CustomFormats =
        serde_json::from_value(json!({"number": {"USD": {"style": "currency"}}})).unwrap();
    let mut calls = 0;

    let result = resolve_named_format(&formats, FormatType::Number, "USD", &mut |_| calls += 1);

    assert_eq!(result, json!({"style": "currency"}).as_object());
    assert_eq!(calls, 0);
}

#[test]
fn test_missing_type_is_a_miss() {
    let formats = CustomFormats::new();
    let mut messages = Vec::new();

    let result = resolve_named_format(&formats, FormatType::Date, "short", &mut |message| {
        messages.push(message.to_string())
    });

    assert!(result.is_none());
    assert_eq!(messages, vec!["[intlfmt] No date format named: short".to_string()]);
}

#[test]
fn test_falsy_entry_is_a_miss() {
    let formats: CustomFormats =
        serde_json::from_value(json!({"relative": {"compact": false}})).unwrap();
    let mut calls = 0;

    let result =
        resolve_named_format(&formats, FormatType::Relative, "compact", &mut |_| calls += 1);

    assert!(result.is_none());
    assert_eq!(calls, 1);
}
