use std::rc::Rc;

use intlfmt::{create_formatters, escape, IntlConfig, IntlContext, Options, TimeUnit};
use serde_json::{json, Value};

fn opts(value: Value) -> Options {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn test_render_escaped_notification() {
    let config: IntlConfig = serde_json::from_value(json!({
        "locale": "en-US",
        "messages": {
            "shared": "{owner} shared {count, plural, one {# file} other {# files}} with {people}"
        },
        "formats": {
            "number": {"compact": {"maximumFractionDigits": 0}}
        }
    }))
    .unwrap();
    let context = IntlContext::new(config, None);

    let people = context.list_format(&Options::new()).unwrap();
    let names = people.format(&["Ana", "Bo", "Cy"]);
    let text = context
        .format_message(
            "shared",
            &opts(json!({"owner": "<Dee>", "count": 3, "people": names})),
        )
        .unwrap();

    assert_eq!(text, "<Dee> shared 3 files with Ana, Bo, and Cy");
    assert_eq!(
        escape(&text),
        "&lt;Dee&gt; shared 3 files with Ana, Bo, and Cy"
    );
}

#[test]
fn test_repeated_formatting_reuses_instances() {
    let formatters = create_formatters(None);
    let options = opts(json!({"numeric": "auto"}));

    let rendered: Vec<String> = [-1.0, 0.0, 1.0, 2.0]
        .iter()
        .map(|&days| {
            formatters
                .get_relative_time_format("en", &options)
                .unwrap()
                .format(days, TimeUnit::Day)
        })
        .collect();

    assert_eq!(rendered, ["yesterday", "today", "tomorrow", "in 2 days"]);
    assert_eq!(formatters.store().total_len(), 1);

    let first = formatters.get_relative_time_format("en", &options).unwrap();
    let second = formatters
        .get_relative_time_format(vec!["en".to_string()], &options)
        .unwrap();
    assert!(Rc::ptr_eq(&first, &second));
}
