use intlfmt::{FormatterKind, IntlError, MessageError};

#[test]
fn test_message_error_display() {
    let err = MessageError::UnexpectedChar {
        position: 5,
        found: 'x',
    };
    let msg = format!("{}", err);
    assert!(msg.contains("position 5"));
    assert!(msg.contains("'x'"));
}

#[test]
fn test_message_error_converts() {
    let err: IntlError = MessageError::UnterminatedArgument { position: 2 }.into();
    assert_eq!(
        err.to_string(),
        "unterminated argument starting at position 2"
    );
}

#[test]
fn test_invalid_option_display() {
    let err = IntlError::InvalidOption {
        option: "style",
        value: "\"fancy\"".to_string(),
    };
    assert_eq!(err.to_string(), "invalid value \"fancy\" for option 'style'");
}

#[test]
fn test_constructor_unavailable_names_kind() {
    let err = IntlError::ConstructorUnavailable(FormatterKind::RelativeTime);
    assert!(err.to_string().contains("relative-time"));
}
