use super::*;

#[test]
fn serialization_error_converts_from_serde_json() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json").expect_err("should fail");
    let err: SessionError = parse.into();
    assert!(matches!(err, SessionError::Serialization(_)));
    assert!(err.to_string().starts_with("session payload is not valid JSON"));
}

#[test]
fn storage_error_message_includes_reason() {
    let err = SessionError::storage("quota exceeded");
    assert_eq!(err.to_string(), "session storage unavailable: quota exceeded");
}

#[test]
fn environment_error_message_includes_reason() {
    let err = SessionError::environment("no window");
    assert_eq!(err.to_string(), "browser environment unavailable: no window");
}
