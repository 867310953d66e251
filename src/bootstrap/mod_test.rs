use super::*;

#[test]
fn no_bootstrap_never_has_text() {
    let source = NoBootstrap;
    assert_eq!(source.read().expect("read"), None);
    source.consume().expect("consume");
    assert_eq!(source.read().expect("read"), None);
}

#[test]
fn static_bootstrap_reads_until_consumed() {
    let source = StaticBootstrap::new(r#"{"session":{}}"#);
    assert!(source.is_pending());
    assert_eq!(source.read().expect("read").as_deref(), Some(r#"{"session":{}}"#));
    // Reading alone does not consume.
    assert!(source.is_pending());

    source.consume().expect("consume");
    assert!(!source.is_pending());
    assert_eq!(source.read().expect("read"), None);
}

#[test]
fn payload_extracts_session_field() {
    let payload = BootstrapPayload::parse(r#"{"session":{"token":"abc"},"other":1}"#).expect("parse");
    assert_eq!(payload.session, serde_json::json!({"token": "abc"}));
}

#[test]
fn payload_accepts_null_session() {
    let payload = BootstrapPayload::parse(r#"{"session":null}"#).expect("parse");
    assert!(payload.session.is_null());
}

#[test]
fn payload_without_session_field_is_rejected() {
    let err = BootstrapPayload::parse(r#"{"token":"abc"}"#).expect_err("missing field");
    assert!(matches!(err, SessionError::Serialization(_)));
}

#[test]
fn payload_rejects_malformed_text() {
    let err = BootstrapPayload::parse("<html>").expect_err("not json");
    assert!(matches!(err, SessionError::Serialization(_)));
}
