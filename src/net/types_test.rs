use super::*;
use serde_json::json;

#[test]
fn login_request_serializes_email_and_password() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.com", password: "x" }).unwrap();
    assert_eq!(body, json!({ "email": "a@b.com", "password": "x" }));
}

#[test]
fn login_envelope_deserializes_token_and_user() {
    let env: Envelope<LoginData> =
        serde_json::from_value(json!({ "data": { "token": "T1", "user": { "id": 1 } } })).unwrap();
    assert_eq!(env.data.token, "T1");
    assert_eq!(env.data.user, AdminUser(json!({ "id": 1 })));
}

#[test]
fn me_envelope_requires_user() {
    let missing = serde_json::from_value::<Envelope<MeData>>(json!({ "data": {} }));
    assert!(missing.is_err());
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_value(json!({ "errors": [] })).unwrap();
    assert!(body.message.is_none());
}

#[test]
fn display_name_prefers_name_then_email() {
    assert_eq!(AdminUser(json!({ "name": "Ada", "email": "a@b.com" })).display_name(), "Ada");
    assert_eq!(AdminUser(json!({ "email": "a@b.com" })).display_name(), "a@b.com");
    assert_eq!(AdminUser(json!({ "id": 1 })).display_name(), "");
}
