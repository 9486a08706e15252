use super::*;
use serde_json::json;

#[test]
fn is_success_covers_2xx_only() {
    let ok = ApiResponse { status: 204, body: serde_json::Value::Null };
    let redirect = ApiResponse { status: 302, body: serde_json::Value::Null };
    let unauthorized = ApiResponse { status: 401, body: serde_json::Value::Null };
    assert!(ok.is_success());
    assert!(!redirect.is_success());
    assert!(!unauthorized.is_success());
}

#[test]
fn decode_body_handles_empty_json_and_text() {
    assert_eq!(decode_body("  "), serde_json::Value::Null);
    assert_eq!(decode_body(r#"{"message":"nope"}"#), json!({ "message": "nope" }));
    assert_eq!(decode_body("Bad Gateway"), json!("Bad Gateway"));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn browser_transport_is_unavailable_off_browser() {
    let request = ApiRequest {
        method: Method::Get,
        url: "/admin/me".to_owned(),
        authorization: None,
        body: None,
    };
    let err = BrowserTransport.send(request).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
