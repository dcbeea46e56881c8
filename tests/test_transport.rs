//! Unit tests for the response-decoding contract.

use craftshop_sdk::http::decode_response;
use craftshop_sdk::CraftshopError;

// ---------------------------------------------------------------------------
// Success paths
// ---------------------------------------------------------------------------

#[test]
fn ok_json_object_decodes() {
    let value = decode_response(200, r#"{ "id": 1 }"#).unwrap();
    assert_eq!(value["id"], 1);
}

#[test]
fn ok_json_array_decodes() {
    let value = decode_response(200, r#"[1, 2, 3]"#).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn created_status_counts_as_success() {
    let value = decode_response(201, r#"{ "id": 9 }"#).unwrap();
    assert_eq!(value["id"], 9);
}

#[test]
fn ok_empty_body_decodes_as_null() {
    // DELETE endpoints answer 2xx with no payload.
    assert!(decode_response(204, "").unwrap().is_null());
    assert!(decode_response(200, "  \n").unwrap().is_null());
}

// ---------------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------------

#[test]
fn error_status_surfaces_error_json_field() {
    let err = decode_response(409, r#"{ "error": "Stock insuficiente" }"#).unwrap_err();
    match err {
        CraftshopError::Api { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Stock insuficiente");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn error_status_with_json_but_no_error_field_surfaces_the_body() {
    let err = decode_response(400, r#"{ "detail": "bad" }"#).unwrap_err();
    match err {
        CraftshopError::Api { message, .. } => assert!(message.contains("detail")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn error_status_with_plain_text_surfaces_the_text() {
    let err = decode_response(500, "Internal Server Error").unwrap_err();
    match err {
        CraftshopError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn error_status_with_empty_body_reports_the_status() {
    let err = decode_response(503, "").unwrap_err();
    match err {
        CraftshopError::Api { message, .. } => assert_eq!(message, "HTTP 503"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ok_with_html_body_is_non_json() {
    // Misconfigured proxies answer 200 with an HTML page.
    let err = decode_response(200, "<html><body>login</body></html>").unwrap_err();
    match err {
        CraftshopError::NonJson { body } => assert!(body.contains("<html>")),
        other => panic!("unexpected error: {other}"),
    }
}
