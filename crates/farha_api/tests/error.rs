use assistant_provider::ApiError;
use farha_api::error::parse_error_message;
use farha_api::FarhaApiError;
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn detail_string_is_surfaced_directly() {
    let body = json!({ "detail": "Invalid or expired session" }).to_string();
    assert_eq!(
        parse_error_message(StatusCode::UNAUTHORIZED, &body),
        "Invalid or expired session"
    );
}

#[test]
fn structured_detail_is_surfaced_as_json() {
    let body = json!({
        "detail": [{ "loc": ["body", "message"], "msg": "field required" }]
    })
    .to_string();

    let message = parse_error_message(StatusCode::UNPROCESSABLE_ENTITY, &body);
    assert!(message.contains("field required"));
}

#[test]
fn non_json_body_is_surfaced_raw() {
    assert_eq!(
        parse_error_message(StatusCode::BAD_GATEWAY, "upstream exploded"),
        "upstream exploded"
    );
}

#[test]
fn empty_body_falls_back_to_the_canonical_reason() {
    assert_eq!(
        parse_error_message(StatusCode::NOT_FOUND, ""),
        "Not Found"
    );
}

#[test]
fn blank_detail_falls_back_to_the_raw_body() {
    let body = json!({ "detail": "  " }).to_string();
    assert_eq!(parse_error_message(StatusCode::BAD_REQUEST, &body), body);
}

#[test]
fn status_errors_keep_their_status_across_the_contract_boundary() {
    let error = FarhaApiError::Status(StatusCode::UNAUTHORIZED, "Invalid session".to_string());
    let contract = ApiError::from(error);

    assert_eq!(contract.status(), Some(401));
    assert_eq!(contract.message(), "Invalid session");
}

#[test]
fn transport_errors_map_to_statusless_contract_errors() {
    let contract = ApiError::from(FarhaApiError::MissingCredential);

    assert_eq!(contract.status(), None);
    assert_eq!(contract.message(), "bearer credential is required");
}

#[test]
fn status_error_display_includes_status_and_message() {
    let error = FarhaApiError::Status(StatusCode::UNAUTHORIZED, "Invalid session".to_string());
    assert_eq!(error.to_string(), "HTTP 401 Unauthorized Invalid session");
}
