use farha_api::client::{
    PATH_AUTH_LOGOUT, PATH_AUTH_SESSION, PATH_CHAT, PATH_CHAT_HISTORY, PATH_USER_PROFILE,
};
use farha_api::{operation_url, FarhaApiClient, FarhaApiConfig};
use serde_json::{json, Value};

const BASE_URL: &str = "https://farha.example.com/api";

fn client() -> FarhaApiClient {
    FarhaApiClient::new(FarhaApiConfig::new(BASE_URL)).expect("client should build")
}

fn body_json(request: &reqwest::Request) -> Value {
    let bytes = request
        .body()
        .and_then(|body| body.as_bytes())
        .expect("request should carry an inline body");
    serde_json::from_slice(bytes).expect("request body should be JSON")
}

#[test]
fn exchange_session_posts_without_a_bearer() {
    let client = client();
    let request = client
        .exchange_session_request("one-time-id")
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(request.method(), "POST");
    assert_eq!(
        request.url().as_str(),
        operation_url(BASE_URL, PATH_AUTH_SESSION)
    );
    assert!(request.headers().get("authorization").is_none());
    assert_eq!(body_json(&request), json!({ "session_id": "one-time-id" }));
}

#[test]
fn verify_profile_gets_with_a_bearer() {
    let client = client();
    let request = client
        .verify_profile_request("token-1")
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.url().as_str(),
        operation_url(BASE_URL, PATH_USER_PROFILE)
    );
    assert_eq!(
        request
            .headers()
            .get("authorization")
            .and_then(|value| value.to_str().ok()),
        Some("Bearer token-1")
    );
}

#[test]
fn load_history_gets_the_history_endpoint() {
    let client = client();
    let request = client
        .load_history_request("token-1")
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.url().as_str(),
        operation_url(BASE_URL, PATH_CHAT_HISTORY)
    );
}

#[test]
fn send_chat_posts_the_message_payload() {
    let client = client();
    let request = client
        .send_chat_request("token-1", "hello farha")
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(request.method(), "POST");
    assert_eq!(request.url().as_str(), operation_url(BASE_URL, PATH_CHAT));
    assert_eq!(body_json(&request), json!({ "message": "hello farha" }));
}

#[test]
fn logout_posts_with_a_bearer_and_no_body() {
    let client = client();
    let request = client
        .logout_request("token-1")
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(request.method(), "POST");
    assert_eq!(
        request.url().as_str(),
        operation_url(BASE_URL, PATH_AUTH_LOGOUT)
    );
    assert!(request.body().is_none());
    assert_eq!(
        request
            .headers()
            .get("authorization")
            .and_then(|value| value.to_str().ok()),
        Some("Bearer token-1")
    );
}

#[test]
fn blank_credential_fails_request_building() {
    let client = client();

    assert!(client.verify_profile_request(" ").is_err());
    assert!(client.send_chat_request("", "hello").is_err());
}
