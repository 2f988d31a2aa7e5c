use farha_api::{normalize_api_url, operation_url, DEFAULT_API_BASE_URL};

#[test]
fn empty_input_falls_back_to_default_base_url() {
    assert_eq!(normalize_api_url(""), DEFAULT_API_BASE_URL);
    assert_eq!(normalize_api_url("   "), DEFAULT_API_BASE_URL);
}

#[test]
fn existing_api_segment_is_kept() {
    assert_eq!(
        normalize_api_url("https://farha.example.com/api"),
        "https://farha.example.com/api"
    );
}

#[test]
fn api_segment_is_appended_when_missing() {
    assert_eq!(
        normalize_api_url("https://farha.example.com"),
        "https://farha.example.com/api"
    );
}

#[test]
fn trailing_slashes_are_stripped_before_normalization() {
    assert_eq!(
        normalize_api_url("https://farha.example.com/"),
        "https://farha.example.com/api"
    );
    assert_eq!(
        normalize_api_url("https://farha.example.com/api/"),
        "https://farha.example.com/api"
    );
}

#[test]
fn operation_url_joins_paths_onto_the_api_root() {
    assert_eq!(
        operation_url("https://farha.example.com", "auth/session"),
        "https://farha.example.com/api/auth/session"
    );
    assert_eq!(
        operation_url("https://farha.example.com/api", "/chat/history"),
        "https://farha.example.com/api/chat/history"
    );
}
