/// Default base URL for backend requests.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Normalize a base URL to the backend API root.
///
/// Normalization rules:
/// 1) keep a trailing `/api` segment unchanged
/// 2) append `/api` otherwise
pub fn normalize_api_url(input: &str) -> String {
    let base = if input.trim().is_empty() {
        DEFAULT_API_BASE_URL
    } else {
        input.trim()
    };

    let trimmed = base.trim_end_matches('/');
    if trimmed.ends_with("/api") {
        return trimmed.to_string();
    }
    format!("{trimmed}/api")
}

/// Join an operation path onto the normalized API root.
pub fn operation_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        normalize_api_url(base),
        path.trim_start_matches('/')
    )
}
