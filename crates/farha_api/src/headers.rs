use std::collections::BTreeMap;

use crate::config::FarhaApiConfig;
use crate::error::FarhaApiError;

pub const HEADER_ACCEPT: &str = "accept";
pub const HEADER_CONTENT_TYPE: &str = "content-type";
pub const HEADER_AUTHORIZATION: &str = "authorization";
pub const HEADER_USER_AGENT: &str = "user-agent";

/// Build a deterministic header map for backend requests.
///
/// The bearer credential is attached only when one is supplied; the session
/// exchange is the sole unauthenticated operation.
pub fn build_headers(
    config: &FarhaApiConfig,
    bearer: Option<&str>,
) -> Result<BTreeMap<String, String>, FarhaApiError> {
    let mut headers = BTreeMap::new();

    headers.insert(HEADER_ACCEPT.to_owned(), "application/json".to_owned());
    headers.insert(
        HEADER_CONTENT_TYPE.to_owned(),
        "application/json".to_owned(),
    );

    let ua = match config.user_agent.as_deref() {
        Some(explicit) if !explicit.trim().is_empty() => explicit.trim().to_owned(),
        _ => default_user_agent(),
    };
    headers.insert(HEADER_USER_AGENT.to_owned(), ua);

    for (key, value) in &config.extra_headers {
        headers.insert(key.trim().to_ascii_lowercase(), value.trim().to_owned());
    }

    if let Some(token) = bearer {
        if token.trim().is_empty() {
            return Err(FarhaApiError::MissingCredential);
        }
        headers.insert(
            HEADER_AUTHORIZATION.to_owned(),
            format!("Bearer {}", token.trim()),
        );
    }

    Ok(headers)
}

fn default_user_agent() -> String {
    format!(
        "farha ({}; {})",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
