use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use assistant_provider::{
    ApiError, AssistantApi, ChatReply, HistoryRecord, SessionGrant, UserProfile,
};

use crate::config::FarhaApiConfig;
use crate::error::{parse_error_message, FarhaApiError};
use crate::headers::build_headers;
use crate::payload::{ChatSendRequest, SessionExchangeRequest};
use crate::url::operation_url;

pub const PATH_AUTH_SESSION: &str = "auth/session";
pub const PATH_AUTH_LOGOUT: &str = "auth/logout";
pub const PATH_USER_PROFILE: &str = "user/profile";
pub const PATH_CHAT: &str = "chat";
pub const PATH_CHAT_HISTORY: &str = "chat/history";

#[derive(Debug)]
pub struct FarhaApiClient {
    http: Client,
    config: FarhaApiConfig,
}

impl FarhaApiClient {
    pub fn new(config: FarhaApiConfig) -> Result<Self, FarhaApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(FarhaApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FarhaApiConfig {
        &self.config
    }

    pub fn operation_endpoint(&self, path: &str) -> String {
        operation_url(&self.config.base_url, path)
    }

    pub fn build_headers(&self, bearer: Option<&str>) -> Result<HeaderMap, FarhaApiError> {
        let headers = build_headers(&self.config, bearer)?;
        let mut out = HeaderMap::new();
        for (key, value) in headers {
            out.insert(
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                    FarhaApiError::InvalidHeader(format!("invalid header key: {key}"))
                })?,
                HeaderValue::from_str(&value).map_err(|_| {
                    FarhaApiError::InvalidHeader(format!("invalid header value for {key}"))
                })?,
            );
        }
        Ok(out)
    }

    pub fn exchange_session_request(
        &self,
        session_id: &str,
    ) -> Result<RequestBuilder, FarhaApiError> {
        let headers = self.build_headers(None)?;
        Ok(self
            .http
            .post(self.operation_endpoint(PATH_AUTH_SESSION))
            .headers(headers)
            .json(&SessionExchangeRequest {
                session_id: session_id.to_owned(),
            }))
    }

    pub fn verify_profile_request(&self, credential: &str) -> Result<RequestBuilder, FarhaApiError> {
        let headers = self.build_headers(Some(credential))?;
        Ok(self
            .http
            .get(self.operation_endpoint(PATH_USER_PROFILE))
            .headers(headers))
    }

    pub fn load_history_request(&self, credential: &str) -> Result<RequestBuilder, FarhaApiError> {
        let headers = self.build_headers(Some(credential))?;
        Ok(self
            .http
            .get(self.operation_endpoint(PATH_CHAT_HISTORY))
            .headers(headers))
    }

    pub fn send_chat_request(
        &self,
        credential: &str,
        message: &str,
    ) -> Result<RequestBuilder, FarhaApiError> {
        let headers = self.build_headers(Some(credential))?;
        Ok(self
            .http
            .post(self.operation_endpoint(PATH_CHAT))
            .headers(headers)
            .json(&ChatSendRequest {
                message: message.to_owned(),
            }))
    }

    pub fn logout_request(&self, credential: &str) -> Result<RequestBuilder, FarhaApiError> {
        let headers = self.build_headers(Some(credential))?;
        Ok(self
            .http
            .post(self.operation_endpoint(PATH_AUTH_LOGOUT))
            .headers(headers))
    }

    pub async fn exchange_session(&self, session_id: &str) -> Result<SessionGrant, FarhaApiError> {
        self.execute(self.exchange_session_request(session_id)?)
            .await
    }

    pub async fn verify_profile(&self, credential: &str) -> Result<UserProfile, FarhaApiError> {
        self.execute(self.verify_profile_request(credential)?).await
    }

    pub async fn load_history(&self, credential: &str) -> Result<Vec<HistoryRecord>, FarhaApiError> {
        self.execute(self.load_history_request(credential)?).await
    }

    pub async fn send_chat(
        &self,
        credential: &str,
        message: &str,
    ) -> Result<ChatReply, FarhaApiError> {
        self.execute(self.send_chat_request(credential, message)?)
            .await
    }

    pub async fn logout(&self, credential: &str) -> Result<(), FarhaApiError> {
        self.execute_raw(self.logout_request(credential)?)
            .await
            .map(|_| ())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, FarhaApiError> {
        let body = self.execute_raw(request).await?;
        serde_json::from_str(&body).map_err(FarhaApiError::from)
    }

    async fn execute_raw(&self, request: RequestBuilder) -> Result<String, FarhaApiError> {
        let response = request.send().await.map_err(FarhaApiError::from)?;
        let status = response.status();

        if status.is_success() {
            return response.text().await.map_err(FarhaApiError::from);
        }

        let body = response.text().await.unwrap_or_default();
        Err(FarhaApiError::Status(
            status,
            parse_error_message(status, &body),
        ))
    }
}

#[async_trait]
impl AssistantApi for FarhaApiClient {
    async fn exchange_session(&self, session_id: &str) -> Result<SessionGrant, ApiError> {
        FarhaApiClient::exchange_session(self, session_id)
            .await
            .map_err(ApiError::from)
    }

    async fn verify_profile(&self, credential: &str) -> Result<UserProfile, ApiError> {
        FarhaApiClient::verify_profile(self, credential)
            .await
            .map_err(ApiError::from)
    }

    async fn load_history(&self, credential: &str) -> Result<Vec<HistoryRecord>, ApiError> {
        FarhaApiClient::load_history(self, credential)
            .await
            .map_err(ApiError::from)
    }

    async fn send_chat(&self, credential: &str, message: &str) -> Result<ChatReply, ApiError> {
        FarhaApiClient::send_chat(self, credential, message)
            .await
            .map_err(ApiError::from)
    }

    async fn logout(&self, credential: &str) -> Result<(), ApiError> {
        FarhaApiClient::logout(self, credential)
            .await
            .map_err(ApiError::from)
    }
}
