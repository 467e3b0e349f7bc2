//! HTTP client for the café backend API

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, StatusCode, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::ApiResponse;
use shared::client::{LoginResponse, UserInfo};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the backend
///
/// Clones share the bearer token, so a login through one clone
/// authenticates every service built from it.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token.clone())),
        })
    }

    /// Set the authentication token
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.set_token(Some(token.into()));
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.read().as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    /// Make a GET request with query parameters
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.post(self.url(path))).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.patch(self.url(path)).json(body)).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path))).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Success bodies are unwrapped from the [`ApiResponse`] envelope. An
    /// envelope without `data` is accepted when `T` can be built from
    /// `null` (unit, `Option`).
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = %status, body = %text, "Request failed");
            return Err(Self::status_error(status, &text));
        }

        if text.trim().is_empty() {
            return serde_json::from_value(Value::Null)
                .map_err(|_| ClientError::InvalidResponse("Empty response body".to_string()));
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&text)?;
        match envelope.into_result()? {
            Some(data) => Ok(data),
            None => serde_json::from_value(Value::Null)
                .map_err(|_| ClientError::InvalidResponse("Missing response data".to_string())),
        }
    }

    fn status_error(status: StatusCode, body: &str) -> ClientError {
        // Prefer the envelope message over the raw body
        let message = serde_json::from_str::<ApiResponse<Value>>(body)
            .ok()
            .map(|e| e.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::CONFLICT => ClientError::Conflict(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ => ClientError::Internal(message),
        }
    }

    // ========== Auth API ==========

    /// Login with username and password
    ///
    /// Credentials go as `multipart/form-data`; the returned access token is
    /// stored and sent on every following request.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let form = multipart::Form::new()
            .text("username", username.to_string())
            .text("password", password.to_string());

        let login: LoginResponse = self
            .send(self.client.post(self.url("api/auth/login")).multipart(form))
            .await?;

        self.set_token(Some(login.access_token.clone()));
        tracing::info!(username = %username, "Logged in");
        Ok(login)
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get("api/auth/me").await
    }

    /// Logout
    ///
    /// The local token is cleared even when the backend call fails.
    pub async fn logout(&self) -> ClientResult<()> {
        let result = self.post_empty::<()>("api/auth/logout").await;
        self.set_token(None);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8000/")).unwrap();
        assert_eq!(client.url("/api/branches"), "http://localhost:8000/api/branches");
        assert_eq!(client.url("api/branches"), "http://localhost:8000/api/branches");
    }

    #[test]
    fn test_token_is_shared_between_clones() {
        let client = HttpClient::new(&ClientConfig::default()).unwrap();
        let clone = client.clone();
        client.set_token(Some("abc".into()));
        assert_eq!(clone.auth_header().as_deref(), Some("Bearer abc"));
        clone.set_token(None);
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_status_error_mapping() {
        let body = r#"{"code":4002,"message":"Entry already seated"}"#;
        match HttpClient::status_error(StatusCode::CONFLICT, body) {
            ClientError::Conflict(msg) => assert_eq!(msg, "Entry already seated"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            HttpClient::status_error(StatusCode::UNAUTHORIZED, ""),
            ClientError::Unauthorized
        ));
        match HttpClient::status_error(StatusCode::UNPROCESSABLE_ENTITY, "bad phone") {
            ClientError::Validation(msg) => assert_eq!(msg, "bad phone"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            HttpClient::status_error(StatusCode::BAD_GATEWAY, "upstream"),
            ClientError::Internal(_)
        ));
    }
}
