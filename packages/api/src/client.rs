//! HTTP wrapper for the remote booking API.
//!
//! # Design
//! Every outbound call goes through [`ApiClient::execute`]: attach the
//! platform key and bearer token, send, and fold the response into either
//! the envelope's `content` or an [`ApiError`]. 401/403 is intercepted here
//! — the session keys are cleared so the UI can send the user back to the
//! login view — which keeps the domain services free of auth handling.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::{KeyValueStore, MemoryStore, Session};

use crate::config::ApiConfig;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::paging::{Page, PageQuery, PagedOrFull};

/// Session store used by [`ApiClient::from_env`] on the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
/// Session store used by [`ApiClient::from_env`] on the current platform.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = MemoryStore;

/// Client for the remote booking API.
///
/// Holds only the HTTP client, the connection settings and the session
/// handle; cheap to clone and to recreate per call.
#[derive(Clone)]
pub struct ApiClient<S: KeyValueStore> {
    http: reqwest::Client,
    config: ApiConfig,
    session: Session<S>,
}

impl ApiClient<PlatformStore> {
    /// Client over the platform session store with env-derived config.
    pub fn from_env() -> Self {
        Self::with_store(ApiConfig::from_env(), PlatformStore::new())
    }
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Client over an explicit session store, mainly for tests.
    pub fn with_store(config: ApiConfig, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: Session::new(store),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self
            .http
            .request(method, url)
            .header("x-api-key", &self.config.api_key);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        request
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path).query(pairs))
            .await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let _: Option<serde_json::Value> = self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    pub(crate) async fn delete_query(
        &self,
        path: &str,
        pairs: &[(&str, String)],
    ) -> Result<(), ApiError> {
        let _: Option<serde_json::Value> = self
            .execute(self.request(Method::DELETE, path).query(pairs))
            .await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(&str, String)],
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        self.execute(self.request(Method::POST, path).query(pairs).multipart(form))
            .await
    }

    /// Fetch a collection that pages server-side when it can.
    ///
    /// The paged endpoint is tried first; a plain-array answer is sliced
    /// locally. When the paged endpoint itself is unavailable (a server
    /// error or an unexpected shape), the full collection is fetched from
    /// `full_path` and sliced the same way.
    pub(crate) async fn get_paged<T: DeserializeOwned>(
        &self,
        paged_path: &str,
        full_path: &str,
        query: &PageQuery,
    ) -> Result<Page<T>, ApiError> {
        match self
            .get_query::<PagedOrFull<T>>(paged_path, &query.query_pairs())
            .await
        {
            Ok(response) => Ok(Page::from_response(response, query)),
            Err(
                err @ (ApiError::Transport(_)
                | ApiError::Unauthorized { .. }
                | ApiError::Validation(_)),
            ) => Err(err),
            Err(_) => {
                tracing::debug!(path = full_path, "paged endpoint unavailable, slicing locally");
                let items: Vec<T> = self.get(full_path).await?;
                Ok(Page::slice(items, query))
            }
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|err| {
            tracing::warn!("request failed: {err}");
            ApiError::Transport(err.to_string())
        })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "api response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            // The stored token is no longer valid anywhere it would be used.
            self.session.clear();
            return Err(ApiError::Unauthorized {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.content)
    }
}

/// Best-effort extraction of the server message from an error body. Some
/// endpoints put it in `message`, others in a string `content`.
fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        content: Option<serde_json::Value>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or_else(|| parsed.content.and_then(|c| c.as_str().map(str::to_string)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_message_field() {
        let body = r#"{"statusCode":400,"message":"Email already exists","content":"dup"}"#;
        assert_eq!(error_message(body).as_deref(), Some("Email already exists"));
    }

    #[test]
    fn test_error_message_falls_back_to_string_content() {
        let body = r#"{"statusCode":400,"content":"Room not found"}"#;
        assert_eq!(error_message(body).as_deref(), Some("Room not found"));
    }

    #[test]
    fn test_error_message_none_for_non_json() {
        assert!(error_message("<html>502</html>").is_none());
    }
}
