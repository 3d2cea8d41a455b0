use crate::config::{ApiConfig, Environment};
use crate::error::{ApiError, ApiResult};
use crate::interceptor::{NormalizeServerErrors, ResponseInterceptor};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Request-issuing operations shared by everything that talks to the dashboard API.
#[async_trait]
pub trait RequestClient: Send + Sync {
    fn base_url(&self) -> &str;

    async fn get(&self, path: &str) -> ApiResult<Response>;

    async fn delete(&self, path: &str) -> ApiResult<Response>;

    async fn post(&self, path: &str, body: &serde_json::Value) -> ApiResult<Response>;

    async fn put(&self, path: &str, body: &serde_json::Value) -> ApiResult<Response>;

    async fn patch(&self, path: &str, body: &serde_json::Value) -> ApiResult<Response>;
}

/// HTTP client bound to one base URL, with its response interceptor fixed at construction.
///
/// Cloning is cheap and every clone shares the same connection pool and interceptor.
#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
    environment: Environment,
    interceptor: Arc<dyn ResponseInterceptor>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        Self::with_interceptor(config, NormalizeServerErrors)
    }

    pub fn with_default_config() -> ApiResult<Self> {
        Self::new(ApiConfig::default())
    }

    pub fn with_interceptor<I>(config: ApiConfig, interceptor: I) -> ApiResult<Self>
    where
        I: ResponseInterceptor + 'static,
    {
        config
            .validate()
            .map_err(|msg| ApiError::InvalidConfig { message: msg })?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        let base_url = config.base_url().trim_end_matches('/').to_string();
        info!(
            "Configured API client for {} at {}",
            config.environment, base_url
        );

        Ok(Self {
            http_client,
            base_url,
            environment: config.environment,
            interceptor: Arc::new(interceptor),
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Joins `path` onto the base URL. Absolute http(s) URLs are returned as given.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client.request(method, self.url(path))
    }

    /// Sends a request built from this client and runs the outcome through the interceptor.
    pub async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let outcome = request
            .send()
            .await
            .and_then(|response| response.error_for_status());

        match &outcome {
            Ok(response) => debug!("{} -> {}", response.url(), response.status()),
            Err(err) => debug!("Request failed: {}", err),
        }

        self.interceptor.intercept(outcome)
    }

    /// Reads the body of a response returned by this client. A connection lost mid-body is
    /// handled by the interceptor like a request that never got a response.
    pub async fn text(&self, response: Response) -> ApiResult<String> {
        response
            .text()
            .await
            .map_err(|err| self.interceptor.intercept_body_error(err))
    }

    pub async fn json<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let text = self.text(response).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: &serde_json::Value,
    ) -> ApiResult<Response> {
        debug!("{} {}", method, path);
        self.send(self.request(method, path).json(body)).await
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RequestClient for ApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> ApiResult<Response> {
        debug!("GET {}", path);
        self.send(self.request(Method::GET, path)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<Response> {
        debug!("DELETE {}", path);
        self.send(self.request(Method::DELETE, path)).await
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> ApiResult<Response> {
        self.send_json(Method::POST, path, body).await
    }

    async fn put(&self, path: &str, body: &serde_json::Value) -> ApiResult<Response> {
        self.send_json(Method::PUT, path, body).await
    }

    async fn patch(&self, path: &str, body: &serde_json::Value) -> ApiResult<Response> {
        self.send_json(Method::PATCH, path, body).await
    }
}
