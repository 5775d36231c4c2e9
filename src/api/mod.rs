//! HTTP client for the CRM REST API.
//!
//! [`ApiClient::request`] is the single place where requests are built: it
//! joins the endpoint with the base URL, merges the default JSON content type
//! with caller headers and decodes the JSON answer. Failures are logged here
//! and handed back to the caller, which decides how to surface them.

use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, NewClient};
use crate::domain::deal::{Deal, NewDeal};
use crate::domain::types::{ClientId, DealId};

pub mod endpoint;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use endpoint::Endpoint;
pub use errors::{ApiError, ApiResult};

/// Default base URL of the CRM backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

/// Per-call options of [`ApiClient::request`].
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    /// Extra headers; they override the defaults on conflict.
    pub headers: HeaderMap,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
        }
    }
}

impl RequestConfig {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post<B: Serialize + ?Sized>(body: &B) -> ApiResult<Self> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_value(body)?),
            headers: HeaderMap::new(),
        })
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Status report of `GET /health` on the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    pub message: String,
    pub db_status: String,
}

/// Operations of the CRM API used by the UI.
#[async_trait]
pub trait CrmApi: Send + Sync {
    async fn list_clients(&self) -> ApiResult<Vec<Client>>;
    async fn get_client(&self, id: ClientId) -> ApiResult<Client>;
    async fn create_client(&self, new_client: &NewClient) -> ApiResult<Client>;
    async fn list_deals(&self) -> ApiResult<Vec<Deal>>;
    async fn get_deal(&self, id: DealId) -> ApiResult<Deal>;
    async fn create_deal(&self, new_deal: &NewDeal) -> ApiResult<Deal>;
    async fn health(&self) -> ApiResult<HealthReport>;
}

/// reqwest-backed implementation of [`CrmApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Service root of the backend: the base URL without its `/api` suffix.
    pub fn origin(&self) -> &str {
        self.base_url.strip_suffix("/api").unwrap_or(&self.base_url)
    }

    /// Performs a request against `endpoint` (relative to the base URL) and
    /// decodes the JSON answer.
    pub async fn request<T>(&self, endpoint: &str, config: RequestConfig) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        self.send(&url, config).await
    }

    async fn send<T>(&self, url: &str, config: RequestConfig) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let method = config.method.clone();
        let result = self.try_send(url, config).await;
        if let Err(err) = &result {
            error!("API call failed: {method} {url}: {err}");
        }
        result
    }

    async fn try_send<T>(&self, url: &str, config: RequestConfig) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(config.headers);

        let mut builder = self.http.request(config.method, url).headers(headers);
        if let Some(body) = config.body {
            builder = builder.body(serde_json::to_vec(&body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CrmApi for ApiClient {
    async fn list_clients(&self) -> ApiResult<Vec<Client>> {
        self.request(&Endpoint::Clients.path(), RequestConfig::get()).await
    }

    async fn get_client(&self, id: ClientId) -> ApiResult<Client> {
        self.request(&Endpoint::Client(id).path(), RequestConfig::get()).await
    }

    async fn create_client(&self, new_client: &NewClient) -> ApiResult<Client> {
        self.request(&Endpoint::Clients.path(), RequestConfig::post(new_client)?).await
    }

    async fn list_deals(&self) -> ApiResult<Vec<Deal>> {
        self.request(&Endpoint::Deals.path(), RequestConfig::get()).await
    }

    async fn get_deal(&self, id: DealId) -> ApiResult<Deal> {
        self.request(&Endpoint::Deal(id).path(), RequestConfig::get()).await
    }

    async fn create_deal(&self, new_deal: &NewDeal) -> ApiResult<Deal> {
        self.request(&Endpoint::Deals.path(), RequestConfig::post(new_deal)?).await
    }

    async fn health(&self) -> ApiResult<HealthReport> {
        let url = format!("{}/health", self.origin());
        self.send(&url, RequestConfig::get()).await
    }
}
