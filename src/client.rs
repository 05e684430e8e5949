use std::time::Instant;

use reqwest::{Method, header::CONTENT_TYPE, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
    response::{JSON_CONTENT_TYPE, decode_response},
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request body. Multipart bodies leave the content type to the transport so
/// it can add the boundary.
#[derive(Debug)]
pub enum Payload {
    Empty,
    Json(Value),
    Multipart(Form),
}

impl Payload {
    pub fn json<B: Serialize>(body: &B) -> AppResult<Self> {
        Ok(Payload::Json(serde_json::to_value(body)?))
    }
}

/// Credentialed HTTP client for the storefront backend.
///
/// The cookie store is shared between clones, so every clone rides on the
/// same session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|err| AppError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Absolute URLs pass through; relative paths are served by the backend.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            self.url(path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> AppResult<T> {
        self.request(Method::GET, endpoint, Payload::Empty).await
    }

    pub async fn post<T: DeserializeOwned>(&self, endpoint: &str, payload: Payload) -> AppResult<T> {
        self.request(Method::POST, endpoint, payload).await
    }

    pub async fn put<T: DeserializeOwned>(&self, endpoint: &str, payload: Payload) -> AppResult<T> {
        self.request(Method::PUT, endpoint, payload).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, endpoint: &str, payload: Payload) -> AppResult<T> {
        self.request(Method::PATCH, endpoint, payload).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> AppResult<T> {
        self.request(Method::DELETE, endpoint, Payload::Empty).await
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        payload: Payload,
    ) -> AppResult<T> {
        let url = self.url(endpoint);
        let request_id = Uuid::new_v4().to_string();

        let builder = self
            .http
            .request(method.clone(), &url)
            .header(REQUEST_ID_HEADER, &request_id);
        let builder = match payload {
            Payload::Empty => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE),
            Payload::Json(body) => builder.json(&body),
            Payload::Multipart(form) => builder.multipart(form),
        };

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            "request started"
        );
        let started = Instant::now();

        let response = builder.send().await.map_err(|err| {
            tracing::warn!(request_id = %request_id, error = %err, "request failed");
            AppError::Transport(err.to_string())
        })?;

        tracing::debug!(
            request_id = %request_id,
            status = %response.status(),
            ms = %started.elapsed().as_millis(),
            "request finished"
        );

        decode_response(response).await
    }
}

/// Appends URL-encoded query parameters to an endpoint.
pub fn with_query<K, V>(endpoint: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if params.is_empty() {
        return endpoint.to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish();
    format!("{endpoint}?{query}")
}
