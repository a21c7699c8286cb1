//! Shared HTTP client for the Events API
//!
//! Every service goes through [`ApiClient`], which owns the single error
//! policy: transport failures and non-2xx statuses become errors, with the
//! server's `message` used when the body carries one.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::utils::errors::{AdtoError, ApiError, Result};
use crate::utils::logging;

/// Thin JSON client bound to the API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client; cookies are kept so requests are credentialed
    pub fn new(config: &ApiConfig) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .map_err(AdtoError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL for an API path plus an already-built query string
    pub fn url(&self, path: &str, query: &str) -> String {
        format!("{}{}{}", self.base_url, path, query)
    }

    /// `GET path?query` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T> {
        let url = self.url(path, query);
        let request = self.client.request(Method::GET, &url);
        self.execute(Method::GET, path, &url, request).await
    }

    /// `POST path` with a JSON body and decode the JSON response
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, "");
        let request = self.client.request(Method::POST, &url).json(body);
        self.execute(Method::POST, path, &url, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        logging::log_api_request(method.as_str(), url);
        let started = Instant::now();

        let response = request.send().await.map_err(|e| {
            let mapped = map_transport_error(e);
            logging::log_api_error(resource_of(path), &mapped.to_string(), Some(url));
            mapped
        })?;

        let status = response.status();
        logging::log_api_response(
            method.as_str(),
            url,
            status.as_u16(),
            started.elapsed().as_millis() as u64,
        );

        if !status.is_success() {
            return Err(error_from_response(response).await);
        }

        let bytes = response.bytes().await.map_err(map_transport_error)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            debug!(url = url, error = %e, "Failed to decode Events API response");
            AdtoError::Api(ApiError::InvalidResponse(e.to_string()))
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> AdtoError {
    if e.is_timeout() {
        AdtoError::Api(ApiError::Timeout)
    } else if e.is_connect() {
        AdtoError::Api(ApiError::ServiceUnavailable)
    } else {
        AdtoError::Http(e)
    }
}

async fn error_from_response(response: Response) -> AdtoError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body).unwrap_or_else(|| {
        format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status")
        )
    });

    AdtoError::Api(ApiError::RequestFailed {
        status: status.as_u16(),
        message,
    })
}

/// Pull the `message` field out of an error body; validation errors
/// sometimes send it as a list of strings.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

/// First path segment, used to tag log lines: `/events/published` → `events`
pub fn resource_of(path: &str) -> &str {
    path.trim_start_matches('/')
        .split(['/', '?'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("api")
}

/// Percent-encode a single path segment
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
