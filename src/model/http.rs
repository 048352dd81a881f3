/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::{AUTH_SCHEME, USER_AGENT};
use crate::error::{ApiError, AppError};
use crate::model::requests::Query;
use crate::model::responses::{JsonMap, parse_json_body};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpInternalClient, Method};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// Authenticated HTTP session for the MSP API
///
/// Owns the transport and the headers sent on every request. Headers are built
/// once at construction and never change afterwards.
#[derive(Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    base_url: String,
    headers: HeaderMap,
}

impl HttpClient {
    /// Creates a new session from the given configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing the API key and REST settings
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Session ready to use
    /// * `Err(AppError)` - If the API key is not a valid header value or the transport fails to build
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = HttpInternalClient::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http_client = builder.build()?;

        Self::with_http_client(config, http_client)
    }

    /// Creates a new session over a caller-provided transport
    ///
    /// Useful when the caller needs custom timeouts, proxies or TLS settings.
    pub fn with_http_client(
        config: &Config,
        http_client: HttpInternalClient,
    ) -> Result<Self, AppError> {
        Ok(Self {
            http_client,
            base_url: config.rest_api.base_url.trim_end_matches('/').to_string(),
            headers: default_headers(&config.credentials.api_key)?,
        })
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str, query: Option<&Query>) -> Result<JsonMap, AppError> {
        self.request(Method::GET, path, query, None::<()>).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize>(&self, path: &str, body: B) -> Result<JsonMap, AppError> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch<B: Serialize>(&self, path: &str, body: B) -> Result<JsonMap, AppError> {
        self.request(Method::PATCH, path, None, Some(body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize>(&self, path: &str, body: B) -> Result<JsonMap, AppError> {
        self.request(Method::PUT, path, None, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<JsonMap, AppError> {
        self.request(Method::DELETE, path, None, None::<()>).await
    }

    /// Sends a request and normalizes the response
    ///
    /// The body is parsed as a JSON object (empty map when it is not one).
    /// A 2xx status returns that map; any other status becomes [`AppError::Api`]
    /// built from its `message` and `code` fields. Nothing is retried.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Endpoint path relative to the base URL (e.g. "/v1/subscribers")
    /// * `query` - Optional query parameters
    /// * `body` - Optional request body, serialized as JSON
    ///
    /// # Returns
    /// * `Ok(JsonMap)` - Parsed response body
    /// * `Err(AppError)` - API error, or transport error propagated as-is
    pub async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        body: Option<B>,
    ) -> Result<JsonMap, AppError> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .headers(self.headers.clone());

        if let Some(q) = query {
            request = request.query(q);
        }

        if let Some(b) = &body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let text = response.text().await?;
        let data = parse_json_body(&text);

        if status.is_success() {
            return Ok(data);
        }

        let api_error = ApiError::from_body(&data, status);
        error!("Request failed with status {}: {}", status, api_error.message);
        Err(AppError::Api(api_error))
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }
}

/// Builds the headers sent on every request
///
/// The `Authorization` value is marked sensitive so it is never printed.
fn default_headers(api_key: &str) -> Result<HeaderMap, AppError> {
    let mut auth = HeaderValue::from_str(&format!("{AUTH_SCHEME} {api_key}"))
        .map_err(|e| AppError::InvalidInput(format!("API key is not a valid header value: {e}")))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}
