//! The request wrapper every service module goes through.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{IntoUrl, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ApiError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Environment variable overriding the base URL in [`ApiClient::from_env`].
pub const API_URL_ENV: &str = "HOTSPOT_API_URL";

/// Per-request options, the equivalent of `fetch` init options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method. Defaults to `GET`.
    pub method: Method,
    /// Extra headers. These replace same-named defaults.
    pub headers: Vec<(String, String)>,
    /// Query parameters, URL-encoded when the request is built.
    pub query: Vec<(String, String)>,
    /// Raw request body.
    pub body: Option<String>,
}

impl RequestOptions {
    /// A plain `GET`.
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// A `POST` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if `body` cannot be serialized.
    pub fn post_json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_string(body).map_err(ApiError::network)?),
            ..Self::default()
        })
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends several query parameters.
    #[must_use]
    pub fn with_queries(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sets a header, overriding any default of the same name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Client for the Hotspot API rooted at a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url`, e.g. `http://127.0.0.1:8000/api/v1`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client that sends through an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Creates a client from `HOTSPOT_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `endpoint` onto the base URL with exactly one `/` between them.
    ///
    /// `endpoint` is used verbatim; see [`ApiClient::url_for_segments`] for
    /// paths built from caller-supplied values.
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Appends `segments` to the base URL path, percent-encoding each one so
    /// that `/`, `?` and `#` inside a value stay inside its segment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the base URL is invalid or a segment
    /// is empty, `.` or `..`.
    pub fn url_for_segments(&self, segments: &[&str]) -> Result<Url, ApiError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(ApiError::network(format!("Invalid path segment: {bad:?}")));
        }

        let mut url = Url::parse(&self.base_url).map_err(ApiError::network)?;
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::network(format!("Base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds the request for `endpoint` without sending it.
    ///
    /// `Content-Type: application/json` is always present unless a caller
    /// header of the same name replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] for an invalid URL or header.
    pub fn build_request(
        &self,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<reqwest::Request, ApiError> {
        self.build_request_to(self.url_for(endpoint), options)
    }

    fn build_request_to(
        &self,
        url: impl IntoUrl,
        options: &RequestOptions,
    ) -> Result<reqwest::Request, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(ApiError::network)?;
            let value = HeaderValue::from_str(value).map_err(ApiError::network)?;
            headers.insert(name, value);
        }

        let mut builder = self
            .client
            .request(options.method.clone(), url)
            .headers(headers);

        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &options.body {
            builder = builder.body(body.clone());
        }

        builder.build().map_err(ApiError::network)
    }

    /// Sends a request and decodes the JSON response body as `T`.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Api`] if the server responds with a non-2xx status.
    /// * [`ApiError::Network`] if the request cannot be built or sent, or
    ///   the body is not valid JSON for `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let request = self.build_request(endpoint, &options)?;
        self.send(request).await
    }

    /// Like [`ApiClient::request`], for a path made of encoded `segments`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`] and [`ApiClient::url_for_segments`].
    pub async fn request_segments<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let request = self.build_request_to(self.url_for_segments(segments)?, &options)?;
        self.send(request).await
    }

    /// Shorthand for a `GET` of `endpoint`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(endpoint, RequestOptions::get()).await
    }

    /// Shorthand for a `GET` of encoded `segments`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request_segments`].
    pub async fn get_segments<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<T, ApiError> {
        self.request_segments(segments, RequestOptions::get()).await
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<T, ApiError> {
        log::debug!("{} {}", request.method(), request.url());

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ApiError::network)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} returned {status}", response.url());
            return Err(ApiError::api(status.as_u16()));
        }

        let text = response.text().await.map_err(ApiError::network)?;
        serde_json::from_str(&text).map_err(ApiError::network)
    }
}
