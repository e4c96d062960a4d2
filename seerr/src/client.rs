// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed JSON-over-HTTP client bound to one `/api/v1/<segment>` base path.

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::SeerrConfig;
use crate::error::SeerrError;
use crate::http::HttpClient;

/// How a successful response body is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// Ignore the body.
    #[default]
    Discard,
    /// Decode the body as JSON.
    Json,
    /// Capture the body verbatim.
    Text,
}

/// A successful response body, shaped by the requested [`ResponseMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<T> {
    /// The body was discarded.
    Empty,
    /// The decoded JSON body.
    Json(T),
    /// The raw body.
    Text(String),
}

/// Seerr REST client for a single resource.
///
/// # Example
///
/// ```ignore
/// use anibl_seerr::{RestClient, SeerrConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SeerrConfig::new("https://seerr.example.com", "api-key");
/// let client = RestClient::new(&config, "blocklist")?;
/// let body = client.get_text("", None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Arc<HttpClient>,
    base_url: Url,
}

impl RestClient {
    /// Creates a client bound to `<host>/api/v1/<segment>`.
    ///
    /// # Errors
    ///
    /// Returns [`SeerrError::Config`] if the host is not an absolute URL with a scheme and a host,
    /// or if HTTP client initialization fails.
    pub fn new(config: &SeerrConfig, segment: &str) -> Result<Self, SeerrError> {
        let base_url = Self::base_url(&config.host, segment)?;
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
            base_url,
        })
    }

    /// Returns the bound base URL.
    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base_url
    }

    /// Performs a request against the base path, consuming the response as `mode` asks.
    ///
    /// `endpoint` is appended to the base path (`""` targets the base itself, `"/42"` a child),
    /// `query` is encoded as the query string and `body` is sent as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SeerrError::Status`] for any status outside `[200, 300)`, and a wrapped error
    /// for transport, encoding and decoding failures.
    pub async fn execute<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
        mode: ResponseMode,
    ) -> Result<Payload<T>, SeerrError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match mode {
            ResponseMode::Discard => self
                .execute_discard(method, endpoint, query, body)
                .await
                .map(|()| Payload::Empty),
            ResponseMode::Json => self
                .execute_json(method, endpoint, query, body)
                .await
                .map(Payload::Json),
            ResponseMode::Text => self
                .execute_text(method, endpoint, query, body)
                .await
                .map(Payload::Text),
        }
    }

    /// Performs a request and decodes the JSON response body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn execute_json<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
    ) -> Result<T, SeerrError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (resp, url) = self.send(method, endpoint, query, body, true).await?;
        let bytes = resp
            .bytes()
            .await
            .map_err(|source| SeerrError::Body {
                url: url.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| SeerrError::Decode { url, source })
    }

    /// Performs a request and captures the raw response body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn execute_text<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
    ) -> Result<String, SeerrError> {
        let (resp, url) = self.send(method, endpoint, query, body, false).await?;
        resp.text()
            .await
            .map_err(|source| SeerrError::Body { url, source })
    }

    /// Performs a request and ignores the response body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn execute_discard<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
    ) -> Result<(), SeerrError> {
        self.send(method, endpoint, query, body, false)
            .await
            .map(drop)
    }

    /// Sends a GET request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
    ) -> Result<T, SeerrError> {
        self.execute_json::<(), T>(Method::GET, endpoint, query, None).await
    }

    /// Sends a GET request and captures the raw response body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn get_text(
        &self,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
    ) -> Result<String, SeerrError> {
        self.execute_text::<()>(Method::GET, endpoint, query, None).await
    }

    /// Sends a POST request with an optional JSON body, discarding the response body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
    ) -> Result<(), SeerrError> {
        self.execute_discard(Method::POST, endpoint, query, body).await
    }

    /// Sends a POST request with an optional JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn post_json<B, T>(
        &self,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
    ) -> Result<T, SeerrError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute_json(Method::POST, endpoint, query, body).await
    }

    /// Sends a PUT request with an optional JSON body, discarding the response body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
    ) -> Result<(), SeerrError> {
        self.execute_discard(Method::PUT, endpoint, query, body).await
    }

    /// Sends a PUT request with an optional JSON body and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn put_json<B, T>(
        &self,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
    ) -> Result<T, SeerrError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute_json(Method::PUT, endpoint, query, body).await
    }

    /// Sends a DELETE request with an optional JSON body, discarding the response body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::execute`].
    pub async fn delete<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
    ) -> Result<(), SeerrError> {
        self.execute_discard(Method::DELETE, endpoint, query, body).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&[(&str, String)]>,
        body: Option<&B>,
        accept_json: bool,
    ) -> Result<(Response, String), SeerrError> {
        let url = self.resolve(endpoint, query);
        let url_str = url.to_string();
        tracing::debug!(%method, url = %url_str, "sending request");

        let mut req = self.http.build_request(method.clone(), url);
        if let Some(body) = body {
            let json = serde_json::to_vec(body).map_err(|source| SeerrError::Encode {
                url: url_str.clone(),
                source,
            })?;
            req = req.header(CONTENT_TYPE, "application/json").body(json);
        }
        if accept_json {
            req = req.header(ACCEPT, "application/json");
        }

        let resp = self.http.execute(req, &method, &url_str).await?;
        Ok((resp, url_str))
    }

    fn base_url(host: &str, segment: &str) -> Result<Url, SeerrError> {
        let mut url = Url::parse(host)
            .map_err(|e| SeerrError::Config(format!("invalid host URL {host:?}: {e}")))?;
        if url.scheme().is_empty() || url.host_str().is_none_or(str::is_empty) {
            return Err(SeerrError::Config(format!(
                "missing scheme/host in {host:?}"
            )));
        }

        url.path_segments_mut()
            .map_err(|()| SeerrError::Config(format!("host URL {host:?} cannot be a base")))?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segment.split('/').filter(|s| !s.is_empty()));
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    fn resolve(&self, endpoint: &str, query: Option<&[(&str, String)]>) -> Url {
        let mut url = self.base_url.clone();
        let parts = endpoint.split('/').filter(|s| !s.is_empty());
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.extend(parts);
        }
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }
}
