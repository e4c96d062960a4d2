// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with API key authentication and status classification.

use reqwest::header::{CONNECTION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response, Url};

use crate::config::{SeerrConfig, TransportConfig};
use crate::error::{HttpError, SeerrError};

const API_KEY_HEADER: &str = "X-Api-Key";

/// Pooled HTTP client for Seerr operations.
pub struct HttpClient {
    client: Client,
    api_key: String,
    transport: TransportConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &SeerrConfig) -> Result<Self, SeerrError> {
        let transport = config.transport.clone();
        let client = Client::builder()
            .no_proxy() // $HTTP_PROXY etc. ignored
            .http1_only()
            .connect_timeout(transport.connect_timeout)
            .read_timeout(transport.response_header_timeout)
            .pool_idle_timeout(transport.pool_idle_timeout)
            .tcp_keepalive(transport.tcp_keepalive)
            .user_agent(&transport.user_agent)
            .build()
            .map_err(|e| SeerrError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            transport,
        })
    }

    /// Builds a request with the authentication and keep-alive headers.
    pub fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(CONNECTION, HeaderValue::from_static("keep-alive"))
            .header(API_KEY_HEADER, &self.api_key)
    }

    /// Sends a request and checks for a `2xx` status.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be set up within the connect timeout, the
    /// response headers do not arrive in time, or the status is outside `[200, 300)`.
    pub async fn execute(
        &self,
        req: RequestBuilder,
        method: &Method,
        url: &str,
    ) -> Result<Response, SeerrError> {
        let resp = req.send().await.map_err(|source| {
            // Past the connect phase, only the read bound can time out.
            if source.is_timeout() && !source.is_connect() {
                SeerrError::HeaderTimeout {
                    method: method.clone(),
                    url: url.to_string(),
                    timeout: self.transport.response_header_timeout,
                }
            } else {
                SeerrError::Transport {
                    method: method.clone(),
                    url: url.to_string(),
                    source,
                }
            }
        })?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            tracing::debug!(%method, url, %status, "request rejected");
            Err(HttpError::new(status, method.clone(), url.to_string()).into())
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("client", &self.client)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
