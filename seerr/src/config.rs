// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

/// Transport settings for the underlying HTTP connection pool.
///
/// Every value is explicit so the client never inherits ambient library defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Upper bound for establishing a TCP (and TLS) connection.
    pub connect_timeout: Duration,
    /// Upper bound on each read once connected, starting with the wait for the response headers.
    pub response_header_timeout: Duration,
    /// How long an idle pooled connection is kept around for reuse.
    pub pool_idle_timeout: Duration,
    /// TCP keep-alive interval for pooled connections.
    pub tcp_keepalive: Duration,
    /// User agent string.
    pub user_agent: String,
}

const fn default_connect_timeout() -> Duration {
    Duration::from_secs(30)
}

const fn default_response_header_timeout() -> Duration {
    Duration::from_secs(10)
}

const fn default_pool_idle_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_user_agent() -> String {
    concat!("anibl-seerr/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            response_header_timeout: default_response_header_timeout(),
            pool_idle_timeout: default_pool_idle_timeout(),
            tcp_keepalive: default_pool_idle_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Seerr server configuration.
#[derive(Clone, Default)]
pub struct SeerrConfig {
    /// Base URL of the Seerr server, e.g. `https://seerr.example.com`.
    pub host: String,
    /// API key sent as `X-Api-Key` with every request.
    pub api_key: String,
    /// Transport settings.
    pub transport: TransportConfig,
}

impl SeerrConfig {
    /// Creates a configuration with default transport settings.
    #[must_use]
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: api_key.into(),
            transport: TransportConfig::default(),
        }
    }
}

// The API key must never end up in logs.
impl std::fmt::Debug for SeerrConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeerrConfig")
            .field("host", &self.host)
            .field("api_key", &"<redacted>")
            .field("transport", &self.transport)
            .finish()
    }
}
