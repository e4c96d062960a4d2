// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::time::Duration;

use reqwest::{Method, StatusCode};

/// A response outside the `2xx` range.
///
/// The response body is deliberately not captured: it is not guaranteed to be
/// diagnostic, nor to be JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// Numeric status code.
    pub status_code: u16,
    /// Canonical reason phrase, e.g. `Precondition Failed`.
    pub status_text: String,
    /// Request method.
    pub method: Method,
    /// Fully-resolved request URL, including the query string.
    pub url: String,
}

impl HttpError {
    pub(crate) fn new(status: StatusCode, method: Method, url: String) -> Self {
        Self {
            status_code: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            method,
            url,
        }
    }

    /// Returns the status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Whether the server answered `412 Precondition Failed`.
    #[must_use]
    pub fn is_precondition_failed(&self) -> bool {
        self.status_code == StatusCode::PRECONDITION_FAILED.as_u16()
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to {} {}: {}", self.method, self.url, self.status_code)?;
        if !self.status_text.is_empty() {
            write!(f, " {}", self.status_text)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

/// Seerr client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SeerrError {
    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server answered with a non-success status.
    #[error(transparent)]
    Status(#[from] HttpError),

    /// The request could not be sent or no response was received.
    #[error("failed to {method} {url}: {source}")]
    Transport {
        /// Request method.
        method: Method,
        /// Request URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// No response headers arrived within the configured bound.
    #[error("timed out after {timeout:?} waiting for response headers of {method} {url}")]
    HeaderTimeout {
        /// Request method.
        method: Method,
        /// Request URL.
        url: String,
        /// The configured bound.
        timeout: Duration,
    },

    /// The request payload could not be serialised.
    #[error("failed to serialise request body to JSON for {url}: {source}")]
    Encode {
        /// Request URL.
        url: String,
        /// Serialisation error.
        #[source]
        source: serde_json::Error,
    },

    /// The response body could not be read.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// Request URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body is not the expected JSON document.
    #[error("failed to decode JSON response from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Deserialisation error.
        #[source]
        source: serde_json::Error,
    },
}

impl SeerrError {
    /// Returns the structured HTTP error if this is a status failure.
    #[must_use]
    pub fn http(&self) -> Option<&HttpError> {
        match self {
            Self::Status(e) => Some(e),
            _ => None,
        }
    }

    /// Whether this is a `412 Precondition Failed` response.
    #[must_use]
    pub fn is_precondition_failed(&self) -> bool {
        self.http().is_some_and(HttpError::is_precondition_failed)
    }
}
