// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Errors raised while loading the anime mapping.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// Filesystem access failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The download could not be performed.
    #[error("failed to download {url}: {source}")]
    Download {
        /// Source URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than `200 OK`.
    #[error("unexpected status downloading {url}: {status}")]
    Status {
        /// Source URL.
        url: String,
        /// Response status.
        status: reqwest::StatusCode,
    },

    /// The document is not valid UTF-8.
    #[error("anime list is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The document is not a valid anime list.
    #[error("failed to parse anime list: {0}")]
    Parse(#[from] quick_xml::DeError),

    /// The downloaded copy could not replace the cached file.
    #[error("cannot replace {} with downloaded copy: {source}", path.display())]
    Persist {
        /// The cached file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
