// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Locally cached copy of the anime mapping, refreshed once it gets stale.

use std::fs::Permissions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{StatusCode, Url};
use tempfile::NamedTempFile;
use tokio::fs;

use crate::anime_list::{AnimeEntry, parse_anime_list};
use crate::error::MappingError;

/// Upstream location of the mapping.
pub const ANIME_LIST_URL: &str =
    "https://raw.githubusercontent.com/Anime-Lists/anime-lists/master/anime-list.xml";

/// Maximum age of the cached copy before it is downloaded again.
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

const FALLBACK_FILE_NAME: &str = "anime-list.xml";

/// Where the mapping comes from and where it is cached.
#[derive(Debug, Clone)]
pub struct MappingSource {
    url: String,
    cache_dir: PathBuf,
    max_age: Duration,
    http: reqwest::Client,
}

impl MappingSource {
    /// Creates a source for the upstream mapping, cached in `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: ANIME_LIST_URL.to_string(),
            cache_dir: cache_dir.into(),
            max_age: UPDATE_INTERVAL,
            http: reqwest::Client::new(),
        }
    }

    /// Overrides the download URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Overrides how long the cached copy is trusted.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Path of the cached copy: the last segment of the URL inside the cache directory.
    #[must_use]
    pub fn cache_path(&self) -> PathBuf {
        let name = Url::parse(&self.url)
            .ok()
            .and_then(|url| {
                url.path_segments()
                    .and_then(|mut segments| segments.next_back().map(str::to_string))
            })
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());
        self.cache_dir.join(name)
    }

    /// Loads the mapping, from the cache while it is fresh and from upstream otherwise.
    ///
    /// A refresh replaces the cached file atomically and only after the download parsed, so an
    /// interrupted or invalid download never corrupts the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping cannot be read, downloaded, parsed or stored.
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn load(&self) -> Result<Vec<AnimeEntry>, MappingError> {
        let path = self.cache_path();
        let previous = fs::metadata(&path).await.ok();

        if let Some(meta) = &previous {
            let fresh = meta
                .modified()
                .map(|mtime| mtime.elapsed().map_or(true, |age| age < self.max_age))
                .unwrap_or(false);
            if fresh {
                tracing::debug!(path = %path.display(), "using cached anime list");
                let xml = fs::read_to_string(&path)
                    .await
                    .map_err(|source| MappingError::Io {
                        path: path.clone(),
                        source,
                    })?;
                return parse_anime_list(&xml);
            }
        }

        tracing::info!(path = %path.display(), "downloading anime list");
        let body = self.download().await?;
        let xml = String::from_utf8(body)?;
        let entries = parse_anime_list(&xml)?;

        fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|source| MappingError::Io {
                path: self.cache_dir.clone(),
                source,
            })?;
        let permissions = previous.map(|meta| meta.permissions());
        let target = path.clone();
        tokio::task::spawn_blocking(move || replace_file(&target, xml.as_bytes(), permissions))
            .await
            .map_err(|e| MappingError::Io {
                path: path.clone(),
                source: std::io::Error::other(e),
            })??;

        tracing::debug!(count = entries.len(), "anime list refreshed");
        Ok(entries)
    }

    async fn download(&self) -> Result<Vec<u8>, MappingError> {
        let download_err = |source| MappingError::Download {
            url: self.url.clone(),
            source,
        };

        let resp = self.http.get(&self.url).send().await.map_err(download_err)?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(MappingError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let bytes = resp.bytes().await.map_err(download_err)?;
        Ok(bytes.to_vec())
    }
}

/// Writes `contents` to a temporary file next to `path`, then swaps it into place.
fn replace_file(
    path: &Path,
    contents: &[u8],
    permissions: Option<Permissions>,
) -> Result<(), MappingError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let io_err = |source| MappingError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(contents).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;
    if let Some(permissions) = permissions {
        std::fs::set_permissions(file.path(), permissions).map_err(io_err)?;
    }

    file.persist(path).map_err(|e| MappingError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
