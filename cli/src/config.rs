// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path, path::PathBuf};

use anibl_seerr::{SeerrConfig, UserId};

const SEERR_HOST_ENV: &str = "SEERR_HOST";
const SEERR_API_KEY_ENV: &str = "SEERR_API_KEY";
const SEERR_USER_ID_ENV: &str = "SEERR_USER_ID";

const ENV_FILE: &str = ".env";

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seerr server settings.
    pub seerr: SeerrConfig,

    /// User the blocklist entries are attributed to.
    pub user: UserId,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    #[tracing::instrument(skip(lookup))]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing = || -> Box<dyn Error> {
            format!("${SEERR_HOST_ENV}/${SEERR_API_KEY_ENV}/${SEERR_USER_ID_ENV} are required")
                .into()
        };

        let host = lookup(SEERR_HOST_ENV)
            .filter(|a| !a.is_empty())
            .ok_or_else(missing)?;
        let api_key = lookup(SEERR_API_KEY_ENV)
            .filter(|a| !a.is_empty())
            .ok_or_else(missing)?;
        let user = lookup(SEERR_USER_ID_ENV)
            .and_then(|a| a.trim().parse::<i64>().ok())
            .ok_or_else(missing)?;

        Ok(Self {
            seerr: SeerrConfig::new(host, api_key),
            user: UserId::new(user),
        })
    }
}

/// Directory holding the running executable.
pub fn executable_dir() -> Result<PathBuf, Box<dyn Error>> {
    let exe = std::env::current_exe()
        .map_err(|e| format!("Failed to locate the executable: {e}"))?;
    Ok(exe
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf))
}

/// Loads `.env` from the working directory, then from `exe_dir`.
///
/// Missing files are skipped; variables that are already set are left untouched.
pub fn load_env_files(exe_dir: &Path) -> Result<(), Box<dyn Error>> {
    for path in [PathBuf::from(ENV_FILE), exe_dir.join(ENV_FILE)] {
        load_env_file(&path)?;
    }
    Ok(())
}

fn load_env_file(path: &Path) -> Result<bool, Box<dyn Error>> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded environment file");
            Ok(true)
        }
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(format!("{}: {e}", path.display()).into()),
    }
}
