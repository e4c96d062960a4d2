// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use anibl_core::{
    APP_NAME, DEFAULT_PAGE_SIZE, MappingSource, Reconciler, UPDATE_INTERVAL, fetch_known,
};
use anibl_seerr::{BlocklistClient, MediaType};
use clap::{ArgAction, ArgMatches, Command, ValueHint, arg, builder::styling, crate_version};

use crate::config::{Config, executable_dir, load_env_files};

/// Command-line interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    /// Folder to store downloaded files in
    pub cache_dir: Option<PathBuf>,

    /// Verbose output
    pub verbose: bool,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Blocklist every anime series known to Anime-Lists on a Seerr server.")
            .version(crate_version!())
            .styles(STYLES)
            .after_help(
                "\
Requires SEERR_HOST, SEERR_API_KEY and SEERR_USER_ID, read from the environment or from a .env \
file in the working directory or next to the executable.",
            )
            .arg(
                arg!(--"cache-dir" <DIR> "Folder to store downloaded files in")
                    .long_help(format!(
                        "\
Folder to store downloaded files in. The anime mapping is cached there and refreshed when older \
than {} hours. Defaults to the directory of the executable.",
                        UPDATE_INTERVAL.as_secs() / 3600
                    ))
                    .required(false)
                    .value_parser(clap::value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
            .arg(arg!(-v --verbose "Verbose output").action(ArgAction::SetTrue))
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(&matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(&matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            cache_dir: matches.get_one::<PathBuf>("cache-dir").cloned(),
            verbose: matches.get_flag("verbose"),
        }
    }

    /// Load the configuration, then reconcile the blocklist with the anime mapping.
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "starting...");
        let exe_dir = executable_dir()?;
        load_env_files(&exe_dir)?;
        let config = Config::from_env()?;

        let client = BlocklistClient::new(&config.seerr)?;
        tracing::debug!(base = %client.rest().base(), "fetching blocklist...");
        let known = fetch_known(&client, MediaType::Tv, DEFAULT_PAGE_SIZE).await?;

        let cache_dir = self.cache_dir.unwrap_or(exe_dir);
        let entries = MappingSource::new(cache_dir).load().await?;

        let mut reconciler = Reconciler::new(&client, config.user, MediaType::Tv, known);
        reconciler.run(&entries).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert_eq!(
            cli,
            Cli {
                cache_dir: None,
                verbose: false,
            }
        );
    }

    #[test]
    fn test_parse_cache_dir() {
        let cli = Cli::try_parse_from(vec!["test", "--cache-dir", "/tmp/anibl"]).unwrap();
        assert_eq!(cli.cache_dir, Some(PathBuf::from("/tmp/anibl")));
    }

    #[test]
    fn test_parse_verbose() {
        let cli = Cli::try_parse_from(vec!["test", "--verbose"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(vec!["test", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(vec!["test", "--dry-run"]).is_err());
    }
}
