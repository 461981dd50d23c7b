//! Log sink setup. The terminal belongs to the TUI, so events go to a file
//! instead of stderr.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Environment variable that overrides `--log-level`.
pub const LOG_ENV: &str = "MOVIE_LIBRARY_LOG";

/// Build the filter from `MOVIE_LIBRARY_LOG`, falling back to the configured
/// level.
pub fn env_filter(config: &Config) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log level `{}`", config.log_level)),
    }
}

/// Open (or create) the log file and install the global subscriber.
pub fn init(config: &Config) -> Result<()> {
    let path = config.log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err).context("failed to install log subscriber"))?;

    tracing::info!(log_file = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_env_filter_accepts_directives() {
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        let config =
            Config::try_parse_from(["movie-library", "--log-level", "movie_library=debug"])
                .unwrap();
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_init_writes_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("movies.log");
        let config = Config::try_parse_from([
            "movie-library",
            "--log-file",
            path.to_str().unwrap(),
        ])
        .unwrap();

        init(&config).unwrap();
        assert!(path.exists());

        // Only one global subscriber can be installed per process.
        let err = init(&config).unwrap_err();
        assert!(err.to_string().contains("failed to install log subscriber"));
    }
}
