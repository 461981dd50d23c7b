//! Command-line configuration. The catalog has nothing to configure, so the
//! flags only cover the log sink and the startup screen.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".movie-library";
/// Log file name stored inside the application data directory.
const LOG_FILE_NAME: &str = "movie-library.log";

#[derive(Debug, Clone, Parser)]
#[command(name = "movie-library", version, about = "A console catalog for your movies")]
pub struct Config {
    /// Write logs to this file (default: ~/.movie-library/movie-library.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `info` or `movie_library=debug`.
    /// `MOVIE_LIBRARY_LOG` takes precedence when set.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Go straight to the main menu instead of opening the instructions.
    #[arg(long)]
    pub skip_instructions: bool,
}

impl Config {
    pub fn show_instructions(&self) -> bool {
        !self.skip_instructions
    }

    /// The explicit `--log-file`, or the default inside the user's home.
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => default_log_path(),
        }
    }
}

/// Resolve the absolute path to the log file inside the user's home.
fn default_log_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["movie-library"]).unwrap();
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.is_none());
        assert!(config.show_instructions());
    }

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "movie-library",
            "--log-file",
            "/tmp/movies.log",
            "--log-level",
            "debug",
            "--skip-instructions",
        ])
        .unwrap();
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/movies.log"));
        assert_eq!(config.log_level, "debug");
        assert!(!config.show_instructions());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Config::try_parse_from(["movie-library", "--persist"]).is_err());
    }
}
