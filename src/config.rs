//! Runtime settings resolved from the environment.
//!
//! `main` loads `.env` through `dotenvy` first, so values there apply too.

use std::path::PathBuf;

pub const DATA_PATH_VAR: &str = "HOUSING_DATA_PATH";
pub const LOG_FILE_VAR: &str = "LOG_FILE_PATH";

const DEFAULT_DATA_PATH: &str = "housing_data.csv";
const DEFAULT_LOG_FILE: &str = "logs/housing_rater.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// CSV file to analyze.
    pub data_path: PathBuf,
    /// Target of the JSON rolling log.
    pub log_file_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset or blank values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            data_path: get(DATA_PATH_VAR, DEFAULT_DATA_PATH),
            log_file_path: get(LOG_FILE_VAR, DEFAULT_LOG_FILE),
        }
    }
}
