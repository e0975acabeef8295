use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use tracing::{warn, Level};
use url::Url;

use crate::usecase::services::filter_sync::DEFAULT_DEBOUNCE;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

pub const BASE_URL_VAR: &str = "EDU_ADMIN_BASE_URL";
pub const DEBOUNCE_VAR: &str = "EDU_ADMIN_DEBOUNCE_MS";
pub const BREAKPOINT_VAR: &str = "EDU_ADMIN_MOBILE_BREAKPOINT";
pub const LOG_VAR: &str = "EDU_ADMIN_LOG";
pub const DB_PATH_VAR: &str = "EDU_ADMIN_DB_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: Url,
    pub debounce: Duration,
    pub mobile_breakpoint: f64,
    pub log_level: Level,
    pub db_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves every setting through `lookup`; unusable values fall back to
    /// the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_VAR)
            .and_then(|raw| match Url::parse(&raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    warn!(var = BASE_URL_VAR, value = %raw, error = %err, "ignoring invalid base url");
                    None
                }
            })
            .unwrap_or_else(default_base_url);

        let debounce = lookup(DEBOUNCE_VAR)
            .and_then(|raw| parse_or_warn::<u64>(DEBOUNCE_VAR, &raw))
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE);

        let mobile_breakpoint = lookup(BREAKPOINT_VAR)
            .and_then(|raw| parse_or_warn::<f64>(BREAKPOINT_VAR, &raw))
            .filter(|px| *px > 0.0)
            .unwrap_or(DEFAULT_MOBILE_BREAKPOINT);

        let log_level = lookup(LOG_VAR)
            .and_then(|raw| parse_or_warn::<Level>(LOG_VAR, &raw))
            .unwrap_or(Level::INFO);

        let db_path = lookup(DB_PATH_VAR)
            .map(PathBuf::from)
            .or_else(|| default_db_path().ok());

        Self {
            base_url,
            debounce,
            mobile_breakpoint,
            log_level,
            db_path,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_or_warn<T>(var: &str, raw: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(var, value = %raw, error = %err, "ignoring invalid setting");
            None
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url should parse")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_db_path() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("com", "hellhbbd", "edu-admin")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join("preferences.sqlite"))
}

#[cfg(target_arch = "wasm32")]
pub fn default_db_path() -> Result<PathBuf> {
    Err(anyhow!("no local data directory in the browser"))
}
