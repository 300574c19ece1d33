use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use vestibule_model::RequestOptions;

pub const ENV_API_URL: &str = "VESTIBULE_API_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "VESTIBULE_REQUEST_TIMEOUT_SECS";
pub const ENV_RETRIES: &str = "VESTIBULE_RETRIES";

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Extra attempts for idempotent requests after a network failure
    pub retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            request_timeout_secs: 30,
            retries: 0,
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "vestibule")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Defaults, then the config file when present, then environment
    /// overrides. A malformed file is logged and skipped.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => {
                Self::load_from(&path, |key| std::env::var(key).ok())
            }
            None => {
                let mut config = Self::default();
                config.apply_env(|key| std::env::var(key).ok());
                config
            }
        }
    }

    /// Like [`Config::load`] for an explicit file and environment lookup.
    /// A missing file is seeded with the defaults so there is something to
    /// edit. Environment overrides are never written back.
    pub fn load_from(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut config = if path.exists() {
            match Self::read_file(path) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("[Config] Ignoring config file: {:#}", err);
                    Self::default()
                }
            }
        } else {
            let config = Self::default();
            match config.save_to(path) {
                Ok(()) => log::info!(
                    "[Config] Wrote default config to {}",
                    path.display()
                ),
                Err(err) => {
                    log::warn!("[Config] Could not seed config: {:#}", err)
                }
            }
            config
        };

        config.apply_env(lookup);
        config
    }

    pub fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))
    }

    /// Apply `VESTIBULE_*` overrides using the supplied lookup
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty())
        {
            self.api_base_url = url;
        }

        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            match raw.trim().parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => log::warn!(
                    "[Config] {} is not a number of seconds: '{}'",
                    ENV_REQUEST_TIMEOUT_SECS,
                    raw
                ),
            }
        }

        if let Some(raw) = lookup(ENV_RETRIES) {
            match raw.trim().parse() {
                Ok(retries) => self.retries = retries,
                Err(_) => log::warn!(
                    "[Config] {} is not a retry count: '{}'",
                    ENV_RETRIES,
                    raw
                ),
            }
        }
    }

    pub fn request_options(&self) -> RequestOptions {
        RequestOptions::default()
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_retries(self.retries)
    }

    /// Write the file atomically, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;

        let content = serde_json::to_vec_pretty(self)?;
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("creating temp in {}", dir.display()))?;
        tmp.write_all(&content)
            .with_context(|| format!("writing {}", path.display()))?;
        tmp.persist(path)
            .with_context(|| format!("replacing {}", path.display()))?;
        Ok(())
    }
}
