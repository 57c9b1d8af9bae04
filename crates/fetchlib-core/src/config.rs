use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory the libraries are written to when nothing else is configured.
pub const DEFAULT_TARGET_DIR: &str = "lib";

/// Global configuration, optionally loaded from `~/.config/fetchlib/config.toml`.
///
/// Every field has a default, so a partial file (or no file at all) is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Directory the fetched files are written into, relative to the working directory.
    pub target_dir: PathBuf,
    /// Connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per request (connect + transfer), in seconds.
    pub timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirections: 10,
        }
    }
}

impl FetchConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Location of the user config file, if one exists in the XDG config dirs.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetchlib")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from an explicit file.
pub fn load(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load the user config file if present, otherwise built-in defaults. Never writes a file.
pub fn load_or_default() -> Result<FetchConfig> {
    match config_path()? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load(&path)
        }
        None => Ok(FetchConfig::default()),
    }
}
