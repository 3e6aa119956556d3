//! CLI subcommands.

pub mod config;
pub mod generate;
pub mod validate;

use std::path::{Path, PathBuf};

use tracing::debug;

use mikro_core::MikroConfig;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mikro")
        .join("config.json")
}

/// Resolve the configuration file: the `--config` path if given, else the default.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load configuration, falling back to defaults when no file exists.
///
/// An explicitly requested file must exist.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<MikroConfig> {
    let path = config_path(explicit);

    if explicit.is_some() && !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }

    load_or_default(&path)
}

pub fn load_or_default(path: &Path) -> anyhow::Result<MikroConfig> {
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(MikroConfig::from_file(path)?)
    } else {
        Ok(MikroConfig::default())
    }
}
