//! Configuration for validation and result output.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MikroError, Result};

/// Main configuration for mikro.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MikroConfig {
    /// Validation configuration.
    pub validation: ValidationConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Validation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Collect diagnostic trace lines and include them in reports.
    pub collect_trace: bool,
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// JSON report.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format.
    pub format: ReportFormat,

    /// Print account numbers in groups of four digits.
    pub group_digits: bool,

    /// Use colors in text output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            group_digits: true,
            color: true,
        }
    }
}

impl MikroConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| MikroError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: MikroConfig =
            serde_json::from_str(r#"{"output": {"format": "json"}}"#).unwrap();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.group_digits);
        assert!(!config.validation.collect_trace);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = MikroConfig::default();
        config.validation.collect_trace = true;
        config.output.color = false;
        config.save(&path).unwrap();

        assert_eq!(MikroConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = MikroConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, MikroError::Config(_)));
    }
}
