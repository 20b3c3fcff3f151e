//! Configuration import and export.
//!
//! This module provides the [`ConfigLoader`] type, which converts a whole
//! [`SalaryConfig`] to and from JSON or YAML text and files.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

use super::types::SalaryConfig;

/// Source label used in errors for text that did not come from a file.
pub const INLINE_SOURCE: &str = "<inline>";

/// Textual exchange formats for configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension; anything but `.yaml`/`.yml`
    /// is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

/// Converts configurations to and from their exchange formats.
///
/// Parsing is all-or-nothing: a document is only returned once it has been
/// fully decoded and passed [`SalaryConfig::validate`].
///
/// # Example
///
/// ```
/// use salary_engine::config::{ConfigFormat, ConfigLoader, SalaryConfig};
///
/// let config = SalaryConfig::default();
/// let text = ConfigLoader::render(&config, ConfigFormat::Json)?;
/// let back = ConfigLoader::parse(&text, ConfigFormat::Json)?;
/// assert_eq!(config, back);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parses configuration text.
    pub fn parse(text: &str, format: ConfigFormat) -> EngineResult<SalaryConfig> {
        Self::parse_from(text, format, INLINE_SOURCE)
    }

    fn parse_from(text: &str, format: ConfigFormat, source: &str) -> EngineResult<SalaryConfig> {
        let parsed: Result<SalaryConfig, String> = match format {
            ConfigFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        };

        let config = parsed.map_err(|message| {
            warn!(source, error = %message, "Configuration parse failed");
            EngineError::ConfigParseError {
                path: source.to_string(),
                message,
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Renders a configuration as text.
    pub fn render(config: &SalaryConfig, format: ConfigFormat) -> EngineResult<String> {
        let rendered = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
        };

        rendered.map_err(|message| EngineError::ConfigWriteError {
            path: INLINE_SOURCE.to_string(),
            message,
        })
    }

    /// Loads a configuration file, choosing the format by extension.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("./salary_config.json")?;
    /// println!("{} income items", config.income_items().len());
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<SalaryConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse_from(&content, ConfigFormat::from_path(path), &path_str)?;
        info!(path = %path_str, "Loaded configuration");
        Ok(config)
    }

    /// Writes a configuration file, choosing the format by extension.
    pub fn save<P: AsRef<Path>>(config: &SalaryConfig, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let text = Self::render(config, ConfigFormat::from_path(path))?;
        fs::write(path, text).map_err(|e| EngineError::ConfigWriteError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        info!(path = %path_str, "Saved configuration");
        Ok(())
    }
}
