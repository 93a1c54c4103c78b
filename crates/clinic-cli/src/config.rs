//! Optional TOML configuration.
//!
//! Looked up from `--config`, or `clinic.toml` in the working directory.
//! Command-line flags override anything set here.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::logging::LogFormat;

/// File name searched for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "clinic.toml";

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Folder holding the entity extracts.
    pub data_dir: PathBuf,
    /// Folder exported referral documents are written to.
    pub output_dir: PathBuf,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("."),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
    /// Level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: Option<String>,
    pub file: Option<PathBuf>,
    /// Prefix log lines with a timestamp (pretty and compact formats).
    pub timestamps: bool,
}

impl LoggingConfig {
    /// The configured level, if it names a valid level.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.level
            .as_deref()
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
    }
}

/// A loaded configuration and anything worth telling the user about it.
///
/// Logging is not set up while the config is read, so problems are carried
/// here and logged by the caller afterwards.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration came from, if any.
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Loads configuration.
///
/// With an explicit path the file must exist and parse. Without one,
/// `clinic.toml` in `cwd` is used when present; if it cannot be read or
/// parsed the defaults are used and a warning is recorded.
///
/// # Errors
///
/// Returns an error only for an explicit path that cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        return Ok(checked(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
            warnings: Vec::new(),
        }));
    }

    let path = cwd.join(DEFAULT_CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => Ok(checked(LoadedConfig {
                config,
                source: Some(path),
                warnings: Vec::new(),
            })),
            Err(e) => Ok(LoadedConfig {
                warnings: vec![format!(
                    "failed to parse {}: {e}, using defaults",
                    path.display()
                )],
                ..LoadedConfig::default()
            }),
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(LoadedConfig::default()),
        Err(e) => Ok(LoadedConfig {
            warnings: vec![format!(
                "failed to read {}: {e}, using defaults",
                path.display()
            )],
            ..LoadedConfig::default()
        }),
    }
}

/// Drops settings that parsed but cannot be used, recording a warning for each.
fn checked(mut loaded: LoadedConfig) -> LoadedConfig {
    let logging = &mut loaded.config.logging;
    if let Some(level) = &logging.level
        && logging.level_filter().is_none()
    {
        let source = loaded
            .source
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        loaded.warnings.push(format!(
            "unknown log level `{level}` in {}, ignoring it",
            source.display()
        ));
        logging.level = None;
    }
    loaded
}
