// Configuration utilities and TOML parsing

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::models::category::Category;
use crate::utils::error::{DirbotError, Result};

/// Default name of the optional configuration file in the working root
pub const CONFIG_FILE_NAME: &str = "dirbot.toml";

/// Complete dirbot configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirbotConfig {
    /// Working root every category directory is created under, as resolved
    /// by `ConfigParser::load`
    #[serde(skip)]
    pub root: PathBuf,
    /// `root` key of the configuration file; relative paths resolve against
    /// the directory holding the file
    #[serde(rename = "root", skip_serializing_if = "Option::is_none")]
    pub configured_root: Option<PathBuf>,
    pub roots: RootConfig,
    pub logging: LoggingConfig,
    pub periodic: PeriodicConfig,
}

/// Directory names of each category root, relative to the working root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub years: String,
    pub names: String,
    pub prefixes: String,
    pub timed: String,
    pub standardized: String,
}

/// Rotating log file settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path; relative paths resolve against the working root
    pub file: PathBuf,
    /// Size in bytes after which the file is rotated
    pub max_bytes: u64,
    /// Number of rotated files kept next to the active one
    pub max_files: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodicConfig {
    /// Seconds to wait between timed folder creations
    pub interval_secs: u64,
}

impl Default for DirbotConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            configured_root: None,
            roots: RootConfig::default(),
            logging: LoggingConfig::default(),
            periodic: PeriodicConfig::default(),
        }
    }
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            years: Category::Range.default_dir_name().to_string(),
            names: Category::Named.default_dir_name().to_string(),
            prefixes: Category::Prefixed.default_dir_name().to_string(),
            timed: Category::Timed.default_dir_name().to_string(),
            standardized: Category::Standardized.default_dir_name().to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("project.log"),
            max_bytes: 100 * 1024,
            max_files: 3,
        }
    }
}

impl Default for PeriodicConfig {
    fn default() -> Self {
        Self { interval_secs: 5 }
    }
}

impl RootConfig {
    /// Directory name configured for a category
    pub fn dir_name(&self, category: Category) -> &str {
        match category {
            Category::Range => &self.years,
            Category::Named => &self.names,
            Category::Prefixed => &self.prefixes,
            Category::Timed => &self.timed,
            Category::Standardized => &self.standardized,
        }
    }
}

impl DirbotConfig {
    /// Absolute-or-relative path of a category root
    pub fn category_root(&self, category: Category) -> PathBuf {
        self.root.join(self.roots.dir_name(category))
    }

    /// Log file path resolved against the working root
    pub fn log_file(&self) -> PathBuf {
        if self.logging.file.is_absolute() {
            self.logging.file.clone()
        } else {
            self.root.join(&self.logging.file)
        }
    }

    pub fn periodic_interval(&self) -> Duration {
        Duration::from_secs(self.periodic.interval_secs)
    }
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load configuration and resolve the working root.
    ///
    /// The file is `explicit` when given (it must exist), otherwise
    /// `dirbot.toml` in `cli_root` or `cwd` when present; defaults are used
    /// without a file. The root is `cli_root`, then the file's `root` key,
    /// then `cwd`.
    pub fn load(cwd: &Path, cli_root: Option<&Path>, explicit: Option<&Path>) -> Result<DirbotConfig> {
        let search_root = cli_root.unwrap_or(cwd);
        let config_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Some(search_root.join(CONFIG_FILE_NAME)).filter(|candidate| candidate.is_file()),
        };

        let mut config = match &config_path {
            Some(path) => Self::load_file(path)?,
            None => DirbotConfig::default(),
        };

        config.root = match (cli_root, &config.configured_root) {
            (Some(root), _) => root.to_path_buf(),
            (None, Some(configured)) if configured.is_absolute() => configured.clone(),
            (None, Some(configured)) => {
                let base = config_path
                    .as_deref()
                    .and_then(Path::parent)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
                base.join(configured)
            }
            (None, None) => cwd.to_path_buf(),
        };

        Self::validate(&config)?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn load_file(path: &Path) -> Result<DirbotConfig> {
        if !path.exists() {
            return Err(DirbotError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DirbotError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<DirbotConfig> {
        let config: DirbotConfig = toml::from_str(content)
            .map_err(|e| DirbotError::ConfigError(format!("Invalid TOML syntax: {e}")))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &DirbotConfig) -> Result<()> {
        for category in Category::all() {
            let name = config.roots.dir_name(*category);
            if name.trim().is_empty() {
                return Err(DirbotError::ConfigError(format!(
                    "Root directory name for {category} must not be empty"
                )));
            }
            if Path::new(name).is_absolute() {
                return Err(DirbotError::ConfigError(format!(
                    "Root directory for {category} must be relative to the working root"
                )));
            }
        }

        if config
            .configured_root
            .as_ref()
            .is_some_and(|root| root.as_os_str().is_empty())
        {
            return Err(DirbotError::ConfigError(
                "root must not be empty".to_string(),
            ));
        }

        if config.logging.max_bytes == 0 {
            return Err(DirbotError::ConfigError(
                "logging.max_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
