//! Runtime configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, an optional TOML
//! file, and command-line flags. TOML support lives behind the `config` cargo feature
//! (enabled by default).

use crate::error::{Result, RosterError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Backing file used when nothing else is configured.
pub const DEFAULT_STORE_PATH: &str = "students.txt";

/// Application directory name under the platform config dir.
pub const APP_DIR: &str = "student-roster";

/// Name of the configuration file inside [`APP_DIR`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Selectable color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

impl ThemeName {
    pub const VARIANTS: [&'static str; 3] = ["default", "monochrome", "high-contrast"];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Monochrome => "monochrome",
            ThemeName::HighContrast => "high-contrast",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(ThemeName::Default),
            "monochrome" => Ok(ThemeName::Monochrome),
            "high-contrast" => Ok(ThemeName::HighContrast),
            other => Err(RosterError::InvalidArgument {
                message: format!(
                    "unknown theme '{other}' (expected one of: {})",
                    Self::VARIANTS.join(", ")
                ),
            }),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct Config {
    /// Backing file for the record store
    pub store_path: PathBuf,
    /// Color theme for the terminal UI
    pub theme: ThemeName,
    /// Log destination; stderr when unset
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            theme: ThemeName::default(),
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub store_path: Option<PathBuf>,
    pub theme: Option<ThemeName>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Resolve the configuration.
    ///
    /// An explicit `path` must exist. Without one, the per-user config file is read when
    /// present and defaults are used otherwise.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        Ok(base.with_overrides(overrides))
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(store_path) = overrides.store_path {
            self.store_path = store_path;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self
    }

    /// Per-user configuration file location
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
    }

    #[cfg(not(feature = "config"))]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    /// Parse a TOML configuration document
    #[cfg(feature = "config")]
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| RosterError::config(err.to_string()))
    }

    #[cfg(feature = "config")]
    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            RosterError::config(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_toml(&text).map_err(|err| match err {
            RosterError::ConfigError { message } => {
                RosterError::config(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    #[cfg(not(feature = "config"))]
    fn from_file(path: &Path) -> Result<Self> {
        Err(RosterError::config(format!(
            "cannot load {}: built without the `config` feature",
            path.display()
        )))
    }
}
