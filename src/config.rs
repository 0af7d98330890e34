use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatConfig {
    /// Glyph that introduces a currency amount, e.g. `₹1,200`.
    pub currency_symbol: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Optional CSS classes for the HTML renderer. `None` emits the bare element.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HtmlConfig {
    pub paragraph_class: Option<String>,
    pub list_class: Option<String>,
    pub item_class: Option<String>,
    pub bold_class: Option<String>,
    pub bold_italic_class: Option<String>,
    pub italic_class: Option<String>,
    pub code_class: Option<String>,
    pub currency_class: Option<String>,
    /// Transcript bubbles, by sender
    pub assistant_class: Option<String>,
    pub user_class: Option<String>,
    /// Added to the bubble of a failed assistant reply
    pub error_class: Option<String>,
}

impl Config {
    /// The config bundled into the binary (validated by build.rs).
    pub fn compiled_default() -> Self {
        Self::from_toml(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Parse a config, failing on malformed TOML or unknown value types.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(config)) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Ok(None) => Self::compiled_default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config");
                Self::compiled_default()
            }
        }
    }

    /// Read and parse a config file the user named explicitly.
    /// Unlike `load`, a missing file is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Read and parse a config file. A missing file is `Ok(None)`.
    pub fn try_load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(path, e)),
        }
    }
}
