use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::helpers::image_mime_type;

pub const DEFAULT_LOGO: &str = "templates/images/logo.png";
pub const DEFAULT_COLOR_THEME: &str = "templates/css/_variables.styl";
pub const DEFAULT_LANGUAGE_TABS: &[&str] = &[];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("language-tabs argument {0:?} is invalid")]
    InvalidLanguageTabs(String),

    #[error("Failed to read logo {path:?}: {source}")]
    LogoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Theme options as supplied by the caller; anything absent takes its default
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeArgs {
    pub logo: Option<PathBuf>,
    pub color_theme: Option<PathBuf>,
    pub language_tabs: Option<String>,
}

/// Resolved theme configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    pub logo_path: PathBuf,
    pub color_theme_path: PathBuf,
    pub language_tabs: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            logo_path: PathBuf::from(DEFAULT_LOGO),
            color_theme_path: PathBuf::from(DEFAULT_COLOR_THEME),
            language_tabs: DEFAULT_LANGUAGE_TABS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ThemeConfig {
    pub fn from_args(args: ThemeArgs) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let language_tabs = match args.language_tabs {
            Some(raw) => validate_language_tabs(&raw)?,
            None => defaults.language_tabs,
        };

        Ok(Self {
            logo_path: args.logo.unwrap_or(defaults.logo_path),
            color_theme_path: args.color_theme.unwrap_or(defaults.color_theme_path),
            language_tabs,
        })
    }

    pub fn load_logo(&self) -> Result<String, ConfigError> {
        load_logo(&self.logo_path)
    }
}

/// Read a logo image and return it as a `data:` URI typed by its extension
pub fn load_logo(path: &Path) -> Result<String, ConfigError> {
    let bytes = fs::read(path).map_err(|source| ConfigError::LogoRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!(
        "data:{};base64,{}",
        image_mime_type(path),
        general_purpose::STANDARD.encode(bytes)
    ))
}

/// Parse a JSON array of language names, e.g. `["json", "xml"]`; an empty string means none
pub fn validate_language_tabs(raw: &str) -> Result<Vec<String>, ConfigError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|_| ConfigError::InvalidLanguageTabs(raw.to_string()))?;
    language_tabs_from_value(&value)
}

/// Accept only an array whose elements are all strings
pub fn language_tabs_from_value(value: &serde_json::Value) -> Result<Vec<String>, ConfigError> {
    let invalid = || ConfigError::InvalidLanguageTabs(value.to_string());

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
