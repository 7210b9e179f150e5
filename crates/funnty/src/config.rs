//! Engine Configuration

use std::path::{Path, PathBuf};

use funnty_text::StyleConfig;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// Engine configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logical surface width in pixels
    pub surface_width: f32,

    /// Logical surface height in pixels
    pub surface_height: f32,

    /// Device pixels per logical pixel
    pub device_pixel_ratio: f32,

    /// Load the fonts installed on the system
    pub system_fonts: bool,

    /// Extra directories scanned for font files
    pub font_dirs: Vec<PathBuf>,

    /// Fetching missing families from Google Fonts
    pub remote_fonts: RemoteFontsConfig,

    /// Where downloads are written; the user's download directory when unset
    pub download_dir: Option<PathBuf>,

    /// Page the share link points at
    pub share_base_url: String,

    /// Style used when nothing else is given
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: 800.0,
            surface_height: 400.0,
            device_pixel_ratio: 1.0,
            system_fonts: true,
            font_dirs: Vec::new(),
            remote_fonts: RemoteFontsConfig::default(),
            download_dir: None,
            share_base_url: "https://funnty.app/".to_string(),
            style: StyleConfig::default(),
        }
    }
}

impl Config {
    /// Parse a JSON configuration; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// Read a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.display())))
    }

    /// `config.json` in the user's config directory, when one exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("funnty").join("config.json"))
            .filter(|path| path.is_file())
    }

    /// Download directory with the platform default filled in
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir.clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Remote font fetching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteFontsConfig {
    pub enabled: bool,

    /// Google Fonts CSS2 endpoint
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Downloaded font files are kept here; the user cache directory when unset
    pub cache_dir: Option<PathBuf>,
}

impl Default for RemoteFontsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://fonts.googleapis.com/css2".to_string(),
            timeout_secs: 10,
            cache_dir: None,
        }
    }
}

impl RemoteFontsConfig {
    /// Cache directory with the platform default filled in
    pub fn cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir.clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("funnty").join("fonts")))
    }
}
