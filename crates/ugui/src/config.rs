//! Page configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use ugui_dom::{Document, StyleMode};

/// Page rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render without inserted whitespace
    pub minify: bool,

    /// `true` inlines collected CSS, `false` drops it, a URL links it instead
    pub style: StyleMode,

    /// Spaces per nesting level in pretty output
    pub indent_size: usize,

    /// `lang` attribute of `<html>`
    pub lang: String,

    /// Component pack used by named components
    pub pack: Option<String>,

    /// Escape text and attribute values on output
    pub escape_text: bool,

    /// Directory of `<name>.svg` material icons
    pub icon_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minify: true,
            style: StyleMode::Enabled(true),
            indent_size: 2,
            lang: "en".to_string(),
            pack: None,
            escape_text: false,
            icon_dir: None,
        }
    }
}

impl Config {
    /// Parse a JSON configuration. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed output with the given indent
    pub fn pretty(indent_size: usize) -> Self {
        Self {
            minify: false,
            indent_size,
            ..Self::default()
        }
    }

    pub fn with_pack(mut self, pack: impl Into<String>) -> Self {
        self.pack = Some(pack.into());
        self
    }

    /// An empty document carrying these output settings
    pub fn document(&self) -> Document {
        Document::new()
            .with_minify(self.minify)
            .with_style(self.style.clone())
            .with_indent_size(self.indent_size)
            .with_lang(self.lang.as_str())
            .with_escape_text(self.escape_text)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
