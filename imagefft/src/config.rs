//! Engine settings, loadable from TOML.
//!
//! ```toml
//! phase_shift = true
//! pad_fill = [0, 0, 0, 255]
//! rounding = "nearest"
//! ```
//!
//! Missing keys take their defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    layouts::{OPAQUE_WHITE, Rgba},
    transform::Rounding,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Centering phase offset of the forward transform.
    pub phase_shift: bool,
    /// Margin color of padded canvases.
    pub pad_fill: Rgba,
    pub rounding: Rounding,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            phase_shift: true,
            pad_fill: OPAQUE_WHITE,
            rounding: Rounding::Truncate,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|source| ConfigError::Toml { source })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path: &Path = path.as_ref();
        let text: String = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
