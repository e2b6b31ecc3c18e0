use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::axis::Axis;
use crate::output::DEFAULT_DELIMITER;

pub const DEFAULT_CONFIG_FILE: &str = "norm_config.toml";
pub const DEFAULT_INPUT: &str = "mac_out.txt";
pub const DEFAULT_QUANTIZE_BITS: i64 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    MissingFile(PathBuf),
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("toml parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    #[serde(rename = "INPUT")]
    pub input: PathBuf,
    #[serde(rename = "AXIS")]
    pub axis: Axis,
    #[serde(rename = "OUTPUT", skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(rename = "QUANTIZE")]
    pub quantize: bool,
    #[serde(rename = "QUANTIZE_BITS")]
    pub quantize_bits: i64,
    #[serde(rename = "DELIMITER")]
    pub delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            axis: Axis::Row,
            output: None,
            quantize: false,
            quantize_bits: DEFAULT_QUANTIZE_BITS,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

/// A partial set of settings. Used both for the config file and for
/// explicit command-line overrides; unset fields fall through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(rename = "INPUT")]
    pub input: Option<PathBuf>,
    #[serde(rename = "AXIS")]
    pub axis: Option<Axis>,
    #[serde(rename = "OUTPUT")]
    pub output: Option<PathBuf>,
    #[serde(rename = "QUANTIZE")]
    pub quantize: Option<bool>,
    #[serde(rename = "QUANTIZE_BITS")]
    pub quantize_bits: Option<i64>,
    #[serde(rename = "DELIMITER")]
    pub delimiter: Option<String>,
}

impl Config {
    pub fn merge(self, layer: &ConfigLayer) -> Config {
        Config {
            input: layer.input.clone().unwrap_or(self.input),
            axis: layer.axis.unwrap_or(self.axis),
            output: layer.output.clone().or(self.output),
            quantize: layer.quantize.unwrap_or(self.quantize),
            quantize_bits: layer.quantize_bits.unwrap_or(self.quantize_bits),
            delimiter: layer.delimiter.clone().unwrap_or(self.delimiter),
        }
    }
}

/// explicit > file > built-in default
pub fn resolve(file: Option<&ConfigLayer>, explicit: &ConfigLayer) -> Config {
    let base = Config::default();
    let base = match file {
        Some(layer) => base.merge(layer),
        None => base,
    };
    base.merge(explicit)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Built-in defaults only.
    Disabled,
    /// `norm_config.toml` in the working directory, if present.
    Default,
    /// A named file that must exist.
    File(PathBuf),
}

impl ConfigSource {
    pub fn from_flags(path: Option<PathBuf>, no_config: bool) -> Self {
        match (no_config, path) {
            (true, _) => ConfigSource::Disabled,
            (false, Some(path)) => ConfigSource::File(path),
            (false, None) => ConfigSource::Default,
        }
    }
}

pub fn load_layer(source: &ConfigSource) -> Result<Option<ConfigLayer>, ConfigError> {
    match source {
        ConfigSource::Disabled => Ok(None),
        ConfigSource::Default => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if !path.is_file() {
                debug!(path = DEFAULT_CONFIG_FILE, "no config file, using defaults");
                return Ok(None);
            }
            read_layer(path).map(Some)
        }
        ConfigSource::File(path) => {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.clone()));
            }
            read_layer(path).map(Some)
        }
    }
}

pub fn read_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_layer(&text).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_layer(text: &str) -> Result<ConfigLayer, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/mod.rs"]
mod tests;
