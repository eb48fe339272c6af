use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Folder scanned for price lists.
    pub data_dir: PathBuf,
    /// Where the HTML export is written.
    pub output_file: PathBuf,
    pub delimiter: String,
    /// Input that ends the search loop (any case).
    pub exit_word: String,
    /// Open the HTML export in the default viewer after an interactive export.
    pub open_after_export: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("prices"),
            output_file: PathBuf::from("output.html"),
            delimiter: ",".to_string(),
            exit_word: "exit".to_string(),
            open_after_export: true,
        }
    }
}

impl AppConfig {
    /// CSV delimiter as a byte; only single ASCII characters are allowed.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(ConfigError::Delimiter(self.delimiter.clone())),
        }
    }
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.delimiter_byte()?;
    Ok(config)
}
