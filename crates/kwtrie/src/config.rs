//! Configuration parsing and validation.
//!
//! Handles kwtrie.toml parsing with version validation and unknown key warnings.
//! Unknown keys are reported on stderr and ignored, so configs written for a
//! newer kwtrie still load.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::normalize::is_blank;
use crate::options::{KNOWN_OPTION_KEYS, TrieOptions};

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    version: Option<i64>,

    #[serde(default)]
    keywords: Option<toml::Value>,

    #[serde(default)]
    keywords_file: Option<PathBuf>,

    #[serde(default)]
    options: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Keywords to search for.
    pub keywords: Vec<String>,

    /// File with one keyword per line, relative to the config file.
    pub keywords_file: Option<PathBuf>,

    /// Matching options.
    pub options: TrieOptions,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "kwtrie.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "keywords", "keywords_file", "options"];

impl Config {
    /// Keywords listed inline plus those read from `keywords_file`.
    ///
    /// A relative `keywords_file` resolves against `config_path`'s directory.
    pub fn all_keywords(&self, config_path: &Path) -> Result<Vec<String>> {
        let mut keywords = self.keywords.clone();
        if let Some(file) = &self.keywords_file {
            let file = match config_path.parent() {
                Some(dir) if file.is_relative() => dir.join(file),
                _ => file.clone(),
            };
            keywords.extend(read_keywords_file(&file)?);
        }
        Ok(keywords)
    }
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| config_error(e, path))?;
    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;
    check_version(version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let keywords = match flexible.keywords {
        Some(value) => value
            .try_into::<Vec<String>>()
            .map_err(|e| config_error(e, path))?,
        None => Vec::new(),
    };

    let options = match flexible.options {
        Some(toml::Value::Table(mut table)) => {
            let unknown: Vec<String> = table
                .keys()
                .filter(|k| !KNOWN_OPTION_KEYS.contains(&k.as_str()))
                .cloned()
                .collect();
            for key in unknown {
                warn_unknown_key(path, &format!("options.{}", key));
                table.remove(&key);
            }
            toml::Value::Table(table)
                .try_into::<TrieOptions>()
                .map_err(|e| config_error(e, path))?
        }
        Some(_) => {
            return Err(Error::Config {
                message: "`options` must be a table".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
        None => TrieOptions::default(),
    };

    Ok(Config {
        version,
        keywords,
        keywords_file: flexible.keywords_file,
        options,
    })
}

/// Read one keyword per line, skipping blank lines.
pub fn read_keywords_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let keywords: Vec<String> = content
        .lines()
        .filter(|line| !is_blank(line))
        .map(String::from)
        .collect();
    tracing::debug!(path = %path.display(), count = keywords.len(), "read keywords file");
    Ok(keywords)
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn config_error(e: impl std::fmt::Display, path: &Path) -> Error {
    Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "kwtrie: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
