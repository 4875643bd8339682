//! Config file discovery.
//!
//! An explicit `-C`/`--config` path (or `KWTRIE_CONFIG`, via clap) wins.
//! Otherwise the directories from the cwd up to the enclosing git root are
//! searched for kwtrie.toml. Without either, built-in defaults apply.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};

/// Where the active configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line or in `KWTRIE_CONFIG`.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// No config file; defaults apply.
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }
}

/// Nearest kwtrie.toml at or above `start_dir`, not crossing a git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Pick the config for a run started in `cwd`.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<ConfigSource> {
    let source = match explicit {
        Some(path) if path.is_file() => ConfigSource::Explicit(path.to_path_buf()),
        Some(path) => {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        None => find_config(cwd).map_or(ConfigSource::Defaults, ConfigSource::Discovered),
    };
    tracing::debug!(?source, "resolved config");
    Ok(source)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
