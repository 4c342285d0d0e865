//! Configuration file loading
//!
//! Reads `<config dir>/mandi/config.toml` when present. A missing file
//! (or missing fields) falls back to defaults; a file that exists but
//! does not parse is a startup error.

mod types;

pub use types::{Config, ServerConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::MandiError;

/// Load the configuration
///
/// # Arguments
/// * `explicit_path` - Path given on the command line, if any. An
///   explicit path must exist; the default location may be absent.
pub fn load(explicit_path: Option<&Path>) -> Result<Config, MandiError> {
    match explicit_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| MandiError::Config(format!("{}: {}", path.display(), e)))?;
            parse(&raw, path)
        }
        None => match default_path() {
            Some(path) if path.exists() => {
                let raw = fs::read_to_string(&path)?;
                parse(&raw, &path)
            }
            _ => Ok(Config::default()),
        },
    }
}

fn parse(raw: &str, path: &Path) -> Result<Config, MandiError> {
    toml::from_str(raw).map_err(|e| MandiError::Config(format!("{}: {}", path.display(), e)))
}

/// Default config file location: `<config dir>/mandi/config.toml`
fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mandi").join("config.toml"))
}
