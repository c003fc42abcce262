//! Configuration loading
//!
//! Reads `~/.config/quickreply/config.toml`. Every field has a default, so a
//! missing file or an empty one both yield [`Config::default`].

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{ComposerConfig, Config, ConversationConfig};

use crate::error::QuickReplyError;

const CONFIG_DIR: &str = "quickreply";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location, falling back to defaults when
/// the file does not exist.
pub fn load_config() -> Result<Config, QuickReplyError> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    match fs::read_to_string(&path) {
        Ok(contents) => parse_config_toml(&contents, &path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Load the config from an explicit path. The file must exist.
pub fn load_config_from_path(path: &Path) -> Result<Config, QuickReplyError> {
    let contents = fs::read_to_string(path)?;
    parse_config_toml(&contents, path)
}

pub fn parse_config_toml(content: &str, path: &Path) -> Result<Config, QuickReplyError> {
    toml::from_str::<Config>(content).map_err(|e| QuickReplyError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
