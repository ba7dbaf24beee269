//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::error::{ConfigError, ConfigResult, ParseError};
use crate::config::format::DocumentFormat;
use crate::config::schema::Config;

/// Load and normalize configuration from a YAML or TOML file.
///
/// Any failure aborts the whole load; a `Config` is only returned once
/// parsing, the PIN overlay and normalization have all succeeded.
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config = parse_config(&content, DocumentFormat::from_path(path)).map_err(|source| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    config.path = path.to_path_buf();
    config.normalize()?;

    tracing::info!(
        path = %path.display(),
        tokens = config.tokens.len(),
        keys = config.keys.len(),
        clients = config.clients.len(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Deserialize a document without normalizing it.
pub fn parse_config(content: &str, format: DocumentFormat) -> Result<Config, ParseError> {
    let config: Config = format.parse(content)?;
    tracing::debug!(format = ?format, "Parsed configuration document");
    Ok(config)
}

impl Config {
    /// Read a configuration file. See [`load_config`].
    pub fn read_file(path: impl AsRef<Path>) -> ConfigResult<Config> {
        load_config(path.as_ref())
    }
}
