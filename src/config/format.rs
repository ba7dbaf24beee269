//! Document deserialization.
//!
//! Structural parse only: no cross-references are checked here.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::error::ParseError;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Picks the format from the file extension. Anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }

    /// Deserialize `content` into `T`.
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, ParseError> {
        match self {
            DocumentFormat::Yaml => {
                // An empty YAML document is a null value, not an empty mapping.
                if content.trim().is_empty() {
                    return Ok(serde_yaml::from_str("{}")?);
                }
                Ok(serde_yaml::from_str(content)?)
            }
            DocumentFormat::Toml => Ok(toml::from_str(content)?),
        }
    }
}
