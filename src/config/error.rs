//! Error types for configuration loading and lookup.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, normalizing or querying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration or PIN file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document was not well-formed or did not match the schema.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The document parsed but violates a structural invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A requested entry does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Format-specific deserialization failure.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Client mapping key is not 64 hex characters.
    #[error("client key {fingerprint:?} is not a hex-encoded SHA-256 digest of the public key")]
    InvalidClientFingerprint { fingerprint: String },

    /// Key (after alias indirection) names no token.
    #[error("key {key:?} does not specify required value 'token'")]
    MissingToken { key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("no tokens defined in configuration")]
    NoTokens,

    #[error("token {name:?} not found in configuration")]
    Token { name: String },

    #[error("key {name:?} not found in configuration")]
    Key { name: String },

    #[error("alias {alias:?} points to undefined key {target:?}")]
    AliasTarget { alias: String, target: String },

    #[error("no timestamp section exists in the configuration")]
    NoTimestampSection,

    #[error("no timestamp urls are defined in the configuration")]
    NoTimestampUrls,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
