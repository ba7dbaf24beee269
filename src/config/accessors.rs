//! Read-only lookups over a normalized [`Config`].
//!
//! `new_token`/`new_key` are the only mutators. They exist for callers that
//! build a configuration programmatically and must run before the tree is
//! shared.

use std::path::Path;

use crate::config::error::{ConfigResult, NotFoundError, ValidationError};
use crate::config::normalize::normalize_fingerprint;
use crate::config::schema::{ClientConfig, Config, KeyConfig, TimestampConfig, TokenConfig};

impl Config {
    /// Look up a token by name.
    pub fn get_token(&self, name: &str) -> ConfigResult<&TokenConfig> {
        if self.tokens.is_empty() {
            return Err(NotFoundError::NoTokens.into());
        }
        self.tokens.get(name).ok_or_else(|| {
            NotFoundError::Token {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Insert an empty token, replacing any existing one with the same name.
    pub fn new_token(&mut self, name: &str) -> &mut TokenConfig {
        let token = self.tokens.entry(name.to_string()).or_default();
        *token = TokenConfig {
            name: name.to_string(),
            ..Default::default()
        };
        token
    }

    /// Look up a key by name, following at most one alias.
    ///
    /// Alias resolution is deliberately single-hop: if the alias target is
    /// itself an alias, the target is returned as-is and is not followed
    /// further. The returned key must name a token.
    pub fn get_key(&self, name: &str) -> ConfigResult<&KeyConfig> {
        let mut key = self.keys.get(name).ok_or_else(|| NotFoundError::Key {
            name: name.to_string(),
        })?;
        if let Some(target) = key.alias_name() {
            key = self.keys.get(target).ok_or_else(|| NotFoundError::AliasTarget {
                alias: name.to_string(),
                target: target.to_string(),
            })?;
        }
        if key.token_name().is_none() {
            return Err(ValidationError::MissingToken {
                key: name.to_string(),
            }
            .into());
        }
        Ok(key)
    }

    /// Insert an empty key, replacing any existing one with the same name.
    pub fn new_key(&mut self, name: &str) -> &mut KeyConfig {
        let key = self.keys.entry(name.to_string()).or_default();
        *key = KeyConfig {
            name: name.to_string(),
            ..Default::default()
        };
        key
    }

    /// Token a key was resolved to during normalization.
    ///
    /// `None` if the key names no token or names one that is not configured.
    pub fn token_for(&self, key: &KeyConfig) -> Option<&TokenConfig> {
        key.resolved_token
            .as_deref()
            .and_then(|name| self.tokens.get(name))
    }

    /// Timestamp settings, provided at least one URL is configured.
    pub fn get_timestamp_config(&self) -> ConfigResult<&TimestampConfig> {
        let timestamp = self
            .timestamp
            .as_ref()
            .ok_or(NotFoundError::NoTimestampSection)?;
        if timestamp.urls.is_empty() {
            return Err(NotFoundError::NoTimestampUrls.into());
        }
        Ok(timestamp)
    }

    /// Look up a client by fingerprint, in any letter case.
    pub fn client(&self, fingerprint: &str) -> Option<&ClientConfig> {
        let key = normalize_fingerprint(fingerprint).ok()?;
        self.clients.get(&key)
    }

    /// Keys that are not hidden from listings, in name order.
    pub fn visible_keys(&self) -> impl Iterator<Item = &KeyConfig> {
        self.keys.values().filter(|key| !key.hide)
    }

    /// Path this configuration was loaded from. Empty if built in memory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
