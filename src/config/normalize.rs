//! Normalization pass run once after deserialization.
//!
//! # Steps
//! 1. Client fingerprints: must be 64 hex characters, re-keyed lower-case
//! 2. PIN overlay merge (see `pinfile.rs`)
//! 3. Tokens: assign names, default the provider type to PKCS#11
//! 4. Keys: assign names, resolve the token handle
//!
//! The pass is idempotent: running it on a normalized tree changes nothing.
//! A key naming an undefined token is not an error here; the failure surfaces
//! when the key is looked up and its token is needed.

use std::collections::BTreeMap;

use crate::config::error::{ConfigResult, ValidationError};
use crate::config::schema::{ClientConfig, Config, TokenType};

/// Length of a hex-encoded SHA-256 digest.
const FINGERPRINT_HEX_LEN: usize = 64;

/// Validate and lower-case a client fingerprint.
pub fn normalize_fingerprint(fingerprint: &str) -> Result<String, ValidationError> {
    if fingerprint.len() != FINGERPRINT_HEX_LEN
        || !fingerprint.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(ValidationError::InvalidClientFingerprint {
            fingerprint: fingerprint.to_string(),
        });
    }
    Ok(fingerprint.to_ascii_lowercase())
}

impl Config {
    /// Finalize the tree: validate clients, merge PINs, resolve references.
    pub fn normalize(&mut self) -> ConfigResult<()> {
        self.normalize_clients()?;
        self.apply_pin_file()?;
        self.normalize_tokens();
        self.resolve_keys();
        Ok(())
    }

    fn normalize_clients(&mut self) -> Result<(), ValidationError> {
        let mut normalized: BTreeMap<String, ClientConfig> = BTreeMap::new();
        for (fingerprint, client) in std::mem::take(&mut self.clients) {
            let key = normalize_fingerprint(&fingerprint)?;
            if normalized.insert(key, client).is_some() {
                tracing::debug!(fingerprint = %fingerprint, "Client fingerprint duplicates another entry, later one wins");
            }
        }
        self.clients = normalized;
        Ok(())
    }

    fn normalize_tokens(&mut self) {
        for (name, token) in self.tokens.iter_mut() {
            token.name.clone_from(name);
            if token.provider_type.is_none() {
                token.provider_type = Some(TokenType::Pkcs11);
            }
        }
    }

    fn resolve_keys(&mut self) {
        for (name, key) in self.keys.iter_mut() {
            key.name.clone_from(name);
            key.resolved_token = match key.token_name() {
                Some(token) if self.tokens.contains_key(token) => Some(token.to_string()),
                Some(token) => {
                    tracing::warn!(key = %name, token = %token, "Key names a token that is not configured");
                    None
                }
                None => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::error::ConfigError;
    use crate::config::schema::{KeyConfig, TokenConfig};

    const FP: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    #[test]
    fn test_fingerprint_lowercased() {
        let upper = FP.to_ascii_uppercase();
        assert_eq!(normalize_fingerprint(&upper).unwrap(), FP);
        assert_eq!(normalize_fingerprint(FP).unwrap(), FP);
    }

    #[test]
    fn test_fingerprint_rejects_bad_input() {
        let too_short = &FP[..63];
        let too_long = format!("{FP}0");
        let not_hex = format!("{}g", &FP[..63]);
        let multibyte = format!("{}é", &FP[..62]);
        for bad in [too_short, too_long.as_str(), not_hex.as_str(), multibyte.as_str(), ""] {
            assert!(
                matches!(
                    normalize_fingerprint(bad),
                    Err(ValidationError::InvalidClientFingerprint { .. })
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_normalize_rejects_bad_client() {
        let mut config = Config::default();
        config.clients.insert("abc".into(), ClientConfig::default());
        let err = config.normalize().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation(ValidationError::InvalidClientFingerprint { .. })
        ));
    }

    #[test]
    fn test_mixed_case_duplicates_collapse() {
        let mut config = Config::default();
        config.clients.insert(FP.to_ascii_uppercase(), ClientConfig::default());
        config.clients.insert(FP.to_string(), ClientConfig::default());
        config.normalize().unwrap();
        assert_eq!(config.clients.len(), 1);
        assert!(config.clients.contains_key(FP));
    }

    #[test]
    fn test_tokens_and_keys_finalized() {
        let mut config = Config::default();
        config.tokens.insert("hsm".into(), TokenConfig::default());
        config.tokens.insert(
            "disk".into(),
            TokenConfig {
                provider_type: Some(TokenType::File),
                ..Default::default()
            },
        );
        config.keys.insert(
            "release".into(),
            KeyConfig {
                token: Some("hsm".into()),
                ..Default::default()
            },
        );
        config.keys.insert(
            "orphan".into(),
            KeyConfig {
                token: Some("missing".into()),
                ..Default::default()
            },
        );
        config.normalize().unwrap();

        assert_eq!(config.tokens["hsm"].name(), "hsm");
        assert_eq!(config.tokens["hsm"].provider_type, Some(TokenType::Pkcs11));
        assert_eq!(config.tokens["disk"].provider_type, Some(TokenType::File));
        assert_eq!(config.keys["release"].name(), "release");
        assert_eq!(config.keys["release"].resolved_token.as_deref(), Some("hsm"));
        assert_eq!(config.keys["orphan"].resolved_token, None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut config = Config::default();
        config.clients.insert(FP.to_ascii_uppercase(), ClientConfig::default());
        config.tokens.insert("hsm".into(), TokenConfig::default());
        config.keys.insert(
            "release".into(),
            KeyConfig {
                token: Some("hsm".into()),
                ..Default::default()
            },
        );
        config.normalize().unwrap();
        config.normalize().unwrap();

        assert!(config.clients.contains_key(FP));
        assert_eq!(config.tokens["hsm"].name(), "hsm");
        assert_eq!(config.tokens["hsm"].provider_type, Some(TokenType::Pkcs11));
        assert_eq!(config.keys["release"].resolved_token.as_deref(), Some("hsm"));
    }
}
