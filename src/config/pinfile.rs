//! PIN overlay loading.
//!
//! The `pinfile` document is a flat `token name -> PIN` mapping in the same
//! format as the main configuration. It keeps secrets out of the main file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::format::DocumentFormat;
use crate::config::schema::{Config, ScalarString};

/// Read a PIN overlay document.
pub fn read_pin_file(path: &Path, format: DocumentFormat) -> ConfigResult<BTreeMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    // A null entry (`tok: ~`) is an empty PIN.
    let pins: BTreeMap<String, Option<ScalarString>> =
        format.parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(pins
        .into_iter()
        .map(|(token, pin)| (token, pin.map(|p| p.0).unwrap_or_default()))
        .collect())
}

impl Config {
    /// Merge the `pinfile` overlay into the token set, if one is declared.
    ///
    /// Overlay PINs replace PINs from the main document. Entries naming a
    /// token that is not configured are skipped.
    pub fn apply_pin_file(&mut self) -> ConfigResult<()> {
        let Some(pin_file) = self.pin_file.clone().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };
        let format = DocumentFormat::from_path(&self.path);
        let pins = read_pin_file(&pin_file, format)?;
        tracing::debug!(path = %pin_file.display(), entries = pins.len(), "Read PIN file");
        self.merge_pins(pins);
        Ok(())
    }

    /// Set token PINs from an already parsed overlay.
    pub fn merge_pins(&mut self, pins: BTreeMap<String, String>) {
        for (token_name, pin) in pins {
            match self.tokens.get_mut(&token_name) {
                Some(token) => token.pin = Some(pin),
                None => {
                    tracing::warn!(token = %token_name, "PIN file names a token that is not configured");
                }
            }
        }
    }
}
