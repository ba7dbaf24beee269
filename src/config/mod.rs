//! Configuration model for the signing service.
//!
//! # Data Flow
//! ```text
//! config file (YAML/TOML)
//!     → loader.rs (read & hand off)
//!     → format.rs (structural deserialize)
//!     → normalize.rs
//!         → client fingerprints checked and lower-cased
//!         → pinfile.rs (PIN overlay merged into tokens)
//!         → token names and provider defaults
//!         → key names and token handles
//!     → Config (normalized, read-only by convention)
//!     → accessors.rs (lookups used by server, CLI and admin tools)
//! ```
//!
//! # Design Decisions
//! - Config is loaded once; there is no caching or hot reload
//! - Any load failure is fatal, there is no partial result
//! - Keys refer to tokens by name, never by ownership
//! - Key aliases resolve exactly one hop

pub mod accessors;
pub mod error;
pub mod format;
pub mod loader;
pub mod normalize;
pub mod pinfile;
pub mod schema;

pub use error::{ConfigError, ConfigResult, NotFoundError, ParseError, ValidationError};
pub use format::DocumentFormat;
pub use loader::load_config;
pub use schema::{
    AmqpConfig, ClientConfig, Config, KeyConfig, RemoteConfig, ServerConfig, TimestampConfig,
    TokenConfig, TokenType,
};
