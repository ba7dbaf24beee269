//! Configuration model for the relic code-signing service.

pub mod build_info;
pub mod config;
pub mod observability;

pub use build_info::BuildInfo;
pub use config::{load_config, Config, ConfigError, ConfigResult};
