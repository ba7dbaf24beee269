//! Inspection CLI for relic signing-service configuration.
//!
//! Loads a configuration the same way the server does and reports what it
//! resolved to. PINs are never printed.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use relic_config::observability::logging::{init_logging, DEFAULT_FILTER};
use relic_config::{load_config, BuildInfo, Config};

#[derive(Parser)]
#[command(name = "relic-config")]
#[command(about = "Check and inspect relic signing-service configuration", long_about = None)]
struct Cli {
    /// Configuration file (YAML, or TOML by extension).
    #[arg(short, long, env = "RELIC_CONFIG", default_value = "/etc/relic/relic.yml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and normalize the configuration, then print a summary
    Check,
    /// Show a token definition
    Token { name: String },
    /// Show a key definition, following its alias
    Key { name: String },
    /// List keys that are not hidden
    Keys,
    /// List authorized clients
    Clients,
    /// Print the user agent this build identifies as
    Version,
}

fn main() -> ExitCode {
    init_logging(DEFAULT_FILTER);
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Version = cli.command {
        println!("{}", BuildInfo::current().user_agent());
        return Ok(());
    }

    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Check => {
            let summary = json!({
                "path": config.path().display().to_string(),
                "tokens": config.tokens.len(),
                "keys": config.keys.len(),
                "clients": config.clients.len(),
                "server": config.server.is_some(),
                "remote": config.remote.is_some(),
                "timestamp": config.get_timestamp_config().is_ok(),
                "amqp": config.amqp.as_ref().map(|a| a.exchange_name()),
            });
            print_json(&summary)?;
        }
        Commands::Token { name } => {
            let token = config.get_token(&name)?;
            print_json(&json!({
                "name": token.name(),
                "type": token.token_type(),
                "pin_set": token.pin.is_some(),
                "config": token,
            }))?;
        }
        Commands::Key { name } => {
            let key = config.get_key(&name)?;
            print_json(&json!({
                "requested": name,
                "name": key.name(),
                "token": config.token_for(key).map(|t| t.name()),
                "config": key,
            }))?;
        }
        Commands::Keys => {
            print_json(&json!(list_keys(&config)))?;
        }
        Commands::Clients => {
            print_json(&json!(config.clients))?;
        }
        Commands::Version => {}
    }

    Ok(())
}

fn list_keys(config: &Config) -> Vec<serde_json::Value> {
    config
        .visible_keys()
        .map(|key| {
            json!({
                "name": key.name(),
                "token": key.token_name(),
                "alias": key.alias_name(),
                "roles": key.roles,
            })
        })
        .collect()
}

fn print_json(value: &serde_json::Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
