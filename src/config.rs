//! Configuration loading.
//!
//! Sources, lowest precedence first:
//! 1. Defaults in code
//! 2. `config/<environment>.toml` (optional)
//! 3. Environment variables with the `CRM_` prefix, e.g. `CRM_SERVER__PORT=8080`

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub reporting: ReportingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite:data.db`
    pub url: String,
    pub max_connections: u32,
    /// Create the tables on startup when they are missing
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportingConfig {
    /// Identifier that selects the administrator dashboard
    pub admin_token: String,
    /// Directory served under `/static`; charts are written to its `img/` subdirectory
    pub static_dir: PathBuf,
}

impl ReportingConfig {
    pub fn chart_dir(&self) -> PathBuf {
        self.static_dir.join("img")
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CRM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:data.db")?
            .set_default("database.max_connections", 5)?
            .set_default("database.run_migrations", true)?
            .set_default("reporting.admin_token", "admin")?
            .set_default("reporting.static_dir", "static")?
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::with_prefix("CRM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            reporting: ReportingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:data.db".to_string(),
            max_connections: 5,
            run_migrations: true,
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            admin_token: "admin".to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}
