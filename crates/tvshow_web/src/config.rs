//! Process configuration, resolved once at startup.
//!
//! Every value comes from the environment (with `.env` support); the first
//! CLI argument overrides `PORT`. Invalid values are a startup error rather
//! than a silent fallback.

use db::DbConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub db: DbConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid port number: {value}")]
    InvalidPort { name: &'static str, value: String },
    #[error("DB_USER must be set")]
    MissingDbUser,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(std::env::args().nth(1), |name| std::env::var(name).ok())
    }

    fn from_sources(
        arg_port: Option<String>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = parse_port("PORT", arg_port.or_else(|| var("PORT")), 3000)?;
        let db = DbConfig {
            host: var("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_port("DB_PORT", var("DB_PORT"), 3306)?,
            user: var("DB_USER").ok_or(ConfigError::MissingDbUser)?,
            password: var("DB_PASS").unwrap_or_default(),
            database: var("DB_NAME").unwrap_or_else(|| "leisureasy".to_string()),
        };
        Ok(Self { port, db })
    }
}

fn parse_port(
    name: &'static str,
    value: Option<String>,
    default: u16,
) -> Result<u16, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort { name, value }),
        None => Ok(default),
    }
}
