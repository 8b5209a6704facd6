use dotenv::dotenv;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_POOL_MAX_SIZE: usize = 16;
const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 5;
const DEFAULT_BULK_INSERT_MAX_ROWS: usize = 1000;
// PostgreSQL caps a statement at 65535 bind parameters; the widest insert binds 6 per row.
pub const MAX_BULK_INSERT_ROWS: usize = 65535 / 6;
const DEFAULT_LOG_CONFIG: &str = "./log-config.yml";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("failed to parse {name} from {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_ca_file: Option<String>,
    pub database_pool_max_size: usize,
    pub database_pool_timeout: Duration,
    pub server_host: String,
    pub server_port: u16,
    pub bulk_insert_max_rows: usize,
    pub log_config_path: String,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        dotenv().ok();
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database_ca_file = var("DATABASE_CA_FILE");
        let database_pool_max_size = parse_or(
            "DATABASE_POOL_MAX_SIZE",
            var("DATABASE_POOL_MAX_SIZE"),
            DEFAULT_POOL_MAX_SIZE,
        )?;
        let database_pool_timeout_secs = parse_or(
            "DATABASE_POOL_TIMEOUT_SECS",
            var("DATABASE_POOL_TIMEOUT_SECS"),
            DEFAULT_POOL_TIMEOUT_SECS,
        )?;
        let server_host = var("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());
        let server_port = parse_or("SERVER_PORT", var("SERVER_PORT"), DEFAULT_SERVER_PORT)?;
        let bulk_insert_max_rows = parse_or(
            "BULK_INSERT_MAX_ROWS",
            var("BULK_INSERT_MAX_ROWS"),
            DEFAULT_BULK_INSERT_MAX_ROWS,
        )?;
        let log_config_path = var("LOG_CONFIG").unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());

        if database_pool_max_size == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_POOL_MAX_SIZE",
                value: "0".to_string(),
            });
        }
        if database_pool_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_POOL_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        if bulk_insert_max_rows == 0 || bulk_insert_max_rows > MAX_BULK_INSERT_ROWS {
            return Err(ConfigError::Invalid {
                name: "BULK_INSERT_MAX_ROWS",
                value: bulk_insert_max_rows.to_string(),
            });
        }

        Ok(Config {
            database_url,
            database_ca_file,
            database_pool_max_size,
            database_pool_timeout: Duration::from_secs(database_pool_timeout_secs),
            server_host,
            server_port,
            bulk_insert_max_rows,
            log_config_path,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
