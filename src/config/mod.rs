use std::env;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub frontend_url: String,
    pub app_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Config {
            database: DatabaseConfig::from_lookup(&lookup)?,
            jwt_secret,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port: parse_or(&lookup, "PORT", 3001)?,
            frontend_url: lookup("FRONTEND_URL")
                .unwrap_or_else(|| "http://localhost:3000".into()),
            app_version: lookup("APP_VERSION").unwrap_or_else(|| "1.0.0".into()),
        })
    }
}

impl DatabaseConfig {
    /// Reads only the database settings, for tools that never issue tokens.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(&|name: &str| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(lookup, "DB_PORT", 5432)?,
            name: lookup("DB_NAME").unwrap_or_else(|| "nutrifitt".into()),
            user: lookup("DB_USER").unwrap_or_else(|| "postgres".into()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            max_connections: parse_or(lookup, "DB_MAX_CONNECTIONS", 10)?,
        })
    }

    /// `DATABASE_URL` wins over the individual `DB_*` parts.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password))
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        _ => Ok(default),
    }
}
