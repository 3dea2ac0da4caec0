use std::env;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

/// Which Entity Store backs the schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!("unknown STORE_BACKEND '{other}'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub store_backend: StoreBackend,
    pub skip_migrations: bool,
    pub port: u16,
    pub introspection: bool,
    pub graphiql: bool,
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: 30,
            store_backend: StoreBackend::Postgres,
            skip_migrations: false,
            port: 5000,
            introspection: true,
            graphiql: true,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(default)
        };

        let store_backend = match lookup("STORE_BACKEND") {
            Some(v) => v.parse()?,
            None => defaults.store_backend,
        };
        let database_url = lookup("DATABASE_URL").filter(|v| !v.is_empty());
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORE_BACKEND is postgres");
        }

        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|e| anyhow!("invalid PORT '{v}': {e}"))?,
            None => defaults.port,
        };

        Ok(Self {
            database_url,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            store_backend,
            skip_migrations: flag("SKIP_MIGRATIONS", defaults.skip_migrations),
            port,
            introspection: flag("GQL_INTROSPECTION", defaults.introspection),
            graphiql: flag("GRAPHIQL", defaults.graphiql),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.allowed_origins),
        })
    }
}
