use crate::error::CatalogError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Catalog configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Database connection URL (Postgres in production). Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Upper bound of the connection pool (default 10). Env var: `DATABASE_MAX_CONNECTIONS`.
    pub max_connections: u32,
    /// Apply pending migrations on connect (default true). Env var: `CATALOG_RUN_MIGRATIONS`.
    pub run_migrations: bool,
    /// Log every SQL statement through sqlx (default false). Env var: `DATABASE_SQL_LOGGING`.
    pub sql_logging: bool,
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, CatalogError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| CatalogError::Config("DATABASE_URL is required".to_owned()))?;
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                CatalogError::Config(format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got {v:?}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(Self {
            database_url,
            max_connections,
            run_migrations: lookup("CATALOG_RUN_MIGRATIONS").is_none_or(|v| is_truthy(&v)),
            sql_logging: lookup("DATABASE_SQL_LOGGING").is_some_and(|v| is_truthy(&v)),
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
