use std::env;
use std::sync::Arc;

use persistence::db::{ConnectionManager, DatabaseConfig};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
}

/// Build the database settings from environment variables
///
/// Environment variables:
/// - DB_SERVER: store host (default: "localhost")
/// - DB_DATABASE: database name (required)
/// - DB_USER: user name (required)
/// - DB_PASSWORD: password (default: empty)
/// - DB_PORT: store port (default: 1433)
/// - DB_MAX_CONNECTIONS: pool size (default: 10)
pub fn database_config_from_env() -> Result<DatabaseConfig, ConfigError> {
    database_config_from(|key| env::var(key).ok())
}

fn database_config_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<DatabaseConfig, ConfigError> {
    let host = lookup("DB_SERVER").unwrap_or_else(|| "localhost".to_string());
    let database = lookup("DB_DATABASE").ok_or(ConfigError::MissingVariable("DB_DATABASE"))?;
    let user = lookup("DB_USER").ok_or(ConfigError::MissingVariable("DB_USER"))?;
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let port = lookup("DB_PORT")
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DatabaseConfig::DEFAULT_PORT);

    let mut config = DatabaseConfig::new(host, port, database, user, password);
    if let Some(max) = lookup("DB_MAX_CONNECTIONS").and_then(|m| m.trim().parse().ok()) {
        config.max_connections = max;
    }
    Ok(config)
}

/// Initialize the connection manager and open the pool
///
/// # Errors
/// Returns error if a required variable is missing or the store rejects
/// the connection. Either one aborts startup.
pub async fn init_database() -> anyhow::Result<Arc<ConnectionManager>> {
    let manager = Arc::new(ConnectionManager::new(database_config_from_env()?));
    manager.connect().await?;
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_apply_defaults_for_optional_variables() {
        let config =
            database_config_from(lookup_in(&[("DB_DATABASE", "shop"), ("DB_USER", "app")]))
                .unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 1433);
        assert_eq!(config.password, "");
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn should_read_every_configured_variable() {
        let config = database_config_from(lookup_in(&[
            ("DB_SERVER", "db.internal"),
            ("DB_DATABASE", "shop"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_PORT", "5432"),
            ("DB_MAX_CONNECTIONS", "4"),
        ]))
        .unwrap();

        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 5432);
        assert_eq!(config.password, "s3cret");
        assert_eq!(config.max_connections, 4);
    }

    #[test]
    fn should_fail_when_database_name_is_missing() {
        let result = database_config_from(lookup_in(&[("DB_USER", "app")]));

        assert!(matches!(
            result,
            Err(ConfigError::MissingVariable("DB_DATABASE"))
        ));
    }
}
