use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The store was unreachable or rejected the credentials.
    #[error("database.connection_error: {0}")]
    ConnectionError(String),
    /// The pool was requested before `ConnectionManager::connect` succeeded.
    #[error("database.not_connected")]
    NotConnected,
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub const DEFAULT_PORT: u16 = 1433;
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

    /// Creates a new database configuration with default pool limits
    pub fn new(host: String, port: u16, database: String, user: String, password: String) -> Self {
        Self {
            host,
            port,
            database,
            user,
            password,
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            min_connections: 0,
            idle_timeout: Duration::from_secs(30),
            acquire_timeout: Duration::from_secs(30),
        }
    }

    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

/// Owns the process-wide connection pool.
///
/// The pool is opened at most once, by the first successful [`connect`]
/// call, and is never replaced afterwards. Repositories hold the manager
/// and ask it for the pool on every query.
///
/// [`connect`]: ConnectionManager::connect
pub struct ConnectionManager {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
}

impl ConnectionManager {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Opens the pool if it is not open yet and returns it.
    ///
    /// A failed attempt leaves the manager disconnected, so a later call
    /// tries again.
    pub async fn connect(&self) -> Result<&PgPool, DatabaseError> {
        self.pool
            .get_or_try_init(|| async move {
                let pool = PgPoolOptions::new()
                    .min_connections(self.config.min_connections)
                    .max_connections(self.config.max_connections)
                    .idle_timeout(self.config.idle_timeout)
                    .acquire_timeout(self.config.acquire_timeout)
                    .connect_with(self.config.connect_options())
                    .await
                    .map_err(|err| DatabaseError::ConnectionError(err.to_string()))?;

                info!(
                    host = %self.config.host,
                    port = self.config.port,
                    database = %self.config.database,
                    "Connected to database successfully"
                );
                Ok(pool)
            })
            .await
    }

    /// Returns the pool opened by [`ConnectionManager::connect`].
    pub fn pool(&self) -> Result<&PgPool, DatabaseError> {
        self.pool.get().ok_or(DatabaseError::NotConnected)
    }

    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    /// Closes every pooled connection. Queries issued afterwards fail.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            info!("Database pool closed");
        }
    }
}
