use dotenvy::dotenv;
use tracing::error;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod product {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
        #[cfg(test)]
        pub mod test_support;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod environment;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration, connects to the database and serves the product API.
/// A failed database connection aborts startup before the listener is bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Connect to the database
    let connections = database_config::init_database()
        .await
        .inspect_err(|err| error!(error = %err, "Failed to start server"))?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(connections, config.environment);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
