use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// Uses `RUST_LOG` when set, `info,sqlx=warn` otherwise.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS policy from the configured origins.
///
/// No configured origin allows any origin, which suits local development.
///
/// # Returns
/// - `Ok(CorsLayer)` - Policy allowing any method and header from the origins
/// - `Err(ConfigError::InvalidEnvVar)` - An origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: format!("{}: {}", origin, e),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
