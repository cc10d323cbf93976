use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_MS: i64 = 86_400_000;
const DEFAULT_JWT_HEADER: &str = "Authorization";
const DEFAULT_JWT_PREFIX: &str = "Bearer ";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_expiration_ms: i64,
    pub jwt_header: String,
    pub jwt_prefix: String,

    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            jwt_expiration_ms: match std::env::var("JWT_EXPIRATION_MS") {
                Ok(value) => parse_expiration(&value)?,
                Err(_) => DEFAULT_JWT_EXPIRATION_MS,
            },
            jwt_header: std::env::var("JWT_HEADER")
                .unwrap_or_else(|_| DEFAULT_JWT_HEADER.to_string()),
            jwt_prefix: std::env::var("JWT_PREFIX")
                .unwrap_or_else(|_| DEFAULT_JWT_PREFIX.to_string()),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|value| parse_origins(&value))
                .unwrap_or_default(),
        })
    }
}

fn parse_expiration(value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "JWT_EXPIRATION_MS".to_string(),
            reason: e.to_string(),
        })
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
