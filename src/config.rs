/*
 * Responsibility
 * - Load settings from the environment (DATABASE_URL, token verification keys, ...)
 * - Validate them up front (missing or malformed values abort start-up)
 */
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Key material used to verify access tokens.
#[derive(Clone)]
pub enum AccessKey {
    /// HS256 shared secret.
    Secret(String),
    /// EdDSA (Ed25519) public key, PEM encoded.
    Ed25519PublicPem(String),
}

impl std::fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        match self {
            Self::Secret(_) => f.write_str("AccessKey::Secret(..)"),
            Self::Ed25519PublicPem(_) => f.write_str("AccessKey::Ed25519PublicPem(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub database_url: String,
    pub database_max_connections: u32,

    pub access_key: AccessKey,
    pub auth_issuer: Option<String>,
    pub auth_audience: Option<String>,
    pub access_token_leeway_seconds: u64,

    pub session_cookie_name: String,

    pub http_timeout_seconds: u64,
    pub http_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port: u16 = match non_empty("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let database_url = non_empty("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let database_max_connections = match non_empty("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid("DATABASE_MAX_CONNECTIONS"))?,
            None => 5,
        };

        // A shared secret wins over a public key when both are present.
        let access_key = match (
            non_empty("ACCESS_JWT_SECRET"),
            non_empty("ACCESS_JWT_PUBLIC_KEY_PEM"),
        ) {
            (Some(secret), _) => AccessKey::Secret(secret),
            (None, Some(pem)) => AccessKey::Ed25519PublicPem(pem.replace("\\n", "\n")),
            (None, None) => return Err(ConfigError::Missing("ACCESS_JWT_SECRET")),
        };

        let auth_issuer = non_empty("AUTH_ISSUER");
        let auth_audience = non_empty("AUTH_AUDIENCE");

        let access_token_leeway_seconds = non_empty("ACCESS_TOKEN_LEEWAY_SECONDS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(60);

        let session_cookie_name =
            non_empty("SESSION_COOKIE_NAME").unwrap_or_else(|| "SESSION".to_string());

        let http_timeout_seconds = non_empty("HTTP_TIMEOUT_SECONDS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(30);

        let http_body_limit_bytes = non_empty("HTTP_BODY_LIMIT_BYTES")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        Ok(Self {
            addr,
            app_env,
            database_url,
            database_max_connections,
            access_key,
            auth_issuer,
            auth_audience,
            access_token_leeway_seconds,
            session_cookie_name,
            http_timeout_seconds,
            http_body_limit_bytes,
        })
    }
}
