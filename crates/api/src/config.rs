use axum::http::HeaderValue;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has invalid value '{value}': expected {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string. Always supplied by the environment.
    pub url: String,
    /// Upper bound on pooled connections (default: `10`).
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before giving up (default: `10`).
    pub connect_timeout_secs: u64,
}

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Deployment name reported by `/health` (default: `development`).
    pub environment: String,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `5000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `APP_ENV`                 | `development`              |
    /// | `DATABASE_URL`            | required                   |
    /// | `DB_MAX_CONNECTIONS`      | `10`                       |
    /// | `DB_CONNECT_TIMEOUT_SECS` | `10`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_number("PORT", var("PORT", "5000"), "a port number")?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    value: origin.to_string(),
                    expected: "a valid origin header value",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_number(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS", "30"),
            "a whole number of seconds",
        )?;

        let environment = var("APP_ENV", "development");

        let url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_number(
            "DB_MAX_CONNECTIONS",
            var("DB_MAX_CONNECTIONS", "10"),
            "a positive connection count",
        )?;
        let connect_timeout_secs = parse_number(
            "DB_CONNECT_TIMEOUT_SECS",
            var("DB_CONNECT_TIMEOUT_SECS", "10"),
            "a whole number of seconds",
        )?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            environment,
            database: DatabaseConfig {
                url,
                max_connections,
                connect_timeout_secs,
            },
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    name: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            name,
            value,
            expected,
        })
}
