use std::str::FromStr;
use std::time::Duration;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long an idempotency key stays replayable (default: `300`).
    pub idempotency_ttl_secs: u64,
    /// Interval between idempotency cache sweeps (default: `60`).
    pub idempotency_sweep_interval_secs: u64,
    /// Whether to install the bootstrap announcements (default: `true`).
    pub seed_announcements: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 4000,
            cors_origins: vec!["http://localhost:5173".into()],
            request_timeout_secs: 30,
            idempotency_ttl_secs: 300,
            idempotency_sweep_interval_secs: 60,
            seed_announcements: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                           | Default                 |
    /// |-----------------------------------|-------------------------|
    /// | `HOST`                            | `0.0.0.0`               |
    /// | `PORT`                            | `4000`                  |
    /// | `CORS_ORIGINS`                    | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`            | `30`                    |
    /// | `IDEMPOTENCY_TTL_SECS`            | `300`                   |
    /// | `IDEMPOTENCY_SWEEP_INTERVAL_SECS` | `60`                    |
    /// | `SEED_ANNOUNCEMENTS`              | `true`                  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let config = Self {
            host,
            port: parse_var(&lookup, "PORT", defaults.port, "u16")?,
            cors_origins,
            request_timeout_secs: parse_var(
                &lookup,
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
                "u64",
            )?,
            idempotency_ttl_secs: parse_var(
                &lookup,
                "IDEMPOTENCY_TTL_SECS",
                defaults.idempotency_ttl_secs,
                "u64",
            )?,
            idempotency_sweep_interval_secs: parse_var(
                &lookup,
                "IDEMPOTENCY_SWEEP_INTERVAL_SECS",
                defaults.idempotency_sweep_interval_secs,
                "u64",
            )?,
            seed_announcements: parse_var(
                &lookup,
                "SEED_ANNOUNCEMENTS",
                defaults.seed_announcements,
                "bool",
            )?,
        };

        // `tokio::time::interval` panics on a zero period.
        if config.idempotency_sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "IDEMPOTENCY_SWEEP_INTERVAL_SECS",
                value: "0".into(),
                expected: "positive number of seconds",
            });
        }

        Ok(config)
    }

    pub fn idempotency_ttl(&self) -> Duration {
        Duration::from_secs(self.idempotency_ttl_secs)
    }

    pub fn idempotency_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.idempotency_sweep_interval_secs)
    }
}

fn parse_var<F, T>(
    lookup: &F,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value,
            expected,
        }),
    }
}
