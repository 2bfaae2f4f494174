use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub placement: PlacementConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let recommendation_limit = match env::var("PLACEMENT_RECOMMENDATION_LIMIT") {
            Ok(raw) => parse_limit(&raw)?,
            Err(_) => DEFAULT_RECOMMENDATION_LIMIT,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            placement: PlacementConfig {
                recommendation_limit,
            },
        })
    }
}

fn parse_limit(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidRecommendationLimit {
            value: raw.to_string(),
        }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs for the placement engine that callers may tune per deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Maximum number of drives returned by the recommendation ranker.
    pub recommendation_limit: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidRecommendationLimit { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRecommendationLimit { value } => write!(
                f,
                "PLACEMENT_RECOMMENDATION_LIMIT must be a positive integer (found '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidRecommendationLimit { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("PLACEMENT_RECOMMENDATION_LIMIT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.placement.recommendation_limit, 3);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_invalid_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "ninety");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidPort)));
        reset_env();
    }

    #[test]
    fn reads_recommendation_limit_override() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PLACEMENT_RECOMMENDATION_LIMIT", "5");
        env::set_var("APP_ENV", "PROD");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.placement.recommendation_limit, 5);
        assert_eq!(config.environment, AppEnvironment::Production);
        reset_env();
    }

    #[test]
    fn rejects_zero_recommendation_limit() {
        assert!(matches!(
            parse_limit("0"),
            Err(ConfigError::InvalidRecommendationLimit { .. })
        ));
        assert!(parse_limit(" 2 ").is_ok());
    }
}
