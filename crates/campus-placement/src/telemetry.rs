use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Crates whose spans and events follow `APP_LOG_LEVEL`; everything else stays at `warn`.
const PLACEMENT_TARGETS: &[&str] = &["campus_placement", "campus_placement_api"];

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { directives: String, source: ParseError },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { directives, .. } => {
                write!(f, "APP_LOG_LEVEL produced an invalid filter '{directives}'")
            }
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "tracing subscriber could not be installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins; otherwise `APP_LOG_LEVEL` is scoped to the
/// placement crates.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => placement_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

/// A bare level such as `debug` becomes `warn,campus_placement=debug,...`. Values that already
/// carry directives are used as written.
fn filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directives = String::from("warn");
    for target in PLACEMENT_TARGETS {
        directives.push_str(&format!(",{target}={level}"));
    }
    directives
}

fn placement_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    let directives = filter_directives(level);
    EnvFilter::try_new(&directives)
        .map_err(|source| TelemetryError::InvalidFilter { directives, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_placement_crates() {
        assert_eq!(
            filter_directives(" debug "),
            "warn,campus_placement=debug,campus_placement_api=debug"
        );
        assert!(placement_filter("info").is_ok());
    }

    #[test]
    fn explicit_directives_pass_through() {
        assert_eq!(
            filter_directives("campus_placement=trace,info"),
            "campus_placement=trace,info"
        );
    }

    #[test]
    fn rejects_malformed_filter() {
        match placement_filter("campus_placement=loud") {
            Err(TelemetryError::InvalidFilter { directives, .. }) => {
                assert_eq!(directives, "campus_placement=loud")
            }
            other => panic!("expected filter error, got {other:?}"),
        }
    }
}
