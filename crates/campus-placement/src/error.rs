use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::placement::applications::ApplicationServiceError;
use crate::workflows::placement::CatalogImportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Catalog(CatalogImportError),
    Workflow(ApplicationServiceError),
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Workflow(err) => write!(f, "placement workflow error: {}", err),
            AppError::Json(err) => write!(f, "invalid json: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Workflow(err) => Some(err),
            AppError::Json(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Catalog(_) | AppError::Workflow(_) | AppError::Json(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogImportError> for AppError {
    fn from(value: CatalogImportError) -> Self {
        Self::Catalog(value)
    }
}

impl From<ApplicationServiceError> for AppError {
    fn from(value: ApplicationServiceError) -> Self {
        Self::Workflow(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_are_client_errors() {
        let err = AppError::from(CatalogImportError::InvalidRow {
            line: 3,
            reason: "unknown category 'Bootcamp'".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "catalog error: invalid drive on data line 3: unknown category 'Bootcamp'"
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn config_errors_are_server_errors() {
        let err = AppError::from(ConfigError::InvalidPort);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
