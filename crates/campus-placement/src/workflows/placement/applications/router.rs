use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::super::domain::{ApplicationId, CandidateProfile, DriveId, StudentId};
use super::lifecycle::{ApplicationStatus, LifecycleError};
use super::repository::{ApplicationRepository, ApplicationStatusView, RepositoryError};
use super::service::{ApplicationServiceError, PlacementApplicationService};

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub profile: CandidateProfile,
    pub drive_id: DriveId,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub profile: CandidateProfile,
}

/// Router builder exposing HTTP endpoints for applications and recommendations.
pub fn application_router<R>(service: Arc<PlacementApplicationService<R>>) -> Router
where
    R: ApplicationRepository + 'static,
{
    Router::new()
        .route("/api/v1/placement/applications", post(apply_handler::<R>))
        .route(
            "/api/v1/placement/applications/:application_id",
            get(status_handler::<R>),
        )
        .route(
            "/api/v1/placement/applications/:application_id/status",
            patch(update_status_handler::<R>),
        )
        .route(
            "/api/v1/placement/students/:student_id/applications",
            get(student_applications_handler::<R>),
        )
        .route(
            "/api/v1/placement/drives/:drive_id/applications",
            get(drive_applications_handler::<R>),
        )
        .route(
            "/api/v1/placement/recommendations",
            post(recommendations_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn apply_handler<R>(
    State(service): State<Arc<PlacementApplicationService<R>>>,
    Json(request): Json<ApplyRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.apply(&request.profile, &request.drive_id) {
        Ok(application) => (StatusCode::CREATED, Json(application.status_view())).into_response(),
        Err(ApplicationServiceError::Ineligible(result)) => {
            let payload = json!({
                "error": "candidate is not eligible for this drive",
                "eligibility": result,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<PlacementApplicationService<R>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.get(&ApplicationId(application_id)) {
        Ok(application) => (StatusCode::OK, Json(application.status_view())).into_response(),
        Err(other) => error_response(other),
    }
}

pub(crate) async fn update_status_handler<R>(
    State(service): State<Arc<PlacementApplicationService<R>>>,
    Path(application_id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.update_status(&ApplicationId(application_id), request.status) {
        Ok(application) => (StatusCode::OK, Json(application.status_view())).into_response(),
        Err(other) => error_response(other),
    }
}

pub(crate) async fn student_applications_handler<R>(
    State(service): State<Arc<PlacementApplicationService<R>>>,
    Path(student_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.applications_for_student(&StudentId(student_id)) {
        Ok(applications) => {
            let views: Vec<ApplicationStatusView> =
                applications.iter().map(|app| app.status_view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn drive_applications_handler<R>(
    State(service): State<Arc<PlacementApplicationService<R>>>,
    Path(drive_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.applicants_for_drive(&DriveId(drive_id)) {
        Ok(applications) => {
            let views: Vec<ApplicationStatusView> =
                applications.iter().map(|app| app.status_view()).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(other) => error_response(other),
    }
}

pub(crate) async fn recommendations_handler<R>(
    State(service): State<Arc<PlacementApplicationService<R>>>,
    Json(request): Json<RecommendationRequest>,
) -> Response
where
    R: ApplicationRepository + 'static,
{
    match service.recommendations(&request.profile) {
        Ok(picks) => (StatusCode::OK, Json(picks)).into_response(),
        Err(other) => error_response(other),
    }
}

fn error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::Ineligible(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationServiceError::UnknownDrive(_)
        | ApplicationServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationServiceError::Lifecycle(LifecycleError::DuplicateApplication { .. })
        | ApplicationServiceError::Lifecycle(LifecycleError::InvalidTransition { .. })
        | ApplicationServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ApplicationServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
