use crate::infra::AppState;
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use campus_placement::workflows::placement::applications::{
    application_router, ApplicationRepository, PlacementApplicationService,
};
use campus_placement::workflows::placement::{
    evaluate, score, CandidateProfile, Drive, DriveCatalog, DriveCategory, EligibilityCriteria,
    EligibilityResult,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DriveListQuery {
    #[serde(default)]
    pub(crate) category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EligibilityRequest {
    pub(crate) profile: CandidateProfile,
    pub(crate) criteria: EligibilityCriteria,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResumeScoreRequest {
    pub(crate) text: String,
}

/// Full placement surface: application routes plus catalog, eligibility, resume and probes.
/// Callers layer `Extension<AppState>` and `Extension<Arc<DriveCatalog>>` on top.
pub(crate) fn with_placement_routes<R>(service: Arc<PlacementApplicationService<R>>) -> axum::Router
where
    R: ApplicationRepository + 'static,
{
    application_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/placement/drives", axum::routing::get(drives_endpoint))
        .route(
            "/api/v1/placement/eligibility",
            axum::routing::post(eligibility_endpoint),
        )
        .route(
            "/api/v1/placement/resume/score",
            axum::routing::post(resume_score_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn drives_endpoint(
    Extension(catalog): Extension<Arc<DriveCatalog>>,
    Query(query): Query<DriveListQuery>,
) -> Response {
    let drives: Vec<Drive> = match query.category.as_deref() {
        None => catalog.drives().to_vec(),
        Some(raw) => match DriveCategory::parse(raw) {
            Some(category) => catalog.by_category(category).cloned().collect(),
            None => {
                let payload = json!({ "error": format!("unknown drive category '{raw}'") });
                return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
            }
        },
    };

    (StatusCode::OK, Json(drives)).into_response()
}

pub(crate) async fn eligibility_endpoint(
    Json(request): Json<EligibilityRequest>,
) -> Json<EligibilityResult> {
    Json(evaluate(&request.profile, &request.criteria))
}

pub(crate) async fn resume_score_endpoint(Json(request): Json<ResumeScoreRequest>) -> Response {
    let report = score(&request.text);
    let status = match report.ensure_resume() {
        Ok(_) => {
            info!(
                ats_score = report.ats_score,
                characters = report.signals.character_count,
                "resume scored"
            );
            StatusCode::OK
        }
        Err(rejection) => {
            info!(%rejection, "resume rejected");
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    (status, Json(report)).into_response()
}
