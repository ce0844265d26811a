use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::{ExplainRequest, ExplanationService, ExplanationServiceError};
use crate::analytics::{PredictionLogRepository, DEFAULT_PAGE_LIMIT};

/// Router builder exposing the explanation and analytics endpoints.
pub fn explanation_router<R>(service: Arc<ExplanationService<R>>) -> Router
where
    R: PredictionLogRepository + 'static,
{
    Router::new()
        .route("/api/v1/explain", post(explain_handler::<R>))
        .route("/api/v1/analytics", get(analytics_handler::<R>))
        .route("/api/v1/audit-logs", get(audit_logs_handler::<R>))
        .route(
            "/api/v1/audit-logs/export",
            get(audit_export_handler::<R>),
        )
        .route("/api/v1/fairness", get(fairness_handler::<R>))
        .with_state(service)
}

pub(crate) async fn explain_handler<R>(
    State(service): State<Arc<ExplanationService<R>>>,
    Json(request): Json<ExplainRequest>,
) -> Response
where
    R: PredictionLogRepository + 'static,
{
    match service.explain(request) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn analytics_handler<R>(
    State(service): State<Arc<ExplanationService<R>>>,
) -> Response
where
    R: PredictionLogRepository + 'static,
{
    match service.analytics() {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => service_error(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuditLogQuery {
    limit: Option<usize>,
    offset: Option<usize>,
    purpose: Option<String>,
}

pub(crate) async fn audit_logs_handler<R>(
    State(service): State<Arc<ExplanationService<R>>>,
    Query(query): Query<AuditLogQuery>,
) -> Response
where
    R: PredictionLogRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    let offset = query.offset.unwrap_or(0);
    match service.audit_logs(limit, offset, query.purpose.as_deref()) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn audit_export_handler<R>(
    State(service): State<Arc<ExplanationService<R>>>,
) -> Response
where
    R: PredictionLogRepository + 'static,
{
    match service.audit_csv() {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"audit_logs.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn fairness_handler<R>(
    State(service): State<Arc<ExplanationService<R>>>,
) -> Response
where
    R: PredictionLogRepository + 'static,
{
    match service.fairness() {
        Ok(diagnostics) => (StatusCode::OK, Json(diagnostics)).into_response(),
        Err(error) => service_error(error),
    }
}

fn service_error(error: ExplanationServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
