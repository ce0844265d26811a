use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CaseStatus, CaseUpdate, NewCase};
use super::repository::{CaseRepository, CaseRepositoryError};
use super::service::{CaseService, CaseServiceError, DEFAULT_QUEUE_LIMIT};

/// Router builder exposing the review-queue endpoints.
pub fn case_router<C>(service: Arc<CaseService<C>>) -> Router
where
    C: CaseRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/cases",
            post(open_handler::<C>).get(queue_handler::<C>),
        )
        .route(
            "/api/v1/cases/:case_id",
            get(get_handler::<C>).patch(amend_handler::<C>),
        )
        .with_state(service)
}

pub(crate) async fn open_handler<C>(
    State(service): State<Arc<CaseService<C>>>,
    Json(intake): Json<NewCase>,
) -> Response
where
    C: CaseRepository + 'static,
{
    match service.open(intake) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => service_error(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CaseQueueQuery {
    limit: Option<usize>,
    offset: Option<usize>,
    status: Option<CaseStatus>,
    assigned_to: Option<String>,
}

pub(crate) async fn queue_handler<C>(
    State(service): State<Arc<CaseService<C>>>,
    Query(query): Query<CaseQueueQuery>,
) -> Response
where
    C: CaseRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_QUEUE_LIMIT);
    let offset = query.offset.unwrap_or(0);
    match service.list(limit, offset, query.status, query.assigned_to.as_deref()) {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn get_handler<C>(
    State(service): State<Arc<CaseService<C>>>,
    Path(case_id): Path<u64>,
) -> Response
where
    C: CaseRepository + 'static,
{
    match service.get(case_id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn amend_handler<C>(
    State(service): State<Arc<CaseService<C>>>,
    Path(case_id): Path<u64>,
    Json(update): Json<CaseUpdate>,
) -> Response
where
    C: CaseRepository + 'static,
{
    match service.amend(case_id, update) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => service_error(error),
    }
}

fn service_error(error: CaseServiceError) -> Response {
    let status = match error {
        CaseServiceError::Repository(CaseRepositoryError::NotFound) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
