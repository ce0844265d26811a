use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use credishield::analytics::PredictionLogRepository;
use credishield::cases::{case_router, CaseRepository, CaseService};
use credishield::explain::{explanation_router, ExplanationService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_explanation_routes<R, C>(
    service: Arc<ExplanationService<R>>,
    cases: Arc<CaseService<C>>,
) -> axum::Router
where
    R: PredictionLogRepository + 'static,
    C: CaseRepository + 'static,
{
    explanation_router(service)
        .merge(case_router(cases))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "credishield-api" }))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryCaseStore, InMemoryPredictionLog};
    use axum::body::Body;
    use axum::http::Request;
    use credishield::explain::DerivationConfig;
    use tower::ServiceExt;

    fn test_router() -> axum::Router {
        let repository = Arc::new(InMemoryPredictionLog::default());
        let service = Arc::new(ExplanationService::new(
            repository,
            DerivationConfig::default(),
            "1.0.0".to_string(),
        ));
        let cases = Arc::new(CaseService::new(Arc::new(InMemoryCaseStore::default())));
        with_explanation_routes(service, cases)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    #[tokio::test]
    async fn explain_endpoint_returns_full_panel_and_logs() {
        let router = test_router();
        let payload = json!({
            "applicant": { "credit_amount": 5000, "duration": 24, "purpose": "car" },
            "prediction": {
                "probability_of_default": 0.62,
                "top_risk_increasing": [
                    { "feature": "credit_amount", "impact": 0.15 },
                    { "feature": "duration", "impact": 0.08 }
                ],
                "top_risk_decreasing": []
            },
            "locale": "en"
        });

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/explain")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["confidence"]["band"], "medium");
        assert!(body["narrative"].as_str().expect("narrative").contains("62.0%"));
        assert_eq!(body["ranked_actions"][0]["rank"], 1);
        assert_eq!(body["top_factors"], "Loan amount, Loan duration");

        let analytics = router
            .oneshot(
                Request::get("/api/v1/analytics")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let analytics_body = body_json(analytics).await;
        assert_eq!(analytics_body["total_predictions"], 1);
    }

    #[tokio::test]
    async fn explain_without_prediction_returns_neutral_panel() {
        let router = test_router();
        let payload = json!({
            "applicant": { "credit_amount": 5000, "duration": 24 }
        });

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/explain")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["confidence"]["band"], "unknown");
        assert_eq!(body["confidence"]["score"], 0.0);
        assert_eq!(body["narrative"], "");
        assert!(body.get("counterfactual").is_none());

        // Nothing gets logged without a prediction.
        let analytics = router
            .oneshot(
                Request::get("/api/v1/analytics")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let analytics_body = body_json(analytics).await;
        assert_eq!(analytics_body["total_predictions"], 0);
    }

    #[tokio::test]
    async fn audit_export_serves_csv() {
        let router = test_router();
        let response = router
            .oneshot(
                Request::get("/api/v1/audit-logs/export")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content type set")
            .to_str()
            .expect("header is ascii");
        assert!(content_type.starts_with("text/csv"));
    }

    #[tokio::test]
    async fn case_routes_open_and_fetch_a_case() {
        let router = test_router();
        let payload = json!({
            "created_by": "scoring-service",
            "applicant": { "credit_amount": 5000, "duration": 24 },
            "prediction": { "probability_of_default": 0.62 }
        });

        let created = router
            .clone()
            .oneshot(
                Request::post("/api/v1/cases")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(created.status(), StatusCode::CREATED);
        let created_body = body_json(created).await;
        assert_eq!(created_body["status"], "new");
        let id = created_body["id"].as_u64().expect("case id");

        let fetched = router
            .oneshot(
                Request::get(format!("/api/v1/cases/{id}"))
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(fetched.status(), StatusCode::OK);
        let fetched_body = body_json(fetched).await;
        assert_eq!(fetched_body["created_by"], "scoring-service");
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let router = test_router();
        let response = router
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }
}
