use axum::body::Body;
use axum::http::{Request, StatusCode};
use credishield::analytics::{
    NewPredictionLog, PredictionLogEntry, PredictionLogRepository, RepositoryError,
};
use credishield::explain::{
    explanation_router, ApplicantForm, DerivationConfig, ExplainRequest, ExplanationService,
    FieldValue, Locale, Prediction, ReasonCode,
};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct RecordingLog {
    entries: Mutex<Vec<PredictionLogEntry>>,
    sequence: AtomicU64,
}

impl PredictionLogRepository for RecordingLog {
    fn append(&self, entry: NewPredictionLog) -> Result<PredictionLogEntry, RepositoryError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let record = PredictionLogEntry {
            id,
            timestamp: entry.timestamp,
            model_version: entry.model_version,
            input: entry.input,
            prediction: entry.prediction,
        };
        self.entries
            .lock()
            .expect("log mutex poisoned")
            .push(record.clone());
        Ok(record)
    }

    fn all(&self) -> Result<Vec<PredictionLogEntry>, RepositoryError> {
        Ok(self.entries.lock().expect("log mutex poisoned").clone())
    }
}

fn service() -> (Arc<RecordingLog>, ExplanationService<RecordingLog>) {
    let repository = Arc::new(RecordingLog::default());
    let service = ExplanationService::new(
        repository.clone(),
        DerivationConfig::default(),
        "1.0.0".to_string(),
    );
    (repository, service)
}

fn applicant(purpose: &str) -> ApplicantForm {
    let mut form = ApplicantForm::new();
    form.insert("credit_amount".to_string(), FieldValue::Number(5000.0));
    form.insert("duration".to_string(), FieldValue::Number(24.0));
    form.insert("purpose".to_string(), FieldValue::Text(purpose.to_string()));
    form
}

fn prediction(pd: f64) -> Prediction {
    Prediction {
        probability_of_default: pd,
        top_risk_increasing: vec![ReasonCode {
            feature: "credit_amount".to_string(),
            impact: 0.15,
        }],
        top_risk_decreasing: Vec::new(),
    }
}

#[test]
fn explain_logs_usable_predictions_only() {
    let (repository, service) = service();

    service
        .explain(ExplainRequest {
            applicant: applicant("car"),
            prediction: Some(prediction(0.62)),
            locale: Locale::En,
        })
        .expect("explain succeeds");

    service
        .explain(ExplainRequest {
            applicant: applicant("car"),
            prediction: None,
            locale: Locale::En,
        })
        .expect("explain succeeds without prediction");

    service
        .explain(ExplainRequest {
            applicant: applicant("car"),
            prediction: Some(prediction(f64::NAN)),
            locale: Locale::En,
        })
        .expect("explain tolerates invalid pd");

    let logged = repository.all().expect("log readable");
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].model_version, "1.0.0");
    assert!((logged[0].pd_score() - 0.62).abs() < 1e-12);
}

#[test]
fn analytics_and_fairness_reflect_logged_predictions() {
    let (_repository, service) = service();

    for (purpose, pd) in [("car", 0.62), ("car", 0.30), ("radio/tv", 0.55)] {
        service
            .explain(ExplainRequest {
                applicant: applicant(purpose),
                prediction: Some(prediction(pd)),
                locale: Locale::En,
            })
            .expect("explain succeeds");
    }

    let analytics = service.analytics().expect("analytics computes");
    assert_eq!(analytics.total_predictions, 3);
    assert!(analytics.last_prediction_at.is_some());
    assert_eq!(analytics.trends.len(), 1);
    assert_eq!(analytics.trends[0].prediction_count, 3);

    let page = service
        .audit_logs(10, 0, Some("car"))
        .expect("audit page computes");
    assert_eq!(page.total, 2);
    assert_eq!(page.entries[0].id, 2, "newest matching entry first");

    let fairness = service.fairness().expect("fairness computes");
    assert_eq!(fairness.overall_count, 3);
    assert_eq!(fairness.by_personal_status[0].group, "unknown");

    let csv = service.audit_csv().expect("csv renders");
    assert!(csv.starts_with("id,timestamp,model_version"));
    assert_eq!(csv.lines().count(), 4);
}

struct BrokenLog;

impl PredictionLogRepository for BrokenLog {
    fn append(&self, _entry: NewPredictionLog) -> Result<PredictionLogEntry, RepositoryError> {
        Err(RepositoryError::Unavailable("log store offline".to_string()))
    }

    fn all(&self) -> Result<Vec<PredictionLogEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("log store offline".to_string()))
    }
}

#[tokio::test]
async fn repository_failures_surface_as_server_errors() {
    let service = Arc::new(ExplanationService::new(
        Arc::new(BrokenLog),
        DerivationConfig::default(),
        "1.0.0".to_string(),
    ));
    let router = explanation_router(service);

    let payload = json!({
        "applicant": { "credit_amount": 5000, "duration": 24 },
        "prediction": { "probability_of_default": 0.62 }
    });
    let response = router
        .oneshot(
            Request::post("/api/v1/explain")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is JSON");
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("log store offline"));
}

#[tokio::test]
async fn router_paginates_audit_logs_via_query() {
    let (_repository, service) = service();
    for pd in [0.1, 0.2, 0.3] {
        service
            .explain(ExplainRequest {
                applicant: applicant("car"),
                prediction: Some(prediction(pd)),
                locale: Locale::En,
            })
            .expect("explain succeeds");
    }

    let router = explanation_router(Arc::new(service));
    let response = router
        .oneshot(
            Request::get("/api/v1/audit-logs?limit=2&offset=1")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is JSON");

    assert_eq!(body["total"], 3);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["offset"], 1);
    assert_eq!(body["count"], 2);
    assert_eq!(body["entries"][0]["id"], json!(2));
}
