use super::repository::PredictionLogEntry;
use crate::explain::text_field;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// PD at or above which a logged prediction counts as high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub prediction_count: usize,
    pub avg_pd: f64,
    pub high_risk_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    pub total_predictions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_prediction_at: Option<DateTime<Utc>>,
    pub trends: Vec<TrendPoint>,
}

/// Aggregate the prediction log into per-day trend points, ascending by
/// date.
pub fn trends(entries: &[PredictionLogEntry]) -> AnalyticsSummary {
    let mut buckets: BTreeMap<NaiveDate, (usize, f64, usize)> = BTreeMap::new();
    let mut last_prediction_at: Option<DateTime<Utc>> = None;

    for entry in entries {
        let date = entry.timestamp.date_naive();
        let bucket = buckets.entry(date).or_insert((0, 0.0, 0));
        bucket.0 += 1;
        bucket.1 += entry.pd_score();
        if entry.pd_score() >= HIGH_RISK_THRESHOLD {
            bucket.2 += 1;
        }

        last_prediction_at = match last_prediction_at {
            Some(latest) if latest >= entry.timestamp => Some(latest),
            _ => Some(entry.timestamp),
        };
    }

    let trends = buckets
        .into_iter()
        .map(|(date, (count, pd_sum, high))| TrendPoint {
            date,
            prediction_count: count,
            avg_pd: pd_sum / count as f64,
            high_risk_rate: high as f64 / count as f64,
        })
        .collect();

    AnalyticsSummary {
        total_predictions: entries.len(),
        last_prediction_at,
        trends,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMetric {
    pub group: String,
    pub count: usize,
    pub avg_pd: f64,
    pub high_risk_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FairnessDiagnostics {
    pub overall_count: usize,
    pub by_personal_status: Vec<GroupMetric>,
    pub by_foreign_worker: Vec<GroupMetric>,
}

/// Group-level PD metrics over sensitive attributes, for disparity
/// monitoring on the admin panel.
pub fn fairness(entries: &[PredictionLogEntry]) -> FairnessDiagnostics {
    FairnessDiagnostics {
        overall_count: entries.len(),
        by_personal_status: aggregate_by(entries, "personal_status"),
        by_foreign_worker: aggregate_by(entries, "foreign_worker"),
    }
}

fn aggregate_by(entries: &[PredictionLogEntry], field: &str) -> Vec<GroupMetric> {
    let mut buckets: BTreeMap<String, (usize, f64, usize)> = BTreeMap::new();

    for entry in entries {
        let group = text_field(&entry.input, field).unwrap_or_else(|| "unknown".to_string());
        let bucket = buckets.entry(group).or_insert((0, 0.0, 0));
        bucket.0 += 1;
        bucket.1 += entry.pd_score();
        if entry.pd_score() >= HIGH_RISK_THRESHOLD {
            bucket.2 += 1;
        }
    }

    let mut metrics: Vec<GroupMetric> = buckets
        .into_iter()
        .map(|(group, (count, pd_sum, high))| GroupMetric {
            group,
            count,
            avg_pd: pd_sum / count as f64,
            high_risk_rate: high as f64 / count as f64,
        })
        .collect();

    // Largest groups first; group name breaks ties deterministically.
    metrics.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.group.cmp(&b.group)));
    metrics
}
